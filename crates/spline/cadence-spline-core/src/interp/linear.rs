//! Piecewise linear interpolation between neighbouring key points.

use crate::error::SplineError;
use crate::interp::functions::lerp;
use crate::interp::{domain_of, locate, locate_segment, value_of, Interpolation, Location, Segment};
use crate::interval::Interval;
use crate::keypoint::KeyPoints;
use crate::provider::TypeProvider;

#[derive(Debug, Clone)]
pub struct LinearInterpolation<C, P> {
    key_points: C,
    provider: P,
}

impl<C, P> LinearInterpolation<C, P>
where
    C: KeyPoints,
    P: TypeProvider<Value = C::Value>,
    C::Value: Clone,
{
    pub fn new(key_points: C, provider: P) -> Self {
        Self {
            key_points,
            provider,
        }
    }

    #[inline]
    pub fn key_points(&self) -> &C {
        &self.key_points
    }

    pub fn into_key_points(self) -> C {
        self.key_points
    }

    fn blend(&self, seg: &Segment, derivative: bool) -> Result<C::Value, SplineError> {
        let start = self
            .provider
            .dimensions(value_of(&self.key_points, seg.smaller)?)?;
        let end = self
            .provider
            .dimensions(value_of(&self.key_points, seg.bigger)?)?;
        let blended: Vec<f64> = start
            .iter()
            .zip(end.iter())
            .map(|(s, e)| {
                if derivative {
                    (e - s) / seg.span
                } else {
                    lerp(*s, *e, seg.t)
                }
            })
            .collect();
        self.provider.create_instance(&blended)
    }
}

impl<C, P> Interpolation for LinearInterpolation<C, P>
where
    C: KeyPoints,
    P: TypeProvider<Value = C::Value>,
    C::Value: Clone,
{
    type Value = C::Value;

    fn domain(&self) -> Result<Interval<f64>, SplineError> {
        domain_of(&self.key_points)
    }

    fn value_at(&self, position: f64) -> Result<C::Value, SplineError> {
        match locate(&self.key_points, position)? {
            Location::KeyPoint(index) => value_of(&self.key_points, index).cloned(),
            Location::Segment(seg) => self.blend(&seg, false),
        }
    }

    fn tangent_at(&self, position: f64) -> Result<C::Value, SplineError> {
        let seg = locate_segment(&self.key_points, position)?;
        self.blend(&seg, true)
    }
}
