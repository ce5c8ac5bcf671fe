//! Cardinal spline interpolation (Catmull-Rom at zero tension).
//!
//! For a position between key points p1 and p2, the neighbours p0 and p3 supply
//! the tangents `m1 = (1 - tension)(v2 - v0)/2` and `m2 = (1 - tension)(v3 - v1)/2`.
//! At the ends of the collection the missing neighbour is the boundary point
//! itself. Each dimension is blended with a cubic Hermite segment and the
//! results are rebuilt into a value by the type provider.

use crate::config::SplineConfig;
use crate::error::SplineError;
use crate::interp::functions::{
    cardinal_tangent, catmull_rom_spline, hermite_derivative, hermite_spline,
};
use crate::interp::{domain_of, locate, locate_segment, value_of, Interpolation, Location, Segment};
use crate::interval::Interval;
use crate::keypoint::KeyPoints;
use crate::provider::TypeProvider;

/// Cardinal spline through every key point of `C`.
#[derive(Debug, Clone)]
pub struct CardinalSpline<C, P> {
    key_points: C,
    provider: P,
    config: SplineConfig,
}

impl<C, P> CardinalSpline<C, P>
where
    C: KeyPoints,
    P: TypeProvider<Value = C::Value>,
    C::Value: Clone,
{
    /// Catmull-Rom spline (tension 0).
    pub fn new(key_points: C, provider: P) -> Self {
        Self::with_config(key_points, provider, SplineConfig::default())
    }

    pub fn with_config(key_points: C, provider: P, config: SplineConfig) -> Self {
        Self {
            key_points,
            provider,
            config,
        }
    }

    #[inline]
    pub fn key_points(&self) -> &C {
        &self.key_points
    }

    #[inline]
    pub fn config(&self) -> &SplineConfig {
        &self.config
    }

    pub fn into_key_points(self) -> C {
        self.key_points
    }

    fn dimensions_at(&self, index: usize) -> Result<Vec<f64>, SplineError> {
        self.provider
            .dimensions(value_of(&self.key_points, index)?)
    }

    /// Blend every dimension over `seg`. With `derivative`, returns dH/dposition.
    fn blend(&self, seg: &Segment, derivative: bool) -> Result<C::Value, SplineError> {
        let v0 = self.dimensions_at(seg.before)?;
        let v1 = self.dimensions_at(seg.smaller)?;
        let v2 = self.dimensions_at(seg.bigger)?;
        let v3 = self.dimensions_at(seg.after)?;
        let tension = self.config.tension;

        let blended: Vec<f64> = (0..self.provider.dimension_count())
            .map(|d| {
                if !derivative && tension == 0.0 {
                    return catmull_rom_spline(v0[d], v1[d], v2[d], v3[d], seg.t);
                }
                let m1 = cardinal_tangent(v0[d], v2[d], tension);
                let m2 = cardinal_tangent(v1[d], v3[d], tension);
                if derivative {
                    hermite_derivative(v1[d], v2[d], m1, m2, seg.t) / seg.span
                } else {
                    hermite_spline(v1[d], v2[d], m1, m2, seg.t)
                }
            })
            .collect();

        self.provider.create_instance(&blended)
    }
}

impl<C, P> Interpolation for CardinalSpline<C, P>
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoint::AbsoluteKeyPoints;
    use crate::provider::ScalarProvider;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9, "left={a} right={b}");
    }

    fn spline(pairs: &[(f64, f64)]) -> CardinalSpline<AbsoluteKeyPoints<f64, f64>, ScalarProvider> {
        let points = AbsoluteKeyPoints::from_pairs(pairs.iter().copied()).unwrap();
        CardinalSpline::new(points, ScalarProvider)
    }

    #[test]
    fn midpoint_of_inner_segment() {
        // v = [0, 10, 20, 15], segment 1..2: m1 = (20 - 0)/2 = 10, m2 = (15 - 10)/2 = 2.5
        let s = spline(&[(0.0, 0.0), (1.0, 10.0), (2.0, 20.0), (3.0, 15.0)]);
        let expected = hermite_spline(10.0, 20.0, 10.0, 2.5, 0.5);
        approx(s.value_at(1.5).unwrap(), expected);
        assert!(s.value_at(1.5).unwrap() > 10.0 && s.value_at(1.5).unwrap() < 20.0);
    }

    #[test]
    fn zero_tension_matches_catmull_rom() {
        let s = spline(&[(0.0, 1.0), (1.0, 4.0), (2.0, -2.0), (3.0, 0.5)]);
        for &(position, expected) in &[
            (0.4, catmull_rom_spline(1.0, 1.0, 4.0, -2.0, 0.4)),
            (1.7, catmull_rom_spline(1.0, 4.0, -2.0, 0.5, 0.7)),
            (2.5, catmull_rom_spline(4.0, -2.0, 0.5, 0.5, 0.5)),
        ] {
            approx(s.value_at(position).unwrap(), expected);
        }
    }

    #[test]
    fn first_segment_reuses_boundary_point() {
        // m1 = (v2 - v1)/2 = 5, m2 = (v3 - v1)/2 = 10
        let s = spline(&[(0.0, 0.0), (1.0, 10.0), (2.0, 20.0)]);
        approx(s.value_at(0.25).unwrap(), hermite_spline(0.0, 10.0, 5.0, 10.0, 0.25));
    }

    #[test]
    fn full_tension_flattens_tangents() {
        let points =
            AbsoluteKeyPoints::from_pairs([(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)]).unwrap();
        let s = CardinalSpline::with_config(points, ScalarProvider, SplineConfig { tension: 1.0 });
        approx(s.tangent_at(0.0).unwrap(), 0.0);
        approx(s.tangent_at(1.0).unwrap(), 0.0);
        approx(s.value_at(0.5).unwrap(), 5.0);
    }

    #[test]
    fn tangent_is_per_unit_position() {
        // Straight line, slope 3.
        let s = spline(&[(0.0, 0.0), (1.0, 3.0), (2.0, 6.0), (3.0, 9.0)]);
        approx(s.tangent_at(1.5).unwrap(), 3.0);
        approx(s.tangent_at_fraction(0.5).unwrap(), 3.0);
    }

    #[test]
    fn exact_key_point_is_returned_verbatim() {
        let s = spline(&[(0.0, 0.1), (0.3, 0.7), (0.9, 0.2)]);
        assert_eq!(s.value_at(0.3).unwrap(), 0.7);
        assert_eq!(s.interpolate(0.0).unwrap(), 0.1);
        assert_eq!(s.interpolate(1.0).unwrap(), 0.2);
    }
}
