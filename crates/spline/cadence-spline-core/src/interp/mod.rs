//! Interpolation engines over key point collections.
//!
//! Every engine answers the same questions: the value and tangent at an
//! absolute position, or at a fraction of the whole key point domain.

pub mod cardinal;
pub mod functions;
pub mod linear;

pub use cardinal::CardinalSpline;
pub use linear::LinearInterpolation;

use crate::error::SplineError;
use crate::interval::Interval;
use crate::keypoint::KeyPoints;
use crate::search::SearchOutcome;

/// Minimum number of key points an engine needs.
pub const MIN_KEY_POINTS: usize = 2;

/// Shared contract of the interpolation engines.
pub trait Interpolation {
    type Value;

    /// Interval between the first and last key point position.
    fn domain(&self) -> Result<Interval<f64>, SplineError>;

    /// Interpolated value at an absolute position.
    fn value_at(&self, position: f64) -> Result<Self::Value, SplineError>;

    /// Derivative of the curve with respect to position.
    fn tangent_at(&self, position: f64) -> Result<Self::Value, SplineError>;

    /// Position at `fraction` of the domain.
    fn position_for(&self, fraction: f64) -> Result<f64, SplineError> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(SplineError::FractionOutOfRange { fraction });
        }
        self.domain()?
            .value_at(fraction)
            .ok_or(SplineError::FractionOutOfRange { fraction })
    }

    /// Interpolated value at `fraction` in [0, 1] of the whole domain.
    fn interpolate(&self, fraction: f64) -> Result<Self::Value, SplineError> {
        let position = self.position_for(fraction)?;
        self.value_at(position)
    }

    /// Tangent at `fraction` in [0, 1] of the whole domain.
    fn tangent_at_fraction(&self, fraction: f64) -> Result<Self::Value, SplineError> {
        let position = self.position_for(fraction)?;
        self.tangent_at(position)
    }
}

/// Indices of the four control points around a position, plus the local parameter.
///
/// `before` and `after` fall back to the segment's own endpoints at the
/// collection boundaries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Segment {
    pub before: usize,
    pub smaller: usize,
    pub bigger: usize,
    pub after: usize,
    /// Local parameter in [0, 1] between `smaller` and `bigger`.
    pub t: f64,
    /// Position distance between `smaller` and `bigger`.
    pub span: f64,
}

/// Where a position falls within a key point collection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Location {
    KeyPoint(usize),
    Segment(Segment),
}

pub(crate) fn require_key_points<C: KeyPoints + ?Sized>(points: &C) -> Result<(), SplineError> {
    if points.len() < MIN_KEY_POINTS {
        return Err(SplineError::InsufficientKeyPoints {
            required: MIN_KEY_POINTS,
            actual: points.len(),
        });
    }
    Ok(())
}

pub(crate) fn domain_of<C: KeyPoints + ?Sized>(points: &C) -> Result<Interval<f64>, SplineError> {
    require_key_points(points)?;
    points.domain().ok_or_else(|| SplineError::InvalidKeyPoints {
        reason: "key point positions are not ordered".to_string(),
    })
}

fn position_of<C: KeyPoints + ?Sized>(points: &C, index: usize) -> Result<f64, SplineError> {
    points
        .position(index)
        .ok_or_else(|| SplineError::InvalidKeyPoints {
            reason: format!("no key point at index {index}"),
        })
}

pub(crate) fn value_of<C: KeyPoints + ?Sized>(
    points: &C,
    index: usize,
) -> Result<&C::Value, SplineError> {
    points
        .value(index)
        .ok_or_else(|| SplineError::InvalidKeyPoints {
            reason: format!("no key point at index {index}"),
        })
}

/// Segment between `smaller` and `smaller + 1` evaluated at local parameter `t`.
pub(crate) fn segment<C: KeyPoints + ?Sized>(
    points: &C,
    smaller: usize,
    t: f64,
) -> Result<Segment, SplineError> {
    let last = points.len().saturating_sub(1);
    let bigger = (smaller + 1).min(last);
    let span = position_of(points, bigger)? - position_of(points, smaller)?;
    Ok(Segment {
        before: smaller.saturating_sub(1),
        smaller,
        bigger,
        after: (bigger + 1).min(last),
        t,
        span,
    })
}

/// Find the key point at, or the segment around, `position`.
pub(crate) fn locate<C: KeyPoints + ?Sized>(
    points: &C,
    position: f64,
) -> Result<Location, SplineError> {
    let domain = domain_of(points)?;
    match points.search(position) {
        SearchOutcome::Exact(index) => Ok(Location::KeyPoint(index)),
        SearchOutcome::Between { smaller, .. } => {
            let start = position_of(points, smaller)?;
            let seg = segment(points, smaller, 0.0)?;
            let t = (position - start) / seg.span;
            Ok(Location::Segment(Segment { t, ..seg }))
        }
        SearchOutcome::OutOfRange => Err(SplineError::PositionOutOfRange {
            position,
            start: domain.start,
            end: domain.end,
        }),
    }
}

/// Segment used to evaluate derivatives at `position`. At a key point this is
/// the outgoing segment, or the incoming one for the last key point.
pub(crate) fn locate_segment<C: KeyPoints + ?Sized>(
    points: &C,
    position: f64,
) -> Result<Segment, SplineError> {
    match locate(points, position)? {
        Location::Segment(seg) => Ok(seg),
        Location::KeyPoint(index) if index + 1 < points.len() => segment(points, index, 0.0),
        Location::KeyPoint(index) => segment(points, index - 1, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypoint::AbsoluteKeyPoints;

    fn points() -> AbsoluteKeyPoints<f64, f64> {
        AbsoluteKeyPoints::from_pairs([(0.0, 0.0), (1.0, 1.0), (3.0, 0.0), (4.0, 2.0)]).unwrap()
    }

    #[test]
    fn locate_inner_segment() {
        let Location::Segment(seg) = locate(&points(), 2.0).unwrap() else {
            panic!("expected a segment");
        };
        assert_eq!((seg.before, seg.smaller, seg.bigger, seg.after), (0, 1, 2, 3));
        assert_eq!(seg.t, 0.5);
        assert_eq!(seg.span, 2.0);
    }

    #[test]
    fn boundary_neighbours_are_reused() {
        let Location::Segment(first) = locate(&points(), 0.5).unwrap() else {
            panic!("expected a segment");
        };
        assert_eq!((first.before, first.smaller), (0, 0));

        let Location::Segment(last) = locate(&points(), 3.5).unwrap() else {
            panic!("expected a segment");
        };
        assert_eq!((last.bigger, last.after), (3, 3));
    }

    #[test]
    fn exact_key_point_and_out_of_range() {
        assert_eq!(locate(&points(), 3.0).unwrap(), Location::KeyPoint(2));
        assert!(matches!(
            locate(&points(), 4.5),
            Err(SplineError::PositionOutOfRange { .. })
        ));
    }

    #[test]
    fn derivative_segment_at_key_points() {
        let first = locate_segment(&points(), 0.0).unwrap();
        assert_eq!((first.smaller, first.bigger, first.t), (0, 1, 0.0));
        let last = locate_segment(&points(), 4.0).unwrap();
        assert_eq!((last.smaller, last.bigger, last.t), (2, 3, 1.0));
    }

    #[test]
    fn too_few_key_points() {
        let single = AbsoluteKeyPoints::from_pairs([(0.0, 1.0)]).unwrap();
        assert_eq!(
            locate(&single, 0.0).unwrap_err(),
            SplineError::InsufficientKeyPoints {
                required: 2,
                actual: 1
            }
        );
    }
}
