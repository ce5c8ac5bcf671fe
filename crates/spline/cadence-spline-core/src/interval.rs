//! Numeric intervals with per-bound inclusivity.
//!
//! Arithmetic (center, size, percentages) is carried out in `f64`; results that
//! map back into `T` go through [`NumCast`] and yield `None` when `T` cannot hold
//! them.

use num_traits::{NumCast, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::SplineError;

/// Types usable as interval bounds.
pub trait IntervalBound: Copy + PartialOrd + ToPrimitive + NumCast {}

impl<T: Copy + PartialOrd + ToPrimitive + NumCast> IntervalBound for T {}

#[inline]
fn as_f64<T: ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Which side(s) of a split keep the split point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitOption {
    Left,
    Right,
    Both,
}

/// An interval `[start, end]` where either bound may be excluded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interval<T> {
    pub start: T,
    pub end: T,
    pub start_included: bool,
    pub end_included: bool,
}

impl<T: IntervalBound> Interval<T> {
    /// Create a closed interval.
    #[inline]
    pub fn new(start: T, end: T) -> Result<Self, SplineError> {
        Self::with_inclusion(start, end, true, true)
    }

    /// Create an interval with explicit bound inclusivity.
    pub fn with_inclusion(
        start: T,
        end: T,
        start_included: bool,
        end_included: bool,
    ) -> Result<Self, SplineError> {
        if !(start <= end) {
            return Err(SplineError::InvalidInterval {
                start: as_f64(start),
                end: as_f64(end),
            });
        }
        Ok(Self {
            start,
            end,
            start_included,
            end_included,
        })
    }

    /// Distance between the bounds.
    #[inline]
    pub fn size(&self) -> f64 {
        as_f64(self.end) - as_f64(self.start)
    }

    /// Midpoint of the interval.
    #[inline]
    pub fn center(&self) -> f64 {
        as_f64(self.start) + self.size() / 2.0
    }

    /// Whether `value` lies in the interval, honouring excluded bounds.
    pub fn contains(&self, value: T) -> bool {
        let above_start = if self.start_included {
            value >= self.start
        } else {
            value > self.start
        };
        let below_end = if self.end_included {
            value <= self.end
        } else {
            value < self.end
        };
        above_start && below_end
    }

    /// Limit `value` to `[start, end]`.
    ///
    /// Inclusivity flags are ignored: an excluded bound is still returned as is.
    /// Use [`Interval::try_clamp`] when excluded endpoints must be rejected.
    #[inline]
    pub fn clamp(&self, value: T) -> T {
        if value < self.start {
            self.start
        } else if value > self.end {
            self.end
        } else {
            value
        }
    }

    /// Like [`Interval::clamp`], but `None` when the result would sit on an
    /// excluded bound.
    pub fn try_clamp(&self, value: T) -> Option<T> {
        let clamped = self.clamp(value);
        if self.contains(clamped) {
            Some(clamped)
        } else {
            None
        }
    }

    /// Relative position of `value` in the interval: 0 at start, 1 at end.
    /// A zero-sized interval maps everything to 0.
    pub fn percentage_of(&self, value: T) -> f64 {
        let size = self.size();
        if size == 0.0 {
            return 0.0;
        }
        (as_f64(value) - as_f64(self.start)) / size
    }

    /// Value at `fraction` of the interval. Exact at 0 and 1.
    pub fn value_at(&self, fraction: f64) -> Option<T> {
        let value = as_f64(self.start) * (1.0 - fraction) + as_f64(self.end) * fraction;
        NumCast::from(value)
    }

    /// Map `value` from this interval onto the same relative position in `to`.
    pub fn map<U: IntervalBound>(&self, value: T, to: &Interval<U>) -> Option<U> {
        to.value_at(self.percentage_of(value))
    }

    /// Whether the two intervals share at least one point.
    pub fn intersects(&self, other: &Interval<T>) -> bool {
        let starts_before_other_ends = if self.start_included && other.end_included {
            self.start <= other.end
        } else {
            self.start < other.end
        };
        let other_starts_before_end = if other.start_included && self.end_included {
            other.start <= self.end
        } else {
            other.start < self.end
        };
        starts_before_other_ends && other_starts_before_end
    }

    /// The overlapping part of two intervals.
    pub fn intersection(&self, other: &Interval<T>) -> Option<Interval<T>> {
        if !self.intersects(other) {
            return None;
        }
        let (start, start_included) = if self.start > other.start {
            (self.start, self.start_included)
        } else if other.start > self.start {
            (other.start, other.start_included)
        } else {
            (self.start, self.start_included && other.start_included)
        };
        let (end, end_included) = if self.end < other.end {
            (self.end, self.end_included)
        } else if other.end < self.end {
            (other.end, other.end_included)
        } else {
            (self.end, self.end_included && other.end_included)
        };
        Some(Interval {
            start,
            end,
            start_included,
            end_included,
        })
    }

    /// Smallest interval containing this one and `value`.
    pub fn expand_to(&self, value: T) -> Interval<T> {
        let mut expanded = *self;
        if value < self.start {
            expanded.start = value;
            expanded.start_included = true;
        } else if value > self.end {
            expanded.end = value;
            expanded.end_included = true;
        }
        expanded
    }

    /// Grow or shrink the interval around its center.
    #[inline]
    pub fn scale(&self, factor: f64) -> Result<Interval<T>, SplineError> {
        self.scale_around(factor, 0.5)
    }

    /// Grow or shrink the interval around the point at `anchor` (a fraction of
    /// the interval, 0.5 being the center).
    pub fn scale_around(&self, factor: f64, anchor: f64) -> Result<Interval<T>, SplineError> {
        let start = as_f64(self.start);
        let end = as_f64(self.end);
        let pivot = start + self.size() * anchor;
        let new_start = pivot - (pivot - start) * factor;
        let new_end = pivot + (end - pivot) * factor;
        let invalid = SplineError::InvalidInterval {
            start: new_start,
            end: new_end,
        };
        match (NumCast::from(new_start), NumCast::from(new_end)) {
            (Some(s), Some(e)) => {
                Self::with_inclusion(s, e, self.start_included, self.end_included)
                    .map_err(|_| invalid)
            }
            _ => Err(invalid),
        }
    }

    /// Split at `at` into a left and a right interval. `option` decides which
    /// side keeps the split point.
    pub fn split(&self, at: T, option: SplitOption) -> Result<(Self, Self), SplineError> {
        if !(self.start <= at && at <= self.end) {
            return Err(SplineError::OutOfRange {
                value: as_f64(at),
                start: as_f64(self.start),
                end: as_f64(self.end),
            });
        }
        let left = Interval {
            start: self.start,
            end: at,
            start_included: self.start_included,
            end_included: matches!(option, SplitOption::Left | SplitOption::Both),
        };
        let right = Interval {
            start: at,
            end: self.end,
            start_included: matches!(option, SplitOption::Right | SplitOption::Both),
            end_included: self.end_included,
        };
        Ok((left, right))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_reversed_bounds() {
        assert!(Interval::new(2.0, 1.0).is_err());
        assert!(Interval::new(f64::NAN, 1.0).is_err());
        assert!(Interval::new(1, 1).is_ok());
    }

    #[test]
    fn contains_respects_inclusivity() {
        let half_open = Interval::with_inclusion(0.0, 1.0, true, false).unwrap();
        assert!(half_open.contains(0.0));
        assert!(half_open.contains(0.999));
        assert!(!half_open.contains(1.0));
        assert!(!half_open.contains(-0.1));
    }

    #[test]
    fn clamp_and_try_clamp() {
        let range = Interval::with_inclusion(0, 10, true, false).unwrap();
        assert_eq!(range.clamp(-5), 0);
        assert_eq!(range.clamp(5), 5);
        assert_eq!(range.clamp(50), 10);
        assert_eq!(range.try_clamp(-5), Some(0));
        assert_eq!(range.try_clamp(50), None);
    }

    #[test]
    fn center_and_scale() {
        let range = Interval::new(2.0, 6.0).unwrap();
        assert_eq!(range.center(), 4.0);

        let grown = range.scale(2.0).unwrap();
        assert_eq!((grown.start, grown.end), (0.0, 8.0));

        let shrunk = range.scale(0.5).unwrap();
        assert_eq!((shrunk.start, shrunk.end), (3.0, 5.0));

        let anchored = range.scale_around(2.0, 0.0).unwrap();
        assert_eq!((anchored.start, anchored.end), (2.0, 10.0));

        assert!(range.scale(-1.0).is_err());
    }

    #[test]
    fn split_assigns_split_point() {
        let range = Interval::new(0.0, 10.0).unwrap();

        let (left, right) = range.split(4.0, SplitOption::Left).unwrap();
        assert!(left.contains(4.0));
        assert!(!right.contains(4.0));
        assert_eq!((left.start, left.end), (0.0, 4.0));
        assert_eq!((right.start, right.end), (4.0, 10.0));

        let (left, right) = range.split(4.0, SplitOption::Right).unwrap();
        assert!(!left.contains(4.0));
        assert!(right.contains(4.0));

        let (left, right) = range.split(4.0, SplitOption::Both).unwrap();
        assert!(left.contains(4.0) && right.contains(4.0));

        assert!(range.split(11.0, SplitOption::Both).is_err());
    }

    #[test]
    fn percentages_and_mapping() {
        let range = Interval::new(10.0, 20.0).unwrap();
        assert_eq!(range.percentage_of(15.0), 0.5);
        assert_eq!(range.value_at(0.0), Some(10.0));
        assert_eq!(range.value_at(1.0), Some(20.0));

        let target = Interval::new(0, 100).unwrap();
        assert_eq!(range.map(12.5, &target), Some(25));

        let point = Interval::new(3.0, 3.0).unwrap();
        assert_eq!(point.percentage_of(3.0), 0.0);
    }

    #[test]
    fn intersections() {
        let a = Interval::new(0.0, 5.0).unwrap();
        let b = Interval::new(3.0, 8.0).unwrap();
        let overlap = a.intersection(&b).unwrap();
        assert_eq!((overlap.start, overlap.end), (3.0, 5.0));

        let touching = Interval::with_inclusion(5.0, 6.0, false, true).unwrap();
        assert!(!a.intersects(&touching));
        let touching_closed = Interval::new(5.0, 6.0).unwrap();
        assert!(a.intersects(&touching_closed));

        let far = Interval::new(9.0, 10.0).unwrap();
        assert!(a.intersection(&far).is_none());
    }

    #[test]
    fn expand_to_includes_value() {
        let range = Interval::with_inclusion(0.0, 1.0, false, false).unwrap();
        let expanded = range.expand_to(2.0);
        assert_eq!(expanded.end, 2.0);
        assert!(expanded.contains(2.0));
        assert!(!expanded.start_included);
        assert_eq!(range.expand_to(0.5), range);
    }
}
