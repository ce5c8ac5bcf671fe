//! Key point collections: sorted (position, value) samples used as spline control data.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SplineError;
use crate::interval::{Interval, IntervalBound};
use crate::provider::TypeProvider;
use crate::search::{binary_search, SearchOutcome};

/// A value sampled at a position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyPoint<P, V> {
    pub position: P,
    pub value: V,
}

impl<P, V> KeyPoint<P, V> {
    #[inline]
    pub fn new(position: P, value: V) -> Self {
        Self { position, value }
    }
}

/// Read access shared by all key point collections.
///
/// Implementations keep their points sorted by ascending position.
pub trait KeyPoints {
    type Value;

    fn len(&self) -> usize;

    fn position(&self, index: usize) -> Option<f64>;

    fn value(&self, index: usize) -> Option<&Self::Value>;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Interval between the first and last position.
    fn domain(&self) -> Option<Interval<f64>> {
        let first = self.position(0)?;
        let last = self.position(self.len().checked_sub(1)?)?;
        Interval::new(first, last).ok()
    }

    /// Locate `position` among the key points.
    fn search(&self, position: f64) -> SearchOutcome<usize> {
        let Some(last) = self.len().checked_sub(1) else {
            return SearchOutcome::OutOfRange;
        };
        let range = Interval {
            start: 0usize,
            end: last,
            start_included: true,
            end_included: true,
        };
        binary_search(
            &range,
            &position,
            |i| self.position(i).unwrap_or(f64::NAN),
            |c| c.floor() as usize,
        )
    }
}

/// Key points at caller-assigned positions.
///
/// Points are kept sorted by position no matter the insertion order. Inserting at
/// a position that already holds a key point replaces its value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AbsoluteKeyPoints<P, V> {
    points: Vec<KeyPoint<P, V>>,
}

impl<P, V> Default for AbsoluteKeyPoints<P, V> {
    fn default() -> Self {
        Self { points: Vec::new() }
    }
}

impl<P: IntervalBound, V> AbsoluteKeyPoints<P, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from unordered (position, value) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (P, V)>) -> Result<Self, SplineError> {
        let mut collection = Self::new();
        for (position, value) in pairs {
            collection.insert(position, value)?;
        }
        Ok(collection)
    }

    /// Insert a key point, returning the value it replaced if the position was taken.
    pub fn insert(&mut self, position: P, value: V) -> Result<Option<V>, SplineError> {
        if position.partial_cmp(&position).is_none() {
            return Err(SplineError::InvalidKeyPoints {
                reason: "key point position is not comparable".to_string(),
            });
        }
        let slot = self.points.binary_search_by(|k| {
            k.position
                .partial_cmp(&position)
                .unwrap_or(Ordering::Less)
        });
        match slot {
            Ok(index) => {
                debug!(
                    "replacing key point at position {:?}",
                    position.to_f64()
                );
                Ok(Some(std::mem::replace(&mut self.points[index].value, value)))
            }
            Err(index) => {
                self.points.insert(index, KeyPoint::new(position, value));
                Ok(None)
            }
        }
    }

    /// Remove the key point at exactly `position`.
    pub fn remove(&mut self, position: P) -> Option<V> {
        let index = self
            .points
            .iter()
            .position(|k| k.position.partial_cmp(&position) == Some(Ordering::Equal))?;
        Some(self.points.remove(index).value)
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&KeyPoint<P, V>> {
        self.points.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[KeyPoint<P, V>] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyPoint<P, V>> {
        self.points.iter()
    }
}

impl<P: IntervalBound, V> KeyPoints for AbsoluteKeyPoints<P, V> {
    type Value = V;

    #[inline]
    fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn position(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|k| k.position.to_f64())
    }

    #[inline]
    fn value(&self, index: usize) -> Option<&V> {
        self.points.get(index).map(|k| &k.value)
    }
}

/// Key points positioned by accumulated distance between consecutive values.
///
/// The first value sits at position 0; every appended value sits at the previous
/// position plus the provider's distance to the previous value. Append-only.
#[derive(Debug, Clone)]
pub struct CumulativeKeyPoints<T: TypeProvider> {
    provider: T,
    points: Vec<KeyPoint<f64, T::Value>>,
}

impl<T: TypeProvider> CumulativeKeyPoints<T> {
    pub fn new(provider: T) -> Self {
        Self {
            provider,
            points: Vec::new(),
        }
    }

    /// Build a collection from values in path order.
    pub fn from_values(
        provider: T,
        values: impl IntoIterator<Item = T::Value>,
    ) -> Result<Self, SplineError> {
        let mut collection = Self::new(provider);
        for value in values {
            collection.push(value)?;
        }
        Ok(collection)
    }

    /// Append a value and return the position assigned to it.
    ///
    /// A value at zero distance from the last one would duplicate its position;
    /// it is dropped and the existing position is returned.
    pub fn push(&mut self, value: T::Value) -> Result<f64, SplineError> {
        let Some(last) = self.points.last() else {
            self.points.push(KeyPoint::new(0.0, value));
            return Ok(0.0);
        };
        let distance = self.provider.relative_position(&last.value, &value);
        if !(distance >= 0.0) || !distance.is_finite() {
            return Err(SplineError::InvalidKeyPoints {
                reason: format!("distance metric returned {distance}"),
            });
        }
        if distance == 0.0 {
            debug!(
                "dropping key point at zero distance from position {}",
                last.position
            );
            return Ok(last.position);
        }
        let position = last.position + distance;
        self.points.push(KeyPoint::new(position, value));
        Ok(position)
    }

    #[inline]
    pub fn provider(&self) -> &T {
        &self.provider
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&KeyPoint<f64, T::Value>> {
        self.points.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[KeyPoint<f64, T::Value>] {
        &self.points
    }

    /// Total accumulated distance.
    pub fn total_length(&self) -> f64 {
        self.points.last().map(|k| k.position).unwrap_or(0.0)
    }
}

impl<T: TypeProvider> KeyPoints for CumulativeKeyPoints<T> {
    type Value = T::Value;

    #[inline]
    fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    fn position(&self, index: usize) -> Option<f64> {
        self.points.get(index).map(|k| k.position)
    }

    #[inline]
    fn value(&self, index: usize) -> Option<&T::Value> {
        self.points.get(index).map(|k| &k.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{ScalarProvider, Vector2Provider};
    use crate::value::Vector2;

    #[test]
    fn absolute_points_stay_sorted() {
        let points = AbsoluteKeyPoints::from_pairs([(3.0, "c"), (1.0, "a"), (2.0, "b")]).unwrap();
        let order: Vec<_> = points.iter().map(|k| k.value).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert_eq!(points.domain(), Some(Interval::new(1.0, 3.0).unwrap()));
    }

    #[test]
    fn duplicate_position_replaces_value() {
        let mut points = AbsoluteKeyPoints::new();
        assert_eq!(points.insert(5, 1.0).unwrap(), None);
        assert_eq!(points.insert(5, 2.0).unwrap(), Some(1.0));
        assert_eq!(points.len(), 1);
        assert_eq!(points.value(0), Some(&2.0));
    }

    #[test]
    fn nan_position_rejected() {
        let mut points = AbsoluteKeyPoints::new();
        assert!(points.insert(f64::NAN, 1.0).is_err());
        assert!(points.is_empty());
    }

    #[test]
    fn remove_by_position() {
        let mut points = AbsoluteKeyPoints::from_pairs([(0, 'a'), (10, 'b')]).unwrap();
        assert_eq!(points.remove(10), Some('b'));
        assert_eq!(points.remove(10), None);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn search_on_collection() {
        let points = AbsoluteKeyPoints::from_pairs([(0.0, 0.0), (2.0, 1.0), (5.0, 2.0)]).unwrap();
        assert_eq!(points.search(2.0), SearchOutcome::Exact(1));
        assert_eq!(
            points.search(3.0),
            SearchOutcome::Between {
                smaller: 1,
                bigger: 2
            }
        );
        assert_eq!(points.search(6.0), SearchOutcome::OutOfRange);
        let empty: AbsoluteKeyPoints<f64, f64> = AbsoluteKeyPoints::new();
        assert_eq!(empty.search(0.0), SearchOutcome::OutOfRange);
        assert!(empty.domain().is_none());
    }

    #[test]
    fn cumulative_positions_accumulate_distance() {
        let points = CumulativeKeyPoints::from_values(
            Vector2Provider,
            [
                Vector2::new(0.0, 0.0),
                Vector2::new(3.0, 4.0),
                Vector2::new(3.0, 0.0),
            ],
        )
        .unwrap();
        assert_eq!(points.position(0), Some(0.0));
        assert_eq!(points.position(1), Some(5.0));
        assert_eq!(points.position(2), Some(9.0));
        assert_eq!(points.total_length(), 9.0);
    }

    #[test]
    fn cumulative_drops_zero_distance() {
        let mut points = CumulativeKeyPoints::new(ScalarProvider);
        assert_eq!(points.push(1.0).unwrap(), 0.0);
        assert_eq!(points.push(3.0).unwrap(), 2.0);
        assert_eq!(points.push(3.0).unwrap(), 2.0);
        assert_eq!(points.len(), 2);
    }
}
