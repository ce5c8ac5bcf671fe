//! Interval-halving search over anything indexable.
//!
//! The index type is generic; the caller supplies `key_at` to read the key at an
//! index and `nearest_index` to turn the (fractional) midpoint of the current
//! range into a valid index.

use std::cmp::Ordering;

use crate::interval::{Interval, IntervalBound};

/// Result of a binary search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome<I> {
    /// The key at this index equals the target.
    Exact(I),
    /// The target lies strictly between the keys at two neighbouring indices.
    Between { smaller: I, bigger: I },
    /// The target is below the first key, above the last one, or not comparable.
    OutOfRange,
}

impl<I> SearchOutcome<I> {
    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, SearchOutcome::Exact(_))
    }

    #[inline]
    pub fn is_in_range(&self) -> bool {
        !matches!(self, SearchOutcome::OutOfRange)
    }
}

/// Search `range` for `target`.
///
/// Keys must be sorted ascending over the range. `nearest_index` must map a
/// value inside `[start, end]` to an index inside `[start, end]`; anything else
/// ends the search with the current bounds.
pub fn binary_search<I, K, F, N>(
    range: &Interval<I>,
    target: &K,
    mut key_at: F,
    mut nearest_index: N,
) -> SearchOutcome<I>
where
    I: IntervalBound,
    K: PartialOrd,
    F: FnMut(I) -> K,
    N: FnMut(f64) -> I,
{
    let mut start = range.start;
    let mut end = range.end;

    match target.partial_cmp(&key_at(start)) {
        None | Some(Ordering::Less) => return SearchOutcome::OutOfRange,
        Some(Ordering::Equal) => return SearchOutcome::Exact(start),
        Some(Ordering::Greater) => {}
    }
    match target.partial_cmp(&key_at(end)) {
        None | Some(Ordering::Greater) => return SearchOutcome::OutOfRange,
        Some(Ordering::Equal) => return SearchOutcome::Exact(end),
        Some(Ordering::Less) => {}
    }

    loop {
        let bounds = Interval {
            start,
            end,
            start_included: true,
            end_included: true,
        };
        let center = nearest_index(bounds.center());
        if !(start < center && center < end) {
            return SearchOutcome::Between {
                smaller: start,
                bigger: end,
            };
        }
        match target.partial_cmp(&key_at(center)) {
            Some(Ordering::Equal) => return SearchOutcome::Exact(center),
            Some(Ordering::Less) => end = center,
            Some(Ordering::Greater) => start = center,
            None => return SearchOutcome::OutOfRange,
        }
    }
}

/// Binary search over a sorted slice, keyed by `key`.
pub fn search_sorted<T, K, F>(items: &[T], target: &K, key: F) -> SearchOutcome<usize>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if items.is_empty() {
        return SearchOutcome::OutOfRange;
    }
    let range = Interval {
        start: 0usize,
        end: items.len() - 1,
        start_included: true,
        end_included: true,
    };
    binary_search(&range, target, |i| key(&items[i]), |c| c.floor() as usize)
}
