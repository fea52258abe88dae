//! Folds of the binary combinators over sequences of intervals.

use super::{compare_end, compare_start, Domain, Endpoint, Interval};
use itertools::Itertools;

/// Walks `intervals` pairwise, replacing each adjacent pair with
/// `combine(left, right)` when that yields a result. When it yields `None`,
/// the left interval is emitted unchanged and the right one carries on.
///
/// # Examples
///
/// ```rust
/// use intervals::{reduce_pairwise, Interval};
///
/// let intervals = vec![
///     Interval::closed(1, 3).unwrap(),
///     Interval::closed(2, 5).unwrap(),
///     Interval::closed(8, 9).unwrap(),
/// ];
/// let merged = reduce_pairwise(intervals, Interval::union);
/// assert_eq!(merged, vec![Interval::closed(1, 5).unwrap(), Interval::closed(8, 9).unwrap()]);
/// ```
pub fn reduce_pairwise<T, I, F>(intervals: I, mut combine: F) -> Vec<Interval<T>>
where
    T: Domain,
    I: IntoIterator<Item = Interval<T>>,
    F: FnMut(&Interval<T>, &Interval<T>) -> Option<Interval<T>>,
{
    intervals
        .into_iter()
        .coalesce(|prev, curr| combine(&prev, &curr).ok_or((prev, curr)))
        .collect()
}

/// Sorts by start, breaking ties by end.
pub fn sort_by_start<T: Domain>(intervals: &mut [Interval<T>]) {
    intervals.sort_by(|a, b| compare_start(a, b).then_with(|| compare_end(a, b)));
}

/// Merges every group of connected intervals into one, in start order.
/// Empty intervals are dropped.
pub fn union_all<T, I>(intervals: I) -> Vec<Interval<T>>
where
    T: Domain,
    I: IntoIterator<Item = Interval<T>>,
{
    let mut intervals: Vec<_> = intervals.into_iter().filter(|i| !i.is_empty()).collect();
    sort_by_start(&mut intervals);
    reduce_pairwise(intervals, Interval::union)
}

/// Intersects runs of overlapping neighbours, in the given order.
pub fn intersect_all<T, I>(intervals: I) -> Vec<Interval<T>>
where
    T: Domain,
    I: IntoIterator<Item = Interval<T>>,
{
    reduce_pairwise(intervals, Interval::intersect)
}

/// Replaces each connected pair of neighbours with the span up to where the
/// second one starts. Expects the input sorted by start.
pub fn exclude_overlap<T, I>(intervals: I) -> Vec<Interval<T>>
where
    T: Domain,
    I: IntoIterator<Item = Interval<T>>,
{
    reduce_pairwise(intervals, Interval::except)
}

/// The holes between the merged intervals, in order.
pub fn gaps<T, I>(intervals: I) -> Vec<Interval<T>>
where
    T: Domain,
    I: IntoIterator<Item = Interval<T>>,
{
    union_all(intervals)
        .iter()
        .tuple_windows()
        .filter_map(|(a, b)| a.gap(b))
        .collect()
}

/// Everything not covered by any of the intervals, including the unbounded
/// stretches before the first and after the last one.
///
/// # Examples
///
/// ```rust
/// use intervals::{complement, Interval};
///
/// let covered = vec![Interval::closed(1, 3).unwrap(), Interval::open(5, 8).unwrap()];
/// assert_eq!(
///     complement(covered),
///     vec![
///         Interval::less_than(1),
///         Interval::open_closed(3, 5).unwrap(),
///         Interval::at_least(8),
///     ]
/// );
/// ```
pub fn complement<T, I>(intervals: I) -> Vec<Interval<T>>
where
    T: Domain,
    I: IntoIterator<Item = Interval<T>>,
{
    let merged = union_all(intervals);
    let (first, last) = match (merged.first(), merged.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return vec![Interval::all()],
    };

    let mut result = Vec::with_capacity(merged.len() + 1);
    if first.start.is_finite() {
        result.push(Interval::from_parts(
            Endpoint::NegInfinity,
            first.start.clone(),
            false,
            !first.start_inclusive,
        ));
    }
    result.extend(merged.iter().tuple_windows().filter_map(|(a, b)| a.gap(b)));
    if last.end.is_finite() {
        result.push(Interval::from_parts(
            last.end.clone(),
            Endpoint::PosInfinity,
            !last.end_inclusive,
            false,
        ));
    }
    result
}

/// The smallest interval containing every element, or `None` when there are
/// no non-empty elements.
pub fn hull_all<T, I>(intervals: I) -> Option<Interval<T>>
where
    T: Domain,
    I: IntoIterator<Item = Interval<T>>,
{
    intervals
        .into_iter()
        .filter(|i| !i.is_empty())
        .reduce(|acc, i| acc.hull(&i))
}
