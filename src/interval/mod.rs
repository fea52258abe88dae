mod canonical;
mod domain;
mod endpoint;
mod error;
mod ops;
mod parse;
mod relation;
mod sequence;

pub use canonical::Shape;
pub use domain::{Domain, Step};
pub use endpoint::Endpoint;
pub use error::IntervalError;
pub use relation::{
    classify, compare_end, compare_end_to_start, compare_start, compare_start_to_end,
    Relation,
};
pub use sequence::{
    complement, exclude_overlap, gaps, hull_all, intersect_all, reduce_pairwise,
    sort_by_start, union_all,
};

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Range, RangeInclusive};

/// An interval over an ordered domain: a pair of endpoints, each of which may
/// be finite or infinite, with an inclusive (closed) or exclusive (open)
/// status.
///
/// Infinite endpoints are never inclusive. An interval whose end lies at its
/// start is empty unless both bounds are closed, in which case it holds a
/// single point.
///
/// # Examples
///
/// ```rust
/// use intervals::{Interval, Relation};
///
/// let a = Interval::closed(1, 5).unwrap();
/// let b = Interval::closed(5, 9).unwrap();
/// assert_eq!(a.relation(&b), Relation::Meets);
/// assert_eq!(a.to_string(), "[1, 5]");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Interval<T> {
    start: Endpoint<T>,
    end: Endpoint<T>,
    start_inclusive: bool,
    end_inclusive: bool,
}

impl<T> Interval<T> {
    pub fn start(&self) -> &Endpoint<T> {
        &self.start
    }

    pub fn end(&self) -> &Endpoint<T> {
        &self.end
    }

    pub fn start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    pub fn end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    pub fn shape(&self) -> Shape {
        Shape::from_inclusivity(self.start_inclusive, self.end_inclusive)
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_infinite() && self.end.is_infinite()
    }

    pub fn is_half_bounded(&self) -> bool {
        self.start.is_infinite() != self.end.is_infinite()
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    // Builds an interval without checking the endpoint order. Inclusivity of
    // an infinite side is forced off.
    pub(crate) fn from_parts(
        start: Endpoint<T>,
        end: Endpoint<T>,
        start_inclusive: bool,
        end_inclusive: bool,
    ) -> Self {
        let start_inclusive = start_inclusive && start.is_finite();
        let end_inclusive = end_inclusive && end.is_finite();
        Self {
            start,
            end,
            start_inclusive,
            end_inclusive,
        }
    }
}

impl<T: Domain> Interval<T> {
    /// Creates a new `Interval` from two endpoints and their inclusivity.
    ///
    /// Inclusivity is ignored for an infinite endpoint. An end equal to the
    /// start is accepted and yields an empty interval unless both sides are
    /// inclusive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intervals::{Endpoint, Interval, IntervalError};
    ///
    /// let interval =
    ///     Interval::new(Endpoint::Finite(1), Endpoint::PosInfinity, true, true).unwrap();
    /// assert!(!interval.end_inclusive());
    ///
    /// let error =
    ///     Interval::new(Endpoint::Finite(2), Endpoint::Finite(1), true, true).unwrap_err();
    /// assert_eq!(error, IntervalError::EndBeforeStart);
    /// ```
    pub fn new(
        start: Endpoint<T>,
        end: Endpoint<T>,
        start_inclusive: bool,
        end_inclusive: bool,
    ) -> Result<Self, IntervalError> {
        if let Endpoint::PosInfinity = start {
            return Err(IntervalError::MisplacedInfinity("+∞", "start"));
        }
        if let Endpoint::NegInfinity = end {
            return Err(IntervalError::MisplacedInfinity("-∞", "end"));
        }
        if end.compare(&start) == Ordering::Less {
            return Err(IntervalError::EndBeforeStart);
        }
        Ok(Self::from_parts(start, end, start_inclusive, end_inclusive))
    }

    /// Creates a bounded interval of the given shape.
    pub fn with_shape(start: T, end: T, shape: Shape) -> Result<Self, IntervalError> {
        Self::new(
            Endpoint::Finite(start),
            Endpoint::Finite(end),
            shape.start_inclusive(),
            shape.end_inclusive(),
        )
    }

    /// `[start, end]`
    pub fn closed(start: T, end: T) -> Result<Self, IntervalError> {
        Self::with_shape(start, end, Shape::Closed)
    }

    /// `(start, end)`
    pub fn open(start: T, end: T) -> Result<Self, IntervalError> {
        Self::with_shape(start, end, Shape::Open)
    }

    /// `[start, end)`
    pub fn closed_open(start: T, end: T) -> Result<Self, IntervalError> {
        Self::with_shape(start, end, Shape::ClosedOpen)
    }

    /// `(start, end]`
    pub fn open_closed(start: T, end: T) -> Result<Self, IntervalError> {
        Self::with_shape(start, end, Shape::OpenClosed)
    }

    /// `[value, value]`
    pub fn singleton(value: T) -> Self {
        Self::from_parts(
            Endpoint::Finite(value.clone()),
            Endpoint::Finite(value),
            true,
            true,
        )
    }

    /// `[value, value)`, an empty interval anchored at `value`.
    pub fn empty_at(value: T) -> Self {
        Self::from_parts(
            Endpoint::Finite(value.clone()),
            Endpoint::Finite(value),
            true,
            false,
        )
    }

    /// `(-∞, ∞)`
    pub fn all() -> Self {
        Self::from_parts(Endpoint::NegInfinity, Endpoint::PosInfinity, false, false)
    }

    /// `(start, ∞)`
    pub fn greater_than(start: T) -> Self {
        Self::from_parts(Endpoint::Finite(start), Endpoint::PosInfinity, false, false)
    }

    /// `[start, ∞)`
    pub fn at_least(start: T) -> Self {
        Self::from_parts(Endpoint::Finite(start), Endpoint::PosInfinity, true, false)
    }

    /// `(-∞, end)`
    pub fn less_than(end: T) -> Self {
        Self::from_parts(Endpoint::NegInfinity, Endpoint::Finite(end), false, false)
    }

    /// `(-∞, end]`
    pub fn at_most(end: T) -> Self {
        Self::from_parts(Endpoint::NegInfinity, Endpoint::Finite(end), false, true)
    }

    /// True when the end lies after the start, or at the start with both
    /// bounds closed.
    pub fn is_valid(&self) -> bool {
        match self.end.compare(&self.start) {
            Ordering::Greater => true,
            Ordering::Equal => self.start_inclusive && self.end_inclusive,
            Ordering::Less => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.is_valid()
    }

    pub fn is_singleton(&self) -> bool {
        self.start_inclusive
            && self.end_inclusive
            && self.start.compare(&self.end) == Ordering::Equal
    }

    /// Checks whether `value` lies within the interval.
    pub fn contains(&self, value: &T) -> bool {
        let after_start = match &self.start {
            Endpoint::NegInfinity => true,
            Endpoint::Finite(start) => match start.compare(value) {
                Ordering::Less => true,
                Ordering::Equal => self.start_inclusive,
                Ordering::Greater => false,
            },
            Endpoint::PosInfinity => false,
        };
        let before_end = match &self.end {
            Endpoint::NegInfinity => false,
            Endpoint::Finite(end) => match end.compare(value) {
                Ordering::Greater => true,
                Ordering::Equal => self.end_inclusive,
                Ordering::Less => false,
            },
            Endpoint::PosInfinity => true,
        };
        after_start && before_end
    }

    /// Checks whether every point of `other` lies within `self`. The empty
    /// interval is contained by everything.
    pub fn contains_interval(&self, other: &Self) -> bool {
        other.is_empty()
            || (!self.is_empty()
                && compare_start(self, other) != Ordering::Greater
                && compare_end(self, other) != Ordering::Less)
    }
}

impl<T: Domain + Default> Interval<T> {
    /// An empty interval anchored at the domain's default value.
    pub fn empty() -> Self {
        Self::empty_at(T::default())
    }
}

impl<T: Domain> TryFrom<Range<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(range: Range<T>) -> Result<Self, Self::Error> {
        Self::closed_open(range.start, range.end)
    }
}

impl<T: Domain> TryFrom<RangeInclusive<T>> for Interval<T> {
    type Error = IntervalError;

    fn try_from(range: RangeInclusive<T>) -> Result<Self, Self::Error> {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.start_inclusive { '[' } else { '(' };
        let close = if self.end_inclusive { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.start, self.end, close)
    }
}

impl<T: Domain> PartialEq for Interval<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
            && self.end == other.end
            && self.start_inclusive == other.start_inclusive
            && self.end_inclusive == other.end_inclusive
    }
}

impl<T: Domain> Eq for Interval<T> {}

// Intervals order by their relation: everything that relates to `other`
// before `Relation::Equal` sorts below it.
impl<T: Domain> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Domain> Ord for Interval<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.relation(other).cmp(&Relation::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_good() {
        let intervals =
            vec![(-2, -1), (-1, -1), (-1, 0), (0, 0), (0, 1), (1, 1), (1, 2)];

        for (start, end) in intervals {
            let interval = Interval::closed(start, end).unwrap();
            assert_eq!(interval.start(), &Endpoint::Finite(start));
            assert_eq!(interval.end(), &Endpoint::Finite(end));
            assert!(interval.is_valid());
        }
    }

    #[test]
    fn new_bad() {
        let intervals = vec![(-1, -2), (0, -1), (1, 0), (2, 1)];

        for (start, end) in intervals {
            for shape in [Shape::Closed, Shape::Open, Shape::ClosedOpen, Shape::OpenClosed] {
                let error = Interval::with_shape(start, end, shape).unwrap_err();
                assert_eq!(IntervalError::EndBeforeStart, error);
            }
        }
    }

    #[test]
    fn misplaced_infinities() {
        let error = Interval::<i32>::new(Endpoint::PosInfinity, Endpoint::PosInfinity, false, false)
            .unwrap_err();
        assert_eq!(error, IntervalError::MisplacedInfinity("+∞", "start"));

        let error = Interval::<i32>::new(Endpoint::NegInfinity, Endpoint::NegInfinity, false, false)
            .unwrap_err();
        assert_eq!(error, IntervalError::MisplacedInfinity("-∞", "end"));
    }

    #[test]
    fn infinite_sides_are_never_inclusive() {
        let all = Interval::<i32>::new(Endpoint::NegInfinity, Endpoint::PosInfinity, true, true)
            .unwrap();
        assert!(!all.start_inclusive());
        assert!(!all.end_inclusive());
        assert_eq!(all, Interval::all());
        assert_eq!(all.shape(), Shape::Open);
    }

    #[test]
    fn emptiness() {
        assert!(!Interval::closed(3, 3).unwrap().is_empty());
        assert!(Interval::open(3, 3).unwrap().is_empty());
        assert!(Interval::closed_open(3, 3).unwrap().is_empty());
        assert!(Interval::open_closed(3, 3).unwrap().is_empty());
        assert!(Interval::<i32>::empty().is_empty());
        assert!(Interval::empty_at(7).is_empty());
        assert!(!Interval::open(3, 4).unwrap().is_empty());
        assert!(!Interval::<i32>::all().is_empty());
    }

    #[test]
    fn singletons() {
        assert!(Interval::singleton(4).is_singleton());
        assert_eq!(Interval::singleton(4), Interval::closed(4, 4).unwrap());
        assert!(!Interval::closed_open(4, 4).unwrap().is_singleton());
        assert!(!Interval::closed(4, 5).unwrap().is_singleton());
    }

    #[test]
    fn boundedness() {
        assert!(Interval::<i32>::all().is_unbounded());
        assert!(!Interval::<i32>::all().is_half_bounded());
        assert!(Interval::at_least(1).is_half_bounded());
        assert!(Interval::less_than(1).is_half_bounded());
        assert!(Interval::closed(1, 2).unwrap().is_bounded());
        assert!(!Interval::at_most(1).is_bounded());
    }

    #[test]
    fn contains_points() {
        let a = Interval::closed_open(1, 5).unwrap();
        assert!(a.contains(&1));
        assert!(a.contains(&4));
        assert!(!a.contains(&5));
        assert!(!a.contains(&0));

        let b = Interval::greater_than(2.5);
        assert!(!b.contains(&2.5));
        assert!(b.contains(&1e300));

        assert!(Interval::<i64>::all().contains(&i64::MIN));
        assert!(!Interval::empty_at(3).contains(&3));
    }

    #[test]
    fn contains_intervals() {
        let outer = Interval::closed(0, 10).unwrap();
        assert!(outer.contains_interval(&Interval::open(0, 10).unwrap()));
        assert!(outer.contains_interval(&outer));
        assert!(outer.contains_interval(&Interval::empty_at(42)));
        assert!(!outer.contains_interval(&Interval::open_closed(5, 11).unwrap()));
        assert!(!Interval::open(0, 10).unwrap().contains_interval(&outer));
        assert!(Interval::all().contains_interval(&Interval::at_most(3)));
    }

    #[test]
    fn ranges_convert() {
        assert_eq!(
            Interval::try_from(1..4).unwrap(),
            Interval::closed_open(1, 4).unwrap()
        );
        assert_eq!(
            Interval::try_from(1..=4).unwrap(),
            Interval::closed(1, 4).unwrap()
        );
        assert_eq!(
            Interval::try_from(Range { start: 4, end: 1 }).unwrap_err(),
            IntervalError::EndBeforeStart
        );
    }

    #[test]
    fn display() {
        assert_eq!(Interval::closed(1, 5).unwrap().to_string(), "[1, 5]");
        assert_eq!(Interval::open_closed(1, 5).unwrap().to_string(), "(1, 5]");
        assert_eq!(Interval::at_least(1).to_string(), "[1, ∞)");
        assert_eq!(Interval::<i32>::all().to_string(), "(-∞, ∞)");
    }

    #[test]
    fn ordering() {
        let a = Interval::closed(1, 3).unwrap();
        let b = Interval::closed(2, 6).unwrap();
        let c = Interval::closed(0, 8).unwrap();
        assert!(a < b);
        assert!(b > a);
        assert!(b < c);
        assert_eq!(a.cmp(&a), Ordering::Equal);

        let mut sorted = vec![c, b, a];
        sorted.sort();
        assert_eq!(sorted, vec![a, b, c]);
    }
}
