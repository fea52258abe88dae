//! Boundary-aware comparison primitives and the Allen-style relation
//! classifier built on them.
//!
//! The four `compare_*` functions are the only place where tie-breaking at
//! equal boundary values is decided; everything else in the algebra is
//! derived from their results.

use super::{Domain, Interval};
use std::cmp::Ordering;
use std::fmt;

/// One of the 13 mutually exclusive relations between two intervals, listed
/// in their ordering: every relation before `Equal` means the first interval
/// sorts below the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relation {
    Before,
    Meets,
    Overlaps,
    Starts,
    ContainedBy,
    Finishes,
    Equal,
    FinishedBy,
    Contains,
    StartedBy,
    OverlappedBy,
    MetBy,
    After,
}

impl Relation {
    pub const ALL: [Relation; 13] = [
        Relation::Before,
        Relation::Meets,
        Relation::Overlaps,
        Relation::Starts,
        Relation::ContainedBy,
        Relation::Finishes,
        Relation::Equal,
        Relation::FinishedBy,
        Relation::Contains,
        Relation::StartedBy,
        Relation::OverlappedBy,
        Relation::MetBy,
        Relation::After,
    ];

    /// The relation of `b` to `a` given the relation of `a` to `b`.
    pub fn inverse(self) -> Relation {
        match self {
            Relation::Before => Relation::After,
            Relation::Meets => Relation::MetBy,
            Relation::Overlaps => Relation::OverlappedBy,
            Relation::Starts => Relation::StartedBy,
            Relation::ContainedBy => Relation::Contains,
            Relation::Finishes => Relation::FinishedBy,
            Relation::Equal => Relation::Equal,
            Relation::FinishedBy => Relation::Finishes,
            Relation::Contains => Relation::ContainedBy,
            Relation::StartedBy => Relation::Starts,
            Relation::OverlappedBy => Relation::Overlaps,
            Relation::MetBy => Relation::Meets,
            Relation::After => Relation::Before,
        }
    }

    /// True for `Before` and `After`, the only relations with no connection
    /// between the two intervals.
    pub fn is_disjoint(self) -> bool {
        matches!(self, Relation::Before | Relation::After)
    }

    pub fn name(self) -> &'static str {
        match self {
            Relation::Before => "before",
            Relation::Meets => "meets",
            Relation::Overlaps => "overlaps",
            Relation::Starts => "starts",
            Relation::ContainedBy => "contained-by",
            Relation::Finishes => "finishes",
            Relation::Equal => "equal",
            Relation::FinishedBy => "finished-by",
            Relation::Contains => "contains",
            Relation::StartedBy => "started-by",
            Relation::OverlappedBy => "overlapped-by",
            Relation::MetBy => "met-by",
            Relation::After => "after",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Compares the starts of `a` and `b`. At equal values a closed start sorts
/// before an open one.
pub fn compare_start<T: Domain>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    a.start
        .compare(&b.start)
        .then_with(|| b.start_inclusive.cmp(&a.start_inclusive))
}

/// Compares the ends of `a` and `b`. At equal values a closed end sorts after
/// an open one.
pub fn compare_end<T: Domain>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
    a.end
        .compare(&b.end)
        .then_with(|| a.end_inclusive.cmp(&b.end_inclusive))
}

/// Compares the start of `a` with the end of `b`.
///
/// At equal values the two touch (`Equal`) when both bounds are closed, or
/// when `include_half_open` is set and at least one of them is. Otherwise the
/// value lies in neither interval and `a` starts after `b` ends.
pub fn compare_start_to_end<T: Domain>(
    a: &Interval<T>,
    b: &Interval<T>,
    include_half_open: bool,
) -> Ordering {
    match a.start.compare(&b.end) {
        Ordering::Equal if touching(a.start_inclusive, b.end_inclusive, include_half_open) => {
            Ordering::Equal
        }
        Ordering::Equal => Ordering::Greater,
        ordering => ordering,
    }
}

/// Compares the end of `a` with the start of `b`; the mirror image of
/// [`compare_start_to_end`].
pub fn compare_end_to_start<T: Domain>(
    a: &Interval<T>,
    b: &Interval<T>,
    include_half_open: bool,
) -> Ordering {
    match a.end.compare(&b.start) {
        Ordering::Equal if touching(a.end_inclusive, b.start_inclusive, include_half_open) => {
            Ordering::Equal
        }
        Ordering::Equal => Ordering::Less,
        ordering => ordering,
    }
}

fn touching(left: bool, right: bool, include_half_open: bool) -> bool {
    (left && right) || (include_half_open && (left || right))
}

/// Classifies how `a` relates to `b`.
///
/// `include_half_open` decides whether two intervals sharing a boundary value
/// that only one of them includes are reported as `Meets`/`MetBy` rather
/// than `Before`/`After`.
///
/// # Examples
///
/// ```rust
/// use intervals::{classify, Interval, Relation};
///
/// let a = Interval::closed(6, 10).unwrap();
/// let b = Interval::open(10, 14).unwrap();
/// assert_eq!(classify(&a, &b, true), Relation::Meets);
/// assert_eq!(classify(&a, &b, false), Relation::Before);
/// ```
pub fn classify<T: Domain>(a: &Interval<T>, b: &Interval<T>, include_half_open: bool) -> Relation {
    use Ordering::*;

    match (compare_start(a, b), compare_end(a, b)) {
        (Equal, Equal) => Relation::Equal,
        (Equal, Less) => Relation::Starts,
        (Greater, Less) => Relation::ContainedBy,
        (Greater, Equal) => Relation::Finishes,
        (Less, Equal) => Relation::FinishedBy,
        (Less, Greater) => Relation::Contains,
        (Equal, Greater) => Relation::StartedBy,
        (Less, Less) => match compare_end_to_start(a, b, include_half_open) {
            Less => Relation::Before,
            Equal => Relation::Meets,
            Greater => Relation::Overlaps,
        },
        (Greater, Greater) => match compare_start_to_end(a, b, include_half_open) {
            Less => Relation::OverlappedBy,
            Equal => Relation::MetBy,
            Greater => Relation::After,
        },
    }
}

impl<T: Domain> Interval<T> {
    /// The relation of `self` to `other`, counting half-open touches as
    /// `Meets`/`MetBy`.
    pub fn relation(&self, other: &Self) -> Relation {
        classify(self, other, true)
    }

    pub fn relation_with(&self, other: &Self, include_half_open: bool) -> Relation {
        classify(self, other, include_half_open)
    }

    /// Checks if two intervals share at least one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intervals::Interval;
    ///
    /// let a = Interval::closed(1, 3).unwrap();
    /// let b = Interval::closed(3, 5).unwrap();
    /// assert!(a.overlaps(&b));
    ///
    /// let c = Interval::open_closed(3, 5).unwrap();
    /// assert!(!a.overlaps(&Interval::closed_open(0, 1).unwrap()));
    /// assert!(!a.overlaps(&c));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        !classify(self, other, false).is_disjoint()
    }

    pub fn overlaps_with(&self, other: &Self, include_half_open: bool) -> bool {
        !classify(self, other, include_half_open).is_disjoint()
    }

    /// Checks if the union of two intervals has no hole, i.e. they overlap or
    /// meet at a boundary value that at least one of them includes.
    pub fn is_connected(&self, other: &Self) -> bool {
        !classify(self, other, true).is_disjoint()
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.relation(other) == Relation::Before
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.relation(other) == Relation::After
    }

    pub fn meets(&self, other: &Self) -> bool {
        self.relation(other) == Relation::Meets
    }

    pub fn met_by(&self, other: &Self) -> bool {
        self.relation(other) == Relation::MetBy
    }
}
