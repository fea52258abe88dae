//! Binary set combinators over intervals.
//!
//! Each combinator that is only defined for some input pairs returns `None`
//! outside its domain; the `*_or_empty` variants substitute an empty interval.

use super::{compare_start, Domain, Endpoint, Interval, Relation};
use std::cmp::Ordering;

// Picks the endpoint that compares as `keep` against the other one. At a tie
// the inclusivity flags are combined with `merge`.
fn select<T: Domain>(
    a: (&Endpoint<T>, bool),
    b: (&Endpoint<T>, bool),
    keep: Ordering,
    merge: fn(bool, bool) -> bool,
) -> (Endpoint<T>, bool) {
    match a.0.compare(b.0) {
        Ordering::Equal => (a.0.clone(), merge(a.1, b.1)),
        ordering if ordering == keep => (a.0.clone(), a.1),
        _ => (b.0.clone(), b.1),
    }
}

fn either(a: bool, b: bool) -> bool {
    a || b
}

fn both(a: bool, b: bool) -> bool {
    a && b
}

impl<T: Domain> Interval<T> {
    /// The smallest interval containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intervals::Interval;
    ///
    /// let a = Interval::closed(2, 4).unwrap();
    /// let b = Interval::open(6, 10).unwrap();
    /// assert_eq!(a.hull(&b), Interval::closed_open(2, 10).unwrap());
    /// ```
    pub fn hull(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        let (start, start_inclusive) = select(
            (&self.start, self.start_inclusive),
            (&other.start, other.start_inclusive),
            Ordering::Less,
            either,
        );
        let (end, end_inclusive) = select(
            (&self.end, self.end_inclusive),
            (&other.end, other.end_inclusive),
            Ordering::Greater,
            either,
        );
        Self::from_parts(start, end, start_inclusive, end_inclusive)
    }

    /// Merges two connected intervals. Disjoint intervals have no
    /// single-interval union.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intervals::Interval;
    ///
    /// let a = Interval::closed_open(1, 3).unwrap();
    /// let b = Interval::closed(3, 5).unwrap();
    /// assert_eq!(a.union(&b), Some(Interval::closed(1, 5).unwrap()));
    ///
    /// let c = Interval::open(5, 7).unwrap();
    /// assert_eq!(a.union(&c), None);
    /// ```
    pub fn union(&self, other: &Self) -> Option<Self> {
        if self.is_connected(other) {
            Some(self.hull(other))
        } else {
            None
        }
    }

    /// The points shared by both intervals.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        let (start, start_inclusive) = select(
            (&self.start, self.start_inclusive),
            (&other.start, other.start_inclusive),
            Ordering::Greater,
            both,
        );
        let (end, end_inclusive) = select(
            (&self.end, self.end_inclusive),
            (&other.end, other.end_inclusive),
            Ordering::Less,
            both,
        );
        Some(Self::from_parts(start, end, start_inclusive, end_inclusive))
    }

    /// The span from the earlier of the two starts up to the later one, for
    /// connected intervals: the part of the earlier-starting interval that
    /// lies before the other begins. This is the step used when stripping
    /// overlaps from a sequence sorted by start.
    ///
    /// Two intervals that both start at negative infinity have no such span.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intervals::Interval;
    ///
    /// let a = Interval::open_closed(1, 4).unwrap();
    /// let b = Interval::open_closed(2, 4).unwrap();
    /// assert_eq!(a.except(&b), Some(Interval::open_closed(1, 2).unwrap()));
    /// ```
    pub fn except(&self, other: &Self) -> Option<Self> {
        if !self.is_connected(other) {
            return None;
        }
        let later = match compare_start(self, other) {
            Ordering::Greater => self,
            _ => other,
        };
        if let Endpoint::NegInfinity = later.start {
            return None;
        }
        let (start, start_inclusive) = select(
            (&self.start, self.start_inclusive),
            (&other.start, other.start_inclusive),
            Ordering::Less,
            either,
        );
        Some(Self::from_parts(
            start,
            later.start.clone(),
            start_inclusive,
            !later.start_inclusive,
        ))
    }

    /// The interval strictly between two disjoint intervals. Every bound of
    /// the gap takes the opposite inclusivity of the bound it borders.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intervals::Interval;
    ///
    /// let a = Interval::closed(1, 3).unwrap();
    /// let b = Interval::closed(6, 9).unwrap();
    /// assert_eq!(a.gap(&b), Some(Interval::open(3, 6).unwrap()));
    /// assert_eq!(b.gap(&a), Some(Interval::open(3, 6).unwrap()));
    /// ```
    pub fn gap(&self, other: &Self) -> Option<Self> {
        let (left, right) = match self.relation(other) {
            Relation::Before => (self, other),
            Relation::After => (other, self),
            _ => return None,
        };
        Some(Self::from_parts(
            left.end.clone(),
            right.start.clone(),
            !left.end_inclusive,
            !right.start_inclusive,
        ))
    }
}

impl<T: Domain + Default> Interval<T> {
    pub fn union_or_empty(&self, other: &Self) -> Self {
        self.union(other).unwrap_or_else(Self::empty)
    }

    pub fn intersect_or_empty(&self, other: &Self) -> Self {
        self.intersect(other).unwrap_or_else(Self::empty)
    }

    pub fn except_or_empty(&self, other: &Self) -> Self {
        self.except(other).unwrap_or_else(Self::empty)
    }

    pub fn gap_or_empty(&self, other: &Self) -> Self {
        self.gap(other).unwrap_or_else(Self::empty)
    }
}
