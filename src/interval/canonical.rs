use super::{Domain, Endpoint, Interval, IntervalError, Step};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The four boundary shapes of an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `[a, b]`
    Closed,
    /// `[a, b)`
    ClosedOpen,
    /// `(a, b]`
    OpenClosed,
    /// `(a, b)`
    Open,
}

impl Shape {
    pub fn from_inclusivity(start_inclusive: bool, end_inclusive: bool) -> Self {
        match (start_inclusive, end_inclusive) {
            (true, true) => Shape::Closed,
            (true, false) => Shape::ClosedOpen,
            (false, true) => Shape::OpenClosed,
            (false, false) => Shape::Open,
        }
    }

    pub fn start_inclusive(self) -> bool {
        matches!(self, Shape::Closed | Shape::ClosedOpen)
    }

    pub fn end_inclusive(self) -> bool {
        matches!(self, Shape::Closed | Shape::OpenClosed)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Closed => "closed",
            Shape::ClosedOpen => "closed-open",
            Shape::OpenClosed => "open-closed",
            Shape::Open => "open",
        })
    }
}

impl FromStr for Shape {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "closed" | "[]" => Ok(Shape::Closed),
            "closed-open" | "[)" => Ok(Shape::ClosedOpen),
            "open-closed" | "(]" => Ok(Shape::OpenClosed),
            "open" | "()" => Ok(Shape::Open),
            _ => Err(IntervalError::UnknownShape(s.to_string())),
        }
    }
}

impl<T: Domain> Interval<T> {
    /// Re-expresses the interval in `shape` by moving each finite boundary
    /// whose inclusivity has to change one step inwards or outwards: `add`
    /// yields the successor of a value, `subtract` its predecessor.
    ///
    /// Empty intervals and intervals already of the requested shape are
    /// returned unchanged. Infinite sides are never shifted and stay open.
    /// A boundary whose step falls outside the domain (`add` or `subtract`
    /// returning `None`) keeps both its value and its inclusivity. When
    /// narrowing leaves no points, the result is the empty interval
    /// `[start, start)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use intervals::{Interval, Shape};
    ///
    /// let a: Interval<i32> = Interval::open(2, 4).unwrap();
    /// let closed = a.canonicalize_by(Shape::Closed, |v| v.checked_add(1), |v| v.checked_sub(1));
    /// assert_eq!(closed, Interval::closed(3, 3).unwrap());
    /// ```
    pub fn canonicalize_by<A, S>(&self, shape: Shape, add: A, subtract: S) -> Self
    where
        A: Fn(&T) -> Option<T>,
        S: Fn(&T) -> Option<T>,
    {
        if self.is_empty() || self.shape() == shape {
            return self.clone();
        }

        let (start, start_inclusive) = match (self.start_inclusive, shape.start_inclusive()) {
            (false, true) => shift(&self.start, false, &add),
            (true, false) => shift(&self.start, true, &subtract),
            _ => (self.start.clone(), self.start_inclusive),
        };
        let (end, end_inclusive) = match (self.end_inclusive, shape.end_inclusive()) {
            (false, true) => shift(&self.end, false, &subtract),
            (true, false) => shift(&self.end, true, &add),
            _ => (self.end.clone(), self.end_inclusive),
        };

        if end.compare(&start) == Ordering::Less {
            return Self::from_parts(self.start.clone(), self.start.clone(), true, false);
        }
        Self::from_parts(start, end, start_inclusive, end_inclusive)
    }
}

// Moves a boundary across one step and flips its inclusivity. A boundary that
// cannot move stays as it is.
fn shift<T, F>(endpoint: &Endpoint<T>, inclusive: bool, step: F) -> (Endpoint<T>, bool)
where
    T: Clone,
    F: Fn(&T) -> Option<T>,
{
    match endpoint.try_map(step) {
        Some(moved) => (moved, !inclusive),
        None => (endpoint.clone(), inclusive),
    }
}

impl<T: Step> Interval<T> {
    /// Canonicalizes with the domain's own step arithmetic and the given
    /// step size.
    pub fn canonicalize(&self, shape: Shape, delta: &T::Delta) -> Self {
        self.canonicalize_by(
            shape,
            |v| v.checked_forward(delta),
            |v| v.checked_backward(delta),
        )
    }

    pub fn canonicalize_unit(&self, shape: Shape) -> Self {
        self.canonicalize(shape, &T::unit())
    }

    /// The equivalent closed interval.
    pub fn closure(&self, delta: &T::Delta) -> Self {
        self.canonicalize(Shape::Closed, delta)
    }

    /// The equivalent open interval.
    pub fn interior(&self, delta: &T::Delta) -> Self {
        self.canonicalize(Shape::Open, delta)
    }

    pub fn closure_unit(&self) -> Self {
        self.closure(&T::unit())
    }

    pub fn interior_unit(&self) -> Self {
        self.interior(&T::unit())
    }
}
