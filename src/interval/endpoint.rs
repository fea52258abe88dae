use super::domain::{Domain, Step};
use std::cmp::Ordering;
use std::fmt;

/// One edge of an interval: a finite value or one of the two infinities.
///
/// Endpoints are totally ordered with `NegInfinity < Finite(x) < PosInfinity`
/// for every finite `x`; two finite endpoints compare by their values.
///
/// # Examples
///
/// ```rust
/// use intervals::Endpoint;
///
/// assert!(Endpoint::NegInfinity < Endpoint::Finite(i32::MIN));
/// assert!(Endpoint::Finite(3) < Endpoint::Finite(4));
/// assert!(Endpoint::Finite(i32::MAX) < Endpoint::PosInfinity);
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Endpoint<T> {
    NegInfinity,
    Finite(T),
    PosInfinity,
}

impl<T> Endpoint<T> {
    pub fn is_finite(&self) -> bool {
        matches!(self, Endpoint::Finite(_))
    }

    pub fn is_infinite(&self) -> bool {
        !self.is_finite()
    }

    /// Returns the finite value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Endpoint::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// Applies `f` to a finite value, which may fail; infinities pass
    /// through unchanged.
    pub fn try_map<F: FnOnce(&T) -> Option<T>>(&self, f: F) -> Option<Self> {
        match self {
            Endpoint::NegInfinity => Some(Endpoint::NegInfinity),
            Endpoint::Finite(value) => f(value).map(Endpoint::Finite),
            Endpoint::PosInfinity => Some(Endpoint::PosInfinity),
        }
    }
}

impl<T: Domain> Endpoint<T> {
    /// Three-way comparison of two endpoints. The domain comparison is only
    /// consulted when both sides are finite.
    pub fn compare(&self, other: &Self) -> Ordering {
        use Endpoint::*;

        match (self, other) {
            (Finite(a), Finite(b)) => a.compare(b),
            (NegInfinity, NegInfinity) | (PosInfinity, PosInfinity) => Ordering::Equal,
            (NegInfinity, _) | (_, PosInfinity) => Ordering::Less,
            (PosInfinity, _) | (_, NegInfinity) => Ordering::Greater,
        }
    }
}

impl<T: Step> Endpoint<T> {
    /// Moves a finite value forward by `delta`, or `None` when the result
    /// is out of the domain.
    pub fn add(&self, delta: &T::Delta) -> Option<Self> {
        self.try_map(|value| value.checked_forward(delta))
    }

    pub fn subtract(&self, delta: &T::Delta) -> Option<Self> {
        self.try_map(|value| value.checked_backward(delta))
    }
}

impl<T> From<T> for Endpoint<T> {
    fn from(value: T) -> Self {
        Endpoint::Finite(value)
    }
}

impl<T: Domain> PartialEq for Endpoint<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<T: Domain> Eq for Endpoint<T> {}

impl<T: Domain> PartialOrd for Endpoint<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Domain> Ord for Endpoint<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<T: fmt::Display> fmt::Display for Endpoint<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::NegInfinity => write!(f, "-∞"),
            Endpoint::Finite(value) => value.fmt(f),
            Endpoint::PosInfinity => write!(f, "∞"),
        }
    }
}
