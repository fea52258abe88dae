//! Textual interval literals such as `[1, 5)`, `(, 3]` or `(-∞, infinity)`.

use super::{Domain, Endpoint, Interval, IntervalError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([\[(])\s*([^,]*?)\s*,\s*([^,]*?)\s*([\])])\s*$")
        .expect("interval literal pattern compiles")
});

#[derive(Clone, Copy)]
enum Side {
    Start,
    End,
}

enum Unbounded {
    Negative,
    Positive,
    Unsigned,
}

fn unbounded(token: &str) -> Option<Unbounded> {
    match token.to_lowercase().as_str() {
        "" | "null" | "∞" | "inf" | "infinity" => Some(Unbounded::Unsigned),
        "-∞" | "-inf" | "-infinity" => Some(Unbounded::Negative),
        "+∞" | "+inf" | "+infinity" => Some(Unbounded::Positive),
        _ => None,
    }
}

fn parse_endpoint<T>(token: &str, side: Side) -> Result<Endpoint<T>, IntervalError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match (unbounded(token), side) {
        (Some(Unbounded::Positive), Side::Start) => {
            Err(IntervalError::MisplacedInfinity("+∞", "start"))
        }
        (Some(Unbounded::Negative), Side::End) => {
            Err(IntervalError::MisplacedInfinity("-∞", "end"))
        }
        (Some(_), Side::Start) => Ok(Endpoint::NegInfinity),
        (Some(_), Side::End) => Ok(Endpoint::PosInfinity),
        (None, _) => token
            .parse()
            .map(Endpoint::Finite)
            .map_err(|e| IntervalError::InvalidEndpoint(format!("{token:?}: {e}"))),
    }
}

/// Parses an interval literal: an opening `[` or `(`, a start, a comma, an
/// end, and a closing `]` or `)`. An empty, `null` or infinity token leaves
/// that side unbounded.
///
/// # Examples
///
/// ```rust
/// use intervals::Interval;
///
/// let a: Interval<i32> = "[1, 5)".parse().unwrap();
/// assert_eq!(a, Interval::closed_open(1, 5).unwrap());
///
/// let b: Interval<i32> = "(, 3]".parse().unwrap();
/// assert_eq!(b, Interval::at_most(3));
/// ```
impl<T> FromStr for Interval<T>
where
    T: Domain + FromStr,
    T::Err: fmt::Display,
{
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = LITERAL
            .captures(s)
            .ok_or_else(|| IntervalError::Malformed(s.to_string()))?;

        let start = parse_endpoint(&captures[2], Side::Start)?;
        let end = parse_endpoint(&captures[3], Side::End)?;
        Interval::new(start, end, &captures[1] == "[", &captures[4] == "]")
    }
}
