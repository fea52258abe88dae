use thiserror::Error;

/// A list specifying general categories of Interval errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    /// End lies before start
    #[error("interval end lies before its start")]
    EndBeforeStart,

    /// A `+∞` start or a `-∞` end
    #[error("{0} cannot be used as the {1} endpoint")]
    MisplacedInfinity(&'static str, &'static str),

    /// Text that is not an interval literal
    #[error("malformed interval: {0:?}")]
    Malformed(String),

    /// An endpoint the domain type cannot parse
    #[error("invalid endpoint {0}")]
    InvalidEndpoint(String),

    /// A shape name other than closed, open, closed-open or open-closed
    #[error("unknown interval shape {0:?}")]
    UnknownShape(String),
}
