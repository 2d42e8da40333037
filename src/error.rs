use std::result;

/// Errors raised while building or growing Fibonacci values.
///
/// Every variant is produced at construction time and returned to the
/// immediate caller. Nothing inside the crate catches or retries them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibonacciError {
    /// Caller-supplied data broke a precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(Violation),
    /// A collection failed its construction invariant.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(Violation),
    /// The next term does not fit the native integer range.
    #[error("term at position {position} exceeds the u64 range")]
    Overflow { position: usize },
}

impl FibonacciError {
    /// The rule that was broken, if this is a validation error.
    pub fn violation(&self) -> Option<&Violation> {
        match self {
            Self::InvalidArgument(v) | Self::InvalidAttribute(v) => Some(v),
            Self::Overflow { .. } => None,
        }
    }
}

/// Which rule an input broke. The `Display` text is stable and safe to match on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be an integer")]
    NotAnInteger { field: &'static str },
    #[error("{field} is out of range: {input}")]
    OutOfRange { field: &'static str, input: String },
    #[error("{field} must be ≥ {minimum}")]
    BelowMinimum {
        field: &'static str,
        minimum: i64,
        actual: i64,
    },
    #[error("{field} must be ≤ {maximum}")]
    AboveMaximum {
        field: &'static str,
        maximum: usize,
        actual: usize,
    },
    #[error("collection must contain the canonical first two elements")]
    MissingCanonicalPrefix,
}

pub type Result<T, E = FibonacciError> = result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        let err = FibonacciError::InvalidArgument(Violation::BelowMinimum {
            field: "value",
            minimum: 0,
            actual: -1,
        });
        assert_eq!(err.to_string(), "invalid argument: value must be ≥ 0");
        assert_eq!(
            err.violation().map(ToString::to_string).as_deref(),
            Some("value must be ≥ 0")
        );

        let err = FibonacciError::InvalidArgument(Violation::OutOfRange {
            field: "length",
            input: "99999999999999999999".to_owned(),
        });
        assert_eq!(
            err.to_string(),
            "invalid argument: length is out of range: 99999999999999999999"
        );

        let err = FibonacciError::InvalidAttribute(Violation::MissingCanonicalPrefix);
        assert_eq!(
            err.to_string(),
            "invalid attribute: collection must contain the canonical first two elements"
        );
    }

    #[test]
    fn overflow_has_no_violation() {
        let err = FibonacciError::Overflow { position: 94 };
        assert!(err.violation().is_none());
        assert_eq!(err.to_string(), "term at position 94 exceeds the u64 range");
    }
}
