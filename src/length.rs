use std::{fmt, str::FromStr};

use crate::{
    error::{FibonacciError, Result, Violation},
    term::parse_integer,
};

const FIELD: &str = "length";

/// A requested sequence length, always at least two.
///
/// Both generation entry points validate through this type so the range rule
/// lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SequenceLength(usize);

impl SequenceLength {
    /// Shortest valid sequence: the canonical `0, 1`.
    pub const MIN: Self = Self(2);

    /// # Errors
    ///
    /// Returns [`FibonacciError::InvalidArgument`] if `value` is below 2.
    pub fn new(value: i64) -> Result<Self> {
        if value < Self::MIN.0 as i64 {
            return Err(FibonacciError::InvalidArgument(Violation::BelowMinimum {
                field: FIELD,
                minimum: Self::MIN.0 as i64,
                actual: value,
            }));
        }
        // Fails only where usize is narrower than i64.
        usize::try_from(value).map(Self).map_err(|_| {
            FibonacciError::InvalidArgument(Violation::OutOfRange {
                field: FIELD,
                input: value.to_string(),
            })
        })
    }

    #[must_use]
    pub const fn to_integer(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for SequenceLength {
    type Error = FibonacciError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<usize> for SequenceLength {
    type Error = FibonacciError;

    fn try_from(value: usize) -> Result<Self> {
        if value < Self::MIN.0 {
            return Err(FibonacciError::InvalidArgument(Violation::BelowMinimum {
                field: FIELD,
                minimum: Self::MIN.0 as i64,
                actual: value as i64,
            }));
        }
        Ok(Self(value))
    }
}

impl TryFrom<Option<i64>> for SequenceLength {
    type Error = FibonacciError;

    fn try_from(value: Option<i64>) -> Result<Self> {
        value
            .ok_or(FibonacciError::InvalidArgument(Violation::Required { field: FIELD }))
            .and_then(Self::new)
    }
}

impl FromStr for SequenceLength {
    type Err = FibonacciError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(parse_integer(s, FIELD)?)
    }
}

impl fmt::Display for SequenceLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: FibonacciError) -> String {
        assert!(matches!(err, FibonacciError::InvalidArgument(_)));
        err.violation().expect("validation error").to_string()
    }

    #[test]
    fn accepts_two_and_above() {
        for v in [2, 3, 4, 94] {
            assert_eq!(SequenceLength::new(v).unwrap().to_integer(), v as usize);
        }
        assert_eq!(SequenceLength::try_from(2usize).unwrap(), SequenceLength::MIN);
    }

    #[test]
    fn rejects_below_two() {
        assert_eq!(message(SequenceLength::new(1).unwrap_err()), "length must be ≥ 2");
        assert_eq!(message(SequenceLength::new(-10).unwrap_err()), "length must be ≥ 2");
        assert_eq!(
            message(SequenceLength::try_from(0usize).unwrap_err()),
            "length must be ≥ 2"
        );
    }

    #[test]
    fn rejects_absent_length() {
        assert_eq!(
            message(SequenceLength::try_from(None::<i64>).unwrap_err()),
            "length is required"
        );
        assert_eq!(message("".parse::<SequenceLength>().unwrap_err()), "length is required");
    }

    #[test]
    fn parses_text() {
        assert_eq!("10".parse::<SequenceLength>().unwrap().to_integer(), 10);
        assert_eq!(
            message("1".parse::<SequenceLength>().unwrap_err()),
            "length must be ≥ 2"
        );
        assert_eq!(
            message("ten".parse::<SequenceLength>().unwrap_err()),
            "length must be an integer"
        );
        assert_eq!(
            message("99999999999999999999".parse::<SequenceLength>().unwrap_err()),
            "length is out of range: 99999999999999999999"
        );
    }
}
