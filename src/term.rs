use std::{fmt, num::IntErrorKind, str::FromStr};

use crate::error::{FibonacciError, Result, Violation};

const FIELD: &str = "value";

/// A single Fibonacci number.
///
/// Holds one non-negative integer and never changes after construction.
/// Two terms are equal when their values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term(u64);

impl Term {
    /// `F(0)`.
    pub const ZERO: Self = Self(0);
    /// `F(1)`.
    pub const ONE: Self = Self(1);

    /// Creates a term from a signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`FibonacciError::InvalidArgument`] if `value` is negative.
    ///
    /// # Example
    /// ```
    /// use fibonacci_sequence::Term;
    /// assert_eq!(Term::new(8).unwrap().to_integer(), 8);
    /// assert!(Term::new(-1).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self> {
        u64::try_from(value).map(Self).map_err(|_| {
            FibonacciError::InvalidArgument(Violation::BelowMinimum {
                field: FIELD,
                minimum: 0,
                actual: value,
            })
        })
    }

    #[must_use]
    pub const fn to_integer(self) -> u64 {
        self.0
    }

    /// Sum of two terms, or `None` once the result leaves the `u64` range.
    pub(crate) fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl From<u64> for Term {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Term {
    type Error = FibonacciError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<Option<i64>> for Term {
    type Error = FibonacciError;

    fn try_from(value: Option<i64>) -> Result<Self> {
        value
            .ok_or(FibonacciError::InvalidArgument(Violation::Required { field: FIELD }))
            .and_then(Self::new)
    }
}

impl FromStr for Term {
    type Err = FibonacciError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(parse_integer(s, FIELD)?)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses untyped text into an optional integer.
///
/// Blank input is treated as absent. Integers outside the `i64` range and text
/// that is not an integer at all are rejected on behalf of `field`.
pub(crate) fn parse_integer(s: &str, field: &'static str) -> Result<Option<i64>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i64>().map(Some).map_err(|e| {
        let violation = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Violation::OutOfRange {
                field,
                input: trimmed.to_owned(),
            },
            _ => Violation::NotAnInteger { field },
        };
        FibonacciError::InvalidArgument(violation)
    })
}
