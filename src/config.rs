use crate::{
    error::{FibonacciError, Result, Violation},
    length::SequenceLength,
};

/// Limits applied before a sequence is generated.
///
/// The default is unbounded: only the `u64` range stops generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    max_length: Option<usize>,
}

impl GeneratorConfig {
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub const fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Passes `length` through if it is within the configured maximum.
    ///
    /// # Errors
    ///
    /// Returns [`FibonacciError::InvalidArgument`] if `length` exceeds it.
    pub fn check(&self, length: SequenceLength) -> Result<SequenceLength> {
        match self.max_length {
            Some(maximum) if length.to_integer() > maximum => {
                Err(FibonacciError::InvalidArgument(Violation::AboveMaximum {
                    field: "length",
                    maximum,
                    actual: length.to_integer(),
                }))
            }
            _ => Ok(length),
        }
    }
}
