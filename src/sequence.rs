use std::fmt;

use tracing::debug;

use crate::{
    config::GeneratorConfig, error::Result, fibonacci::TermCollection, length::SequenceLength,
};

const SEPARATOR: &str = ", ";

/// A generated Fibonacci sequence.
///
/// There is no public constructor; use [`Sequence::generate`] or
/// [`Sequence::generate_with`]. Renders as its terms joined by `", "`.
///
/// # Example
/// ```
/// use fibonacci_sequence::Sequence;
/// let sequence = Sequence::generate(5).unwrap();
/// assert_eq!(sequence.to_string(), "0, 1, 1, 2, 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    terms: TermCollection,
}

impl Sequence {
    fn new(terms: TermCollection) -> Self {
        Self { terms }
    }

    /// Generates the first `length` Fibonacci numbers.
    ///
    /// # Errors
    /// Fails for lengths below 2 and for lengths past the `u64` range.
    pub fn generate(length: i64) -> Result<Self> {
        Self::generate_with(SequenceLength::new(length)?, &GeneratorConfig::default())
    }

    /// Like [`generate`](Self::generate) for a validated length, honouring the
    /// limits in `config`.
    pub fn generate_with(length: SequenceLength, config: &GeneratorConfig) -> Result<Self> {
        let length = config.check(length)?;
        debug!(%length, "generating sequence");
        TermCollection::generate_to(length).map(Self::new)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<u64> {
        self.terms.to_vec()
    }

    #[must_use]
    pub fn terms(&self) -> &TermCollection {
        &self.terms
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(SEPARATOR)?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}
