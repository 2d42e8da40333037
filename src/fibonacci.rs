use tracing::{debug, trace};

use crate::{
    error::{FibonacciError, Result, Violation},
    length::SequenceLength,
    term::Term,
};

/// The pair every valid collection starts with: `F(0)` and `F(1)`.
pub const CANONICAL_PREFIX: [Term; 2] = [Term::ZERO, Term::ONE];

/// Longest sequence whose terms all fit in a `u64`: `F(0)..=F(93)`.
pub const MAX_REPRESENTABLE_LENGTH: usize = 94;

/// An ordered, append-only run of Fibonacci terms.
///
/// A collection always holds at least the canonical `0, 1` prefix. It never
/// changes once built: [`append`](Self::append) and [`grow_to`](Self::grow_to)
/// return new collections and leave the receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermCollection {
    terms: Vec<Term>,
}

impl TermCollection {
    /// Wraps `terms` after checking the canonical prefix.
    ///
    /// The vector is moved in as-is; reads hand out copies.
    ///
    /// # Errors
    ///
    /// Returns [`FibonacciError::InvalidAttribute`] if `terms` does not start
    /// with `0, 1`.
    pub fn new(terms: Vec<Term>) -> Result<Self> {
        if !terms.starts_with(&CANONICAL_PREFIX) {
            return Err(FibonacciError::InvalidAttribute(
                Violation::MissingCanonicalPrefix,
            ));
        }
        Ok(Self { terms })
    }

    /// Generates the first `length` Fibonacci numbers.
    ///
    /// # Parameters
    /// - `length`: number of terms, validated through [`SequenceLength`].
    ///
    /// # Returns
    /// A collection holding exactly `length` terms.
    ///
    /// # Errors
    /// [`FibonacciError::InvalidArgument`] for lengths below 2, and
    /// [`FibonacciError::Overflow`] past [`MAX_REPRESENTABLE_LENGTH`].
    ///
    /// # Example
    /// ```
    /// use fibonacci_sequence::TermCollection;
    /// let terms = TermCollection::generate(10).unwrap();
    /// assert_eq!(terms.to_vec()[9], 34);
    /// ```
    pub fn generate(length: i64) -> Result<Self> {
        Self::generate_to(SequenceLength::new(length)?)
    }

    /// Same as [`generate`](Self::generate) for an already validated length.
    pub fn generate_to(length: SequenceLength) -> Result<Self> {
        debug!(length = length.to_integer(), "generating term collection");
        Self::default().grow_to(length.to_integer())
    }

    /// Appends the next term, `F(n) = F(n-1) + F(n-2)`.
    ///
    /// Returns a new collection one term longer; `self` is unchanged.
    ///
    /// # Errors
    /// [`FibonacciError::Overflow`] when the sum does not fit a `u64`.
    pub fn append(&self) -> Result<Self> {
        let position = self.terms.len();
        let [.., second_last, last] = self.terms.as_slice() else {
            return Err(FibonacciError::InvalidAttribute(
                Violation::MissingCanonicalPrefix,
            ));
        };
        let next = second_last
            .checked_add(*last)
            .ok_or(FibonacciError::Overflow { position })?;
        trace!(position, value = next.to_integer(), "appending term");

        let mut terms = Vec::with_capacity(position + 1);
        terms.extend_from_slice(&self.terms);
        terms.push(next);

        Self::new(terms)
    }

    /// Appends terms until the collection holds at least `target` of them.
    ///
    /// A target at or below the current length returns an equal collection.
    pub fn grow_to(&self, target: usize) -> Result<Self> {
        let mut grown = self.clone();
        while grown.len() < target {
            grown = grown.append()?;
        }
        debug!(from = self.len(), to = grown.len(), "grew term collection");
        Ok(grown)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Always `false`: the canonical prefix is never absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Copies the terms out as plain integers.
    ///
    /// Every call allocates a fresh vector, so callers cannot reach the
    /// collection's own storage.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.terms.iter().map(|term| term.to_integer())
    }

    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

impl Default for TermCollection {
    fn default() -> Self {
        Self {
            terms: CANONICAL_PREFIX.to_vec(),
        }
    }
}

impl TryFrom<Vec<Term>> for TermCollection {
    type Error = FibonacciError;

    fn try_from(terms: Vec<Term>) -> Result<Self> {
        Self::new(terms)
    }
}
