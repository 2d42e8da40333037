//! # Fibonacci Sequence Library
//!
//! This library generates Fibonacci sequences out of small immutable value objects. Each number is
//! a validated [`Term`], the running sequence is a [`TermCollection`] that can only grow by
//! producing new collections, and [`Sequence`] is the facade callers generate and print.
//!
//! ## Key Features
//! - **Complete constructors**: every value is validated when it is built; no half-valid value
//!   ever escapes a constructor.
//! - **Immutability**: appending a term returns a new collection, the old one is left as it was.
//! - **Copy-on-read**: `to_vec` always hands out a fresh vector.
//! - **Native integers**: terms are `u64`; generation past `F(93)` reports an overflow instead of
//!   wrapping.
//!
//! ## Overview of Types
//!
//! ### Errors
//! - `FibonacciError`: `InvalidArgument` for bad caller input, `InvalidAttribute` for a collection
//!   that breaks its prefix invariant, and `Overflow` when the next term leaves the `u64` range.
//!   Validation errors carry a `Violation` whose message is stable.
//!
//! ### Values
//!
//! #### `Term`
//! One non-negative Fibonacci number. Equal when the wrapped integers are equal.
//!
//! #### `SequenceLength`
//! A requested length of at least two. Both generation entry points validate through it.
//!
//! #### `TermCollection`
//! The ordered terms, always starting with `0, 1`. `append` performs one step of the recurrence
//! `F(n) = F(n-1) + F(n-2)`, and `grow_to` repeats it until a target length is reached.
//!
//! #### `Sequence`
//! Wraps a `TermCollection`, can only be built through `generate`, and renders its terms joined
//! by `", "`.
//!
//! #### `GeneratorConfig`
//! Optional upper bound on requested lengths.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_sequence::Sequence;
//! let sequence = Sequence::generate(10).unwrap();
//! assert_eq!(sequence.len(), 10);
//! assert_eq!(sequence.to_string(), "0, 1, 1, 2, 3, 5, 8, 13, 21, 34");
//! ```

pub mod config;
pub mod error;
pub mod fibonacci;
pub mod length;
pub mod sequence;
pub mod term;

pub use config::GeneratorConfig;
pub use error::{FibonacciError, Result, Violation};
pub use fibonacci::{TermCollection, CANONICAL_PREFIX, MAX_REPRESENTABLE_LENGTH};
pub use length::SequenceLength;
pub use sequence::Sequence;
pub use term::Term;
