//! Determine and check the number of items in a sequence.
//!
//! [`count`] is like `len()`, but works for any sequence. [`at_least`],
//! [`at_most`] and [`between`] answer a question about the number of items
//! while drawing as few of them as possible from an iterator.
//!
//! A sequence is anything that implements [`Sequence`]. Collections report
//! their length and are never iterated. Iterators are passed as `&mut`, so
//! whatever an operation did not need to draw is left for the caller:
//!
//! ```
//! use cardinality::at_least;
//!
//! let mut words = "the quick brown fox".split(' ');
//! assert!(at_least(2, &mut words).unwrap());
//! assert_eq!(words.next(), Some("brown"));
//! ```
//!
//! For producers that can fail while producing items, see [`fallible`].

mod bound;
mod cardinality;
pub mod error;
pub mod fallible;
mod sequence;

pub use crate::cardinality::{at_least, at_most, between, count};
pub use error::{ArgumentError, Error, Result};
pub use sequence::{ExactSize, Iterable, Sequence, Shape};
