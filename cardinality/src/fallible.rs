//! Cardinality of sequences whose items can fail to be produced.
//!
//! A producer that can fail mid-stream yields `Result<T, E>` items. The
//! functions here behave like their infallible counterparts, except that
//! the first `Err` drawn from the sequence is returned as is and nothing
//! after it is drawn. The caller's error type must be able to hold a
//! cardinality [`Error`] so that both kinds come back through one `Result`.
//!
//! ```
//! use cardinality::{fallible, Iterable};
//!
//! #[derive(Debug, PartialEq)]
//! enum MyError {
//!     Cardinality(cardinality::Error),
//!     Broken,
//! }
//!
//! impl From<cardinality::Error> for MyError {
//!     fn from(e: cardinality::Error) -> Self {
//!         MyError::Cardinality(e)
//!     }
//! }
//!
//! let items = [Ok(1), Err(MyError::Broken), Ok(3)];
//! assert_eq!(fallible::try_count(Iterable(items)), Err(MyError::Broken));
//! ```

use tracing::trace;

use crate::bound;
use crate::error::Error;
use crate::sequence::{classify, Sequence, Shape};

/// Count the items in a sequence, stopping at the first error.
pub fn try_count<S, T, E>(sequence: S) -> Result<usize, E>
where
    S: Sequence<Item = Result<T, E>>,
    E: From<Error>,
{
    match classify(sequence)? {
        Shape::Sized(len) => Ok(len),
        Shape::Iterable(iter) => {
            let mut count = 0;
            for item in iter {
                item?;
                count += 1;
            }
            Ok(count)
        }
    }
}

/// Determine whether a sequence contains at least `size` items.
pub fn try_at_least<S, T, E>(size: i64, sequence: S) -> Result<bool, E>
where
    S: Sequence<Item = Result<T, E>>,
    E: From<Error>,
{
    let size = bound::non_negative("size", size)?;
    match classify(sequence)? {
        Shape::Sized(len) => Ok(bound::sized_at_least(len, size)),
        Shape::Iterable(_) if size == 0 => Ok(true),
        Shape::Iterable(mut iter) => bound::try_reaches(&mut iter, size),
    }
}

/// Determine whether a sequence contains no more than `size` items.
pub fn try_at_most<S, T, E>(size: i64, sequence: S) -> Result<bool, E>
where
    S: Sequence<Item = Result<T, E>>,
    E: From<Error>,
{
    let size = bound::non_negative("size", size)?;
    match classify(sequence)? {
        Shape::Sized(len) => Ok(bound::sized_at_most(len, size)),
        Shape::Iterable(mut iter) => Ok(!bound::try_exceeds(&mut iter, size)?),
    }
}

/// Determine whether a sequence contains between `min` and `max` items,
/// inclusive.
pub fn try_between<S, T, E>(min: i64, max: i64, sequence: S) -> Result<bool, E>
where
    S: Sequence<Item = Result<T, E>>,
    E: From<Error>,
{
    let (min, max) = bound::inclusive(min, max)?;
    match classify(sequence)? {
        Shape::Sized(len) => {
            Ok(bound::sized_at_least(len, min) && bound::sized_at_most(len, max))
        }
        Shape::Iterable(mut iter) => {
            if min > 0 && !bound::try_reaches(&mut iter, min)? {
                trace!(min, "sequence ended below lower bound");
                return Ok(false);
            }
            Ok(!bound::try_exceeds(&mut iter, max - min)?)
        }
    }
}
