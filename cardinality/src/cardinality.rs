use tracing::trace;

use crate::bound;
use crate::error;
use crate::sequence::{classify, Sequence, Shape};

/// Count the number of items in a sequence.
///
/// Like `len()`, but works for any sequence. A sized sequence reports its
/// length directly; an iterator is drained.
///
/// ```
/// use cardinality::{count, Iterable};
///
/// assert_eq!(count(&[1, 2, 3]).unwrap(), 3);
/// assert_eq!(count(Iterable(std::iter::empty::<u8>())).unwrap(), 0);
/// ```
pub fn count<S: Sequence>(sequence: S) -> error::Result<usize> {
    Ok(match classify(sequence)? {
        Shape::Sized(len) => len,
        Shape::Iterable(iter) => iter.count(),
    })
}

/// Determine whether a sequence contains at least `size` items.
///
/// At most `size` items are drawn from an iterator.
///
/// ```
/// use cardinality::at_least;
///
/// assert!(at_least(2, &[1, 2]).unwrap());
/// assert!(!at_least(3, &[1, 2]).unwrap());
/// ```
pub fn at_least<S: Sequence>(size: i64, sequence: S) -> error::Result<bool> {
    let size = bound::non_negative("size", size)?;
    Ok(match classify(sequence)? {
        Shape::Sized(len) => bound::sized_at_least(len, size),
        // anything iterable has at least zero items
        Shape::Iterable(_) if size == 0 => true,
        Shape::Iterable(mut iter) => bound::reaches(&mut iter, size),
    })
}

/// Determine whether a sequence contains no more than `size` items.
///
/// At most `size + 1` items are drawn from an iterator.
///
/// ```
/// use cardinality::{at_most, Iterable};
///
/// assert!(!at_most(1, Iterable(["hello", "world"])).unwrap());
/// ```
pub fn at_most<S: Sequence>(size: i64, sequence: S) -> error::Result<bool> {
    let size = bound::non_negative("size", size)?;
    Ok(match classify(sequence)? {
        Shape::Sized(len) => bound::sized_at_most(len, size),
        Shape::Iterable(mut iter) => !bound::exceeds(&mut iter, size),
    })
}

/// Determine whether a sequence contains between `min` and `max` items,
/// inclusive.
///
/// The lower bound is checked first and the upper bound is then checked
/// against what remains of the same iterator. At most `max + 1` items are
/// drawn.
///
/// ```
/// use cardinality::between;
///
/// assert!(between(4, 6, 0..5).unwrap());
/// assert!(!between(4, 6, 0..20).unwrap());
/// assert!(between(12, 3, 0..5).is_err());
/// ```
pub fn between<S: Sequence>(min: i64, max: i64, sequence: S) -> error::Result<bool> {
    let (min, max) = bound::inclusive(min, max)?;
    Ok(match classify(sequence)? {
        Shape::Sized(len) => bound::sized_at_least(len, min) && bound::sized_at_most(len, max),
        Shape::Iterable(mut iter) => {
            if min > 0 && !bound::reaches(&mut iter, min) {
                trace!(min, "sequence ended below lower bound");
                return Ok(false);
            }
            !bound::exceeds(&mut iter, max - min)
        }
    })
}
