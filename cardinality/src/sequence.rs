use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ops::{Range, RangeInclusive};

use tracing::trace;

use crate::error;

/// What a sequence handle is able to do.
///
/// A handle is classified once, at the start of an operation, and the
/// operation picks its algorithm from the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<I> {
    /// The number of items is known without drawing any of them.
    Sized(usize),
    /// Items can only be drawn one at a time, destructively.
    Iterable(I),
}

/// A sequence handle: anything the cardinality functions accept.
///
/// Collections with a length are `Sized`. A mutable reference to an
/// iterator is single-pass, and whatever is left in it after a call stays
/// with the caller. Scalars fail with [`Error::NotIterable`].
///
/// [`Error::NotIterable`]: crate::Error::NotIterable
pub trait Sequence {
    type Item;
    type Iter: Iterator<Item = Self::Item>;

    /// Classify the handle.
    ///
    /// This never draws an item.
    fn shape(self) -> error::Result<Shape<Self::Iter>>;
}

/// Classify a handle, recording which path an operation takes.
pub(crate) fn classify<S: Sequence>(sequence: S) -> error::Result<Shape<S::Iter>> {
    let shape = sequence.shape()?;
    match &shape {
        Shape::Sized(len) => trace!(len, "using reported length"),
        Shape::Iterable(_) => trace!("drawing items from iterator"),
    }
    Ok(shape)
}

/// Treat any iterable as single-pass, even if its length could be known.
#[derive(Debug, Clone)]
pub struct Iterable<I>(pub I);

impl<I: IntoIterator> Sequence for Iterable<I> {
    type Item = I::Item;
    type Iter = I::IntoIter;

    fn shape(self) -> error::Result<Shape<Self::Iter>> {
        Ok(Shape::Iterable(self.0.into_iter()))
    }
}

/// Report the length of an exact size iterator without drawing from it.
#[derive(Debug, Clone)]
pub struct ExactSize<I>(pub I);

impl<I: ExactSizeIterator> Sequence for ExactSize<I> {
    type Item = I::Item;
    type Iter = I;

    fn shape(self) -> error::Result<Shape<Self::Iter>> {
        Ok(Shape::Sized(self.0.len()))
    }
}

impl<'a, I: Iterator> Sequence for &'a mut I {
    type Item = I::Item;
    type Iter = &'a mut I;

    fn shape(self) -> error::Result<Shape<Self::Iter>> {
        Ok(Shape::Iterable(self))
    }
}

// collections that carry their own length
macro_rules! sized {
    ($(impl[$($g:tt)*] $t:ty => $iter:ty;)*) => {
        $(
            impl<$($g)*> Sequence for $t {
                type Item = <$iter as Iterator>::Item;
                type Iter = $iter;

                #[inline]
                fn shape(self) -> error::Result<Shape<Self::Iter>> {
                    Ok(Shape::Sized(self.len()))
                }
            }
        )*
    };
}

sized! {
    impl['a, T] &'a [T] => std::slice::Iter<'a, T>;
    impl['a, T, const N: usize] &'a [T; N] => std::slice::Iter<'a, T>;
    impl[T, const N: usize] [T; N] => std::array::IntoIter<T, N>;
    impl['a, T] &'a Vec<T> => std::slice::Iter<'a, T>;
    impl[T] Vec<T> => std::vec::IntoIter<T>;
    impl['a, T] &'a VecDeque<T> => std::collections::vec_deque::Iter<'a, T>;
    impl[T] VecDeque<T> => std::collections::vec_deque::IntoIter<T>;
    impl['a, K, V, S] &'a HashMap<K, V, S> => std::collections::hash_map::Iter<'a, K, V>;
    impl['a, T, S] &'a HashSet<T, S> => std::collections::hash_set::Iter<'a, T>;
    impl['a, K, V] &'a BTreeMap<K, V> => std::collections::btree_map::Iter<'a, K, V>;
    impl['a, T] &'a BTreeSet<T> => std::collections::btree_set::Iter<'a, T>;
}

// A range knows its length unless it is too long for a usize, in which case
// it is drawn from like any other iterator.
impl<A> Sequence for Range<A>
where
    Range<A>: Iterator,
{
    type Item = <Range<A> as Iterator>::Item;
    type Iter = Range<A>;

    fn shape(self) -> error::Result<Shape<Self::Iter>> {
        Ok(range_shape(self))
    }
}

impl<A> Sequence for RangeInclusive<A>
where
    RangeInclusive<A>: Iterator,
{
    type Item = <RangeInclusive<A> as Iterator>::Item;
    type Iter = RangeInclusive<A>;

    fn shape(self) -> error::Result<Shape<Self::Iter>> {
        Ok(range_shape(self))
    }
}

fn range_shape<I: Iterator>(range: I) -> Shape<I> {
    match range.size_hint() {
        (lower, Some(upper)) if lower == upper => Shape::Sized(lower),
        _ => Shape::Iterable(range),
    }
}

// values that support neither capability
macro_rules! not_iterable {
    ($($t:ty),*) => {
        $(
            impl Sequence for $t {
                type Item = $t;
                type Iter = std::iter::Empty<$t>;

                fn shape(self) -> error::Result<Shape<Self::Iter>> {
                    Err(error::Error::NotIterable(std::any::type_name::<$t>()))
                }
            }
        )*
    };
}

not_iterable!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, ()
);

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sized<S: Sequence>(sequence: S) -> Option<usize> {
        match sequence.shape() {
            Ok(Shape::Sized(len)) => Some(len),
            _ => None,
        }
    }

    #[test]
    fn test_collections_are_sized() {
        let v = vec![1, 2, 3];
        assert_eq!(is_sized(&v), Some(3));
        assert_eq!(is_sized(v.as_slice()), Some(3));
        assert_eq!(is_sized(&[1, 2]), Some(2));
        assert_eq!(is_sized([0u8; 4]), Some(4));
        assert_eq!(is_sized(VecDeque::from(vec![1])), Some(1));
        assert_eq!(is_sized(&BTreeSet::from([1, 2, 2])), Some(2));
        assert_eq!(is_sized(&HashMap::from([(1, "a")])), Some(1));
        assert_eq!(is_sized(v), Some(3));
    }

    #[test]
    fn test_ranges_are_sized() {
        assert_eq!(is_sized(0..5), Some(5));
        assert_eq!(is_sized(5..0), Some(0));
        assert_eq!(is_sized(1..=3), Some(3));
        assert_eq!(is_sized(-3i64..3), Some(6));
    }

    #[test]
    fn test_unbounded_range_is_iterable() {
        let range = 0u128..u128::MAX;
        assert!(matches!(range.shape(), Ok(Shape::Iterable(_))));
    }

    #[test]
    fn test_iterators_are_iterable() {
        let mut iter = vec![1, 2, 3].into_iter();
        assert!(matches!((&mut iter).shape(), Ok(Shape::Iterable(_))));
        assert!(matches!(Iterable(vec![1]).shape(), Ok(Shape::Iterable(_))));
        // shape never draws
        assert_eq!(iter.len(), 3);
    }

    #[test]
    fn test_exact_size_wrapper() {
        let iter = "abc".bytes();
        assert_eq!(is_sized(ExactSize(iter)), Some(3));
    }

    #[test]
    fn test_scalars_are_not_iterable() {
        assert_eq!(12i32.shape().unwrap_err(), error::Error::NotIterable("i32"));
        assert_eq!(1.5f64.shape().unwrap_err(), error::Error::NotIterable("f64"));
        assert_eq!(true.shape().unwrap_err(), error::Error::NotIterable("bool"));
    }
}
