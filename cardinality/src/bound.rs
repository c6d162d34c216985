use crate::error::{self, ArgumentError};

/// Check that the named bound is not negative.
pub(crate) fn non_negative(name: &'static str, value: i64) -> error::Result<u64> {
    u64::try_from(value).map_err(|_| ArgumentError::Negative(name).into())
}

/// Check an inclusive `min..=max` range.
///
/// The checks run in order: `min`, then `max`, then their relation.
pub(crate) fn inclusive(min: i64, max: i64) -> error::Result<(u64, u64)> {
    let min = non_negative("min", min)?;
    let max = non_negative("max", max)?;
    if min > max {
        return Err(ArgumentError::MinExceedsMax.into());
    }
    Ok((min, max))
}

#[inline]
pub(crate) fn sized_at_least(len: usize, size: u64) -> bool {
    len as u64 >= size
}

#[inline]
pub(crate) fn sized_at_most(len: usize, size: u64) -> bool {
    len as u64 <= size
}

/// Skip `n` items, then draw the one after it.
///
/// Exactly `n + 1` items are drawn if that many are available.
pub(crate) fn skip_then_next<I: Iterator>(iter: &mut I, n: u64) -> Option<I::Item> {
    let mut remaining = n;
    loop {
        match usize::try_from(remaining) {
            Ok(n) => return iter.nth(n),
            Err(_) => {
                // nth(usize::MAX - 1) draws usize::MAX items
                iter.nth(usize::MAX - 1)?;
                remaining -= usize::MAX as u64;
            }
        }
    }
}

/// Does the iterator yield at least `n` more items? `n` must be above zero.
///
/// At most `n` items are drawn.
pub(crate) fn reaches<I: Iterator>(iter: &mut I, n: u64) -> bool {
    debug_assert!(n > 0);
    skip_then_next(iter, n - 1).is_some()
}

/// Does the iterator yield more than `n` more items?
///
/// At most `n + 1` items are drawn.
pub(crate) fn exceeds<I: Iterator>(iter: &mut I, n: u64) -> bool {
    skip_then_next(iter, n).is_some()
}

/// Like [`skip_then_next`], but stops at the first error the iterator yields.
pub(crate) fn try_skip_then_next<I, T, E>(iter: &mut I, n: u64) -> Result<Option<T>, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    for _ in 0..n {
        match iter.next() {
            Some(Ok(_)) => {}
            Some(Err(e)) => return Err(e),
            None => return Ok(None),
        }
    }
    iter.next().transpose()
}

pub(crate) fn try_reaches<I, T, E>(iter: &mut I, n: u64) -> Result<bool, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    debug_assert!(n > 0);
    Ok(try_skip_then_next(iter, n - 1)?.is_some())
}

pub(crate) fn try_exceeds<I, T, E>(iter: &mut I, n: u64) -> Result<bool, E>
where
    I: Iterator<Item = Result<T, E>>,
{
    Ok(try_skip_then_next(iter, n)?.is_some())
}
