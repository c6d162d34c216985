use thiserror::Error;

/// A numeric bound that was rejected before the sequence was touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ArgumentError {
    /// The named bound was below zero.
    #[error("'{0}' must be positive (or zero)")]
    Negative(&'static str),
    /// The lower bound of a range was above the upper bound.
    #[error("max must be greater or equal than min")]
    MinExceedsMax,
}

/// Cardinality error.
///
/// Errors raised by the sequence itself are never turned into this type; see
/// the [`fallible`](crate::fallible) functions for how they are passed on.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Error {
    /// A bound was negative, or `min` was greater than `max`.
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),
    /// The value can neither report a length nor be iterated.
    ///
    /// Carries the name of the offending type.
    #[error("'{0}' object is not iterable")]
    NotIterable(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_negative_message_names_bound() {
        let e: Error = ArgumentError::Negative("size").into();
        assert_snapshot!(e.to_string(), @"'size' must be positive (or zero)");
    }

    #[test]
    fn test_min_exceeds_max_message() {
        let e: Error = ArgumentError::MinExceedsMax.into();
        assert_snapshot!(e.to_string(), @"max must be greater or equal than min");
    }

    #[test]
    fn test_not_iterable_message() {
        let e = Error::NotIterable("i32");
        assert_snapshot!(e.to_string(), @"'i32' object is not iterable");
    }
}
