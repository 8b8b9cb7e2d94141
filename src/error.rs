//! Error types for collection operations
//!
//! - [`CollectionError`]: returned by operations whose arguments violate the
//!   calling contract (bad index, duplicate key, empty queue, ...).
//! - [`InvariantError`]: returned by the `check_invariants` methods when the
//!   internal structure is inconsistent.
//!
//! Every fallible operation validates its arguments before touching the
//! collection, so an `Err` always means nothing was changed.

use std::fmt;

/// Error type for collection operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionError {
    /// A numeric argument was below its allowed minimum
    ArgumentOutOfRange {
        /// Name of the offending parameter
        name: &'static str,
        /// Value that was passed
        value: usize,
        /// Smallest accepted value
        min: usize,
    },
    /// A positional index was outside the valid range
    IndexOutOfRange {
        /// Index that was passed
        index: usize,
        /// Number of elements at the time of the call
        len: usize,
    },
    /// The key is already present in the dictionary
    DuplicateKey,
    /// The key is not present in the dictionary
    KeyNotFound,
    /// The queue has no elements
    EmptyCollection,
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::ArgumentOutOfRange { name, value, min } => {
                write!(f, "argument `{name}` is out of range: {value} < {min}")
            }
            CollectionError::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for length {len}")
            }
            CollectionError::DuplicateKey => {
                write!(f, "an entry with the same key already exists")
            }
            CollectionError::KeyNotFound => {
                write!(f, "the given key was not present in the dictionary")
            }
            CollectionError::EmptyCollection => write!(f, "the collection is empty"),
        }
    }
}

impl std::error::Error for CollectionError {}

/// Error returned when an internal invariant does not hold.
///
/// Carries a description of the first violation found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = CollectionError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 is out of range for length 3");

        let err = CollectionError::ArgumentOutOfRange {
            name: "capacity",
            value: 2,
            min: 5,
        };
        assert!(err.to_string().contains("capacity"));

        assert_eq!(
            CollectionError::EmptyCollection.to_string(),
            "the collection is empty"
        );
    }

    #[test]
    fn test_invariant_error_message() {
        let err = InvariantError::new("heap property violated at 3");
        assert_eq!(err.message(), "heap property violated at 3");
        assert_eq!(err.to_string(), "heap property violated at 3");
    }

    #[test]
    fn test_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<CollectionError>();
        assert_error::<InvariantError>();
    }
}
