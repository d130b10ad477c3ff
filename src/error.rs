use std::error;
use std::fmt;
use std::result;

/// Errors surfaced by the red black tree collections.
///
/// Absent keys are a no-op for every mutating operation; only value-returning lookups and
/// duplicate-rejecting insertions report an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key does not exist in the collection.
    KeyNotFound,
    /// The collection does not accept duplicates and already contains the key.
    DuplicateKeyRejected,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key was not found in the collection"),
            Error::DuplicateKeyRejected => write!(f, "key already exists in the collection"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::KeyNotFound.to_string(),
            "key was not found in the collection",
        );
        assert_eq!(
            Error::DuplicateKeyRejected.to_string(),
            "key already exists in the collection",
        );
    }
}
