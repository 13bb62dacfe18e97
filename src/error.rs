//! Errors surfaced by tree mutations and lookups.

use thiserror::Error;

/// Everything that can go wrong when talking to a [`Tree`][crate::Tree].
///
/// Failures never leave a partial mutation behind: a failed `add` or `delete`
/// leaves the count, height and shape of the tree exactly as they were.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error<T> {
    /// An equal value is already stored. The rejected value is handed back so
    /// the caller can reuse or inspect it.
    #[error("node already exists with the given value")]
    AlreadyExists(T),
    /// No node holds the requested value.
    #[error("node could not be found")]
    NotFound,
}

impl<T> Error<T> {
    /// Recovers the value rejected by an insert, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::AlreadyExists(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::AlreadyExists(5).to_string(),
            "node already exists with the given value"
        );
        assert_eq!(Error::<i32>::NotFound.to_string(), "node could not be found");
    }

    #[test]
    fn into_value_returns_rejected_value() {
        assert_eq!(Error::AlreadyExists("x").into_value(), Some("x"));
        assert_eq!(Error::<&str>::NotFound.into_value(), None);
    }
}
