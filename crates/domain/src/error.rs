//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`BlogError`]
//! via `#[from]` (or an explicit `From` impl for boxed storage errors).

use crate::id::ParseBlogPostIdError;

/// Base error for every blog use-case.
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// The identifier in the request could not be parsed.
    #[error("invalid identifier")]
    InvalidId(#[from] ParseBlogPostIdError),

    /// No record matches the requested identifier.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The backing store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A lookup found no record for the given id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// Identifier that was looked up, in display form.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn should_describe_not_found_error() {
        let err = NotFoundError {
            entity: "Blog",
            id: "3".to_string(),
        };
        assert_eq!(err.to_string(), "Blog 3 not found");
    }

    #[test]
    fn should_keep_source_when_converting_parse_error() {
        let err: BlogError = ParseBlogPostIdError {
            input: "abc".to_string(),
        }
        .into();
        assert!(matches!(err, BlogError::InvalidId(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn should_expose_boxed_storage_source() {
        let io = std::io::Error::other("disk on fire");
        let err = BlogError::Storage(Box::new(io));
        assert_eq!(err.source().unwrap().to_string(), "disk on fire");
    }
}
