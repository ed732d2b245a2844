//! Typed identifier for blog posts, backed by an unsigned integer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Unique identifier for a [`BlogPost`](crate::blog_post::BlogPost).
///
/// Assigned by the store on creation. Persisted records always carry a
/// non-zero id, but `0` is still a valid *query*: it simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlogPostId(u64);

impl BlogPostId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Access the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for BlogPostId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for BlogPostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Returned when a path segment is not a base-10 unsigned 64-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid blog post id {input:?}")]
pub struct ParseBlogPostIdError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for BlogPostId {
    type Err = ParseBlogPostIdError;

    /// Accepts only ASCII digits. `u64::from_str` alone would also take a
    /// leading `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseBlogPostIdError {
            input: s.to_string(),
        };
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        s.parse::<u64>().map(Self).map_err(|_| err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_decimal_digits() {
        let id: BlogPostId = "42".parse().unwrap();
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn should_parse_zero() {
        let id: BlogPostId = "0".parse().unwrap();
        assert_eq!(id, BlogPostId::new(0));
    }

    #[test]
    fn should_parse_u64_max() {
        let id: BlogPostId = u64::MAX.to_string().parse().unwrap();
        assert_eq!(id.get(), u64::MAX);
    }

    #[test]
    fn should_return_error_when_parsing_non_numeric_input() {
        let err = BlogPostId::from_str("invalid").unwrap_err();
        assert_eq!(err.input, "invalid");
    }

    #[test]
    fn should_return_error_when_parsing_empty_input() {
        assert!(BlogPostId::from_str("").is_err());
    }

    #[test]
    fn should_return_error_when_input_has_sign() {
        assert!(BlogPostId::from_str("+7").is_err());
        assert!(BlogPostId::from_str("-7").is_err());
    }

    #[test]
    fn should_return_error_when_input_has_whitespace() {
        assert!(BlogPostId::from_str(" 7").is_err());
        assert!(BlogPostId::from_str("7 ").is_err());
    }

    #[test]
    fn should_return_error_when_input_overflows_u64() {
        assert!(BlogPostId::from_str("18446744073709551616").is_err());
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = BlogPostId::new(999_999);
        let parsed: BlogPostId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_bare_number() {
        let json = serde_json::to_string(&BlogPostId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
