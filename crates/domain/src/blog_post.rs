//! Blog post — the single resource served by the API.

use serde::{Deserialize, Serialize};

use crate::id::BlogPostId;

/// A persisted blog post.
///
/// Serialized as `{"id": <uint>, "title": <string>, "content": <string>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,
    pub content: String,
}

/// A blog post that has not been stored yet; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
}

impl NewBlogPost {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Attach the id assigned by the store.
    #[must_use]
    pub fn with_id(self, id: BlogPostId) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            content: self.content,
        }
    }
}
