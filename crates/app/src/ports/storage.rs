//! Storage port — repository trait for blog post persistence.

use std::future::Future;

use blogs_domain::blog_post::BlogPost;
use blogs_domain::error::BlogError;
use blogs_domain::id::BlogPostId;

/// Read access to stored blog posts.
///
/// Implementations must be safe to call concurrently; the application layer
/// performs no locking of its own.
pub trait BlogPostRepository {
    /// Return every stored post, most recently created first.
    ///
    /// An empty store yields an empty vector.
    fn get_all(&self) -> impl Future<Output = Result<Vec<BlogPost>, BlogError>> + Send;

    /// Return the post with the given id, or `None` when there is none.
    ///
    /// Ids the backend cannot represent are reported as `None`.
    fn get_by_id(
        &self,
        id: BlogPostId,
    ) -> impl Future<Output = Result<Option<BlogPost>, BlogError>> + Send;
}
