//! Shared application state for axum handlers.

use std::sync::Arc;

use blogs_app::ports::BlogPostRepository;
use blogs_app::services::blog_service::BlogService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need to
/// be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<BR> {
    /// Blog post read service.
    pub blog_service: Arc<BlogService<BR>>,
}

impl<BR> Clone for AppState<BR> {
    fn clone(&self) -> Self {
        Self {
            blog_service: Arc::clone(&self.blog_service),
        }
    }
}

impl<BR> AppState<BR>
where
    BR: BlogPostRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(blog_service: BlogService<BR>) -> Self {
        Self {
            blog_service: Arc::new(blog_service),
        }
    }
}
