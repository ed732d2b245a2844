//! JSON API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod blogs;

use axum::Router;
use axum::routing::get;

use blogs_app::ports::BlogPostRepository;

use crate::state::AppState;

/// Build the blog posts sub-router.
pub fn routes<BR>() -> Router<AppState<BR>>
where
    BR: BlogPostRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/blogs", get(blogs::list::<BR>))
        .route("/blogs/", get(blogs::get_without_id))
        .route("/blogs/{*id}", get(blogs::get::<BR>))
}
