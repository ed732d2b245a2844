//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use blogs_app::ports::BlogPostRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Serves the blog routes at the root alongside `/` and `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<BR>(state: AppState<BR>) -> Router
where
    BR: BlogPostRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn hello() -> &'static str {
    "Hello, World!"
}

async fn health_check() -> &'static str {
    "OK"
}
