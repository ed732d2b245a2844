//! JSON handlers for blog posts.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

use blogs_app::ports::BlogPostRepository;
use blogs_domain::blog_post::BlogPost;
use blogs_domain::error::BlogError;
use blogs_domain::id::{BlogPostId, ParseBlogPostIdError};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<BlogPost>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<BlogPost>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /blogs`
pub async fn list<BR>(State(state): State<AppState<BR>>) -> Result<ListResponse, ApiError>
where
    BR: BlogPostRepository + Send + Sync + 'static,
{
    let posts = state.blog_service.list_posts().await?;
    Ok(ListResponse::Ok(Json(posts)))
}

/// `GET /blogs/*id`
///
/// Everything after `/blogs/` is the id, so `/blogs/1/extra` is malformed
/// rather than unrouted. The id is parsed before the store is touched, so a
/// malformed id never reaches the repository.
pub async fn get<BR>(
    State(state): State<AppState<BR>>,
    id: Result<Path<String>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    BR: BlogPostRepository + Send + Sync + 'static,
{
    let raw = match id {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected blog id segment");
            String::new()
        }
    };
    let id = BlogPostId::from_str(&raw).map_err(BlogError::from)?;
    let post = state.blog_service.get_post(id).await?;
    Ok(GetResponse::Ok(Json(post)))
}

/// `GET /blogs/` — an empty id segment is malformed, not a listing.
#[allow(clippy::unused_async)]
pub async fn get_without_id() -> ApiError {
    BlogError::from(ParseBlogPostIdError {
        input: String::new(),
    })
    .into()
}
