//! HTTP error response mapping.

use std::error::Error;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use blogs_domain::error::BlogError;

/// Maps [`BlogError`] to a plain-text HTTP response with the matching status.
#[derive(Debug)]
pub struct ApiError(BlogError);

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            BlogError::InvalidId(_) => (StatusCode::BAD_REQUEST, "Invalid blog ID").into_response(),
            BlogError::NotFound(_) => (StatusCode::NOT_FOUND, "Blog not found").into_response(),
            BlogError::Storage(_) => {
                let message = describe(&self.0);
                tracing::error!(error = %message, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

/// Render an error followed by its whole source chain, `: `-separated.
fn describe(err: &dyn Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
