//! Error types for the people API.
//!
//! [`ApiError`] unifies all request-time failures into a single enum that
//! can be converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. This is
//! the only place request errors are recovered: handlers propagate with `?`
//! and the conversion logs the error and picks the status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use swapi_data::JoinError;

/// Errors that can occur while serving a request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A person could not be joined against the dataset.
    #[error("join failed: {0}")]
    Join(#[from] JoinError),

    /// A response body could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No route matches the request path.
    #[error("no route for {0}")]
    RouteNotFound(String),
}

impl ApiError {
    /// HTTP status carried by this error.
    ///
    /// A join failure means the dataset itself is inconsistent, so it is a
    /// server error rather than a 404 for the caller.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Join(_) | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RouteNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
