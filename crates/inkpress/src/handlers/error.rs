//! Error responses for the JSON API.
//!
//! Every failure is rendered as `{"error": "<message>"}` with a fixed,
//! human-readable message. Downstream errors are logged with their cause but
//! the cause never reaches the client.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use inkpress_core::post::PostError;

/// Message returned when a required body field is absent.
pub const MISSING_FIELDS: &str = "Missing required fields";

/// Message returned when a post id does not match any row.
pub const POST_NOT_FOUND: &str = "Post not found";

/// Handler error, mapped to a status code and a fixed message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was malformed or incomplete.
    #[error("{0}")]
    BadRequest(&'static str),

    /// The targeted resource does not exist.
    #[error("{0}")]
    NotFound(&'static str),

    /// Storage or a third-party service failed.
    #[error("{message}")]
    Internal {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    /// Wraps a downstream failure behind a generic message.
    pub fn internal(message: &'static str, cause: impl Into<anyhow::Error>) -> Self {
        Self::Internal {
            message,
            cause: cause.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::MissingFields(fields) => {
                tracing::debug!(?fields, "Rejected post payload");
                Self::BadRequest(MISSING_FIELDS)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Internal { message, cause } => {
                tracing::error!(error = ?cause, "{message}");
            }
            other => {
                tracing::warn!(status = %status, message = %other, "API error");
            }
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use inkpress_core::storage::RepositoryError;

    async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_missing_fields_renders_400() {
        let error = ApiError::from(PostError::MissingFields(vec!["title"]));
        let (status, body) = render(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn test_not_found_renders_404() {
        let (status, body) = render(ApiError::NotFound(POST_NOT_FOUND)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Post not found"}));
    }

    #[tokio::test]
    async fn test_internal_hides_cause() {
        let cause = RepositoryError::QueryFailed("disk I/O error".to_string());
        let (status, body) = render(ApiError::internal("Failed to fetch posts", cause)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to fetch posts"}));
    }
}
