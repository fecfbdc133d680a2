//! HTTP error mapping
//!
//! Converts domain errors into wire responses. The response body never
//! carries internal detail; each status has a fixed client-facing message
//! and the detail is logged instead.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use task_core::TaskError;
use thiserror::Error;

/// Client-facing message for a missing task id.
pub const TASK_NOT_FOUND: &str = "Task not found";

/// Client-facing message for a create request without a title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Client-facing message for any failure the API does not explain.
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Errors surfaced by route handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound(msg) => ApiError::NotFound(msg),
            TaskError::Validation(msg) => ApiError::Validation(msg),
            TaskError::Database(msg) => ApiError::Internal(msg),
            TaskError::Configuration(msg) => ApiError::Internal(msg),
            TaskError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, TASK_NOT_FOUND),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, TITLE_REQUIRED),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR)
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_error_conversion() {
        let api: ApiError = TaskError::not_found_id(7).into();
        assert!(matches!(api, ApiError::NotFound(_)));

        let api: ApiError = TaskError::missing_field("title").into();
        assert!(matches!(api, ApiError::Validation(_)));

        let api: ApiError = TaskError::Database("locked".to_string()).into();
        assert!(matches!(api, ApiError::Internal(_)));

        let api: ApiError = TaskError::Configuration("bad path".to_string()).into();
        assert!(matches!(api, ApiError::Internal(_)));
    }

    #[tokio::test]
    async fn test_not_found_body_is_fixed() {
        let response = ApiError::NotFound("task 9 is gone".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Task not found" }));
    }

    #[tokio::test]
    async fn test_validation_body_is_fixed() {
        let response = ApiError::Validation("missing title".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Title is required" }));
    }

    #[tokio::test]
    async fn test_internal_detail_never_reaches_client() {
        let response =
            ApiError::Internal("connection pool exhausted at db.rs:42".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!text.contains("pool"));
        assert!(!text.contains("db.rs"));

        let body: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    }
}
