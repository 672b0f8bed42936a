use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The inbound body could not be extracted.
    #[error("Invalid request body: {message}")]
    Rejected { status: StatusCode, message: String },

    /// Upstream answered with a non-success status.
    #[error("GitHub API error (status {status})")]
    Upstream { status: u16, body: String },

    /// Upstream answered successfully but with a payload we cannot read.
    #[error("Unexpected response schema")]
    UnexpectedSchema { raw: Value },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Api { status, body } => AppError::Upstream { status, body },
            LlmError::UnexpectedSchema { raw } => AppError::UnexpectedSchema { raw },
            LlmError::Http(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Rejected { status, message } => {
                tracing::warn!("Rejected request body: {message}");
                (status, json!({ "error": message }))
            }
            AppError::Upstream { status, body } => {
                tracing::error!("GitHub API error (status {status}): {body}");
                (
                    StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                    json!({ "error": "GitHub API error", "body": body }),
                )
            }
            AppError::UnexpectedSchema { raw } => {
                tracing::error!("Unexpected response schema from GitHub API");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({ "error": "Unexpected response schema", "raw": raw }),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": format!("Internal error: {msg}") }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn into_parts(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_upstream_keeps_status_and_body() {
        let (status, body) = into_parts(AppError::Upstream {
            status: 401,
            body: "Bad credentials".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "GitHub API error");
        assert_eq!(body["body"], "Bad credentials");
    }

    #[tokio::test]
    async fn test_upstream_invalid_status_falls_back_to_bad_gateway() {
        let (status, _) = into_parts(AppError::Upstream {
            status: 1000,
            body: String::new(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_unexpected_schema_is_bad_gateway_with_raw() {
        let (status, body) = into_parts(AppError::UnexpectedSchema {
            raw: json!({"foo": 1}),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "Unexpected response schema");
        assert_eq!(body["raw"], json!({"foo": 1}));
    }

    #[tokio::test]
    async fn test_internal_is_500_with_message() {
        let (status, body) = into_parts(AppError::Internal("connection refused".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal error: connection refused");
    }

    #[test]
    fn test_llm_error_mapping() {
        let err: AppError = LlmError::Api {
            status: 503,
            body: "down".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Upstream { status: 503, .. }));

        let err: AppError = LlmError::UnexpectedSchema { raw: Value::Null }.into();
        assert!(matches!(err, AppError::UnexpectedSchema { .. }));
    }
}
