use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Busy: {0}")]
    Busy(String),

    #[error("Enhancement failed: {0}")]
    EnhancementFailed(String),

    #[error("ATS feedback failed: {0}")]
    FeedbackFailed(String),

    #[error("Export unavailable: {0}")]
    ExportUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Busy(msg) => (StatusCode::CONFLICT, "AI_BUSY", msg.clone()),
            AppError::EnhancementFailed(msg) => {
                tracing::error!("Enhancement failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "ENHANCEMENT_FAILED",
                    "The enhancement request could not be completed".to_string(),
                )
            }
            AppError::FeedbackFailed(msg) => {
                tracing::error!("ATS feedback failed: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "FEEDBACK_FAILED",
                    "The ATS check could not be completed".to_string(),
                )
            }
            AppError::ExportUnavailable(msg) => {
                tracing::warn!("Export unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "EXPORT_UNAVAILABLE",
                    msg.clone(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
