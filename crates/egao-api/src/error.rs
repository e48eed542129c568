use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<egao_core::error::CoreError> for ApiError {
    fn from(e: egao_core::error::CoreError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<egao_assess::error::ScoringError> for ApiError {
    fn from(e: egao_assess::error::ScoringError) -> Self {
        match e {
            egao_assess::error::ScoringError::EmptyAssessment => {
                ApiError::BadRequest(e.to_string())
            }
            egao_assess::error::ScoringError::InvariantViolation(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<egao_bedrock::error::BedrockError> for ApiError {
    fn from(e: egao_bedrock::error::BedrockError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<egao_export::error::ExportError> for ApiError {
    fn from(e: egao_export::error::ExportError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
