//! Error types for Buzz server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes reported to the editing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    BadValue = 2,
    SuggestionFetchFailed = 3,
    RecordServerFailure = 4,
    RuleTableInvalid = 5,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The suggestion service could not be reached or answered with garbage
    #[error("Suggestions unavailable: {0}")]
    SuggestionFetchFailed(String),

    #[error("Record server error: {0}")]
    RecordServer(String),

    #[error("Invalid rule table: {0}")]
    RuleTable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::SuggestionFetchFailed(msg) => {
                tracing::warn!("Suggestion fetch failed: {}", msg);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorCode::SuggestionFetchFailed,
                    "Suggestions unavailable".to_string(),
                )
            }
            AppError::RecordServer(msg) => {
                tracing::warn!("Record server error: {}", msg);
                (StatusCode::BAD_GATEWAY, ErrorCode::RecordServerFailure, msg.clone())
            }
            AppError::RuleTable(msg) => {
                tracing::error!("Rule table error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::RuleTableInvalid,
                    msg.clone(),
                )
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
