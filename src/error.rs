//! Error handling for Exam Planner
//!
//! Centralized error types and handling for the application.

use crate::models::FieldErrors;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] crate::storage::StorageError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] crate::services::exam_dataset::DatasetError),

    #[error("Advisor error: {0}")]
    Advisor(#[from] crate::services::advisor_client::AdvisorError),

    #[error("Exam entry has invalid fields")]
    InvalidDraft(FieldErrors),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<crate::services::exam_validation::SubmitError> for AppError {
    fn from(error: crate::services::exam_validation::SubmitError) -> Self {
        use crate::services::exam_validation::SubmitError;
        match error {
            SubmitError::Invalid(errors) => AppError::InvalidDraft(errors),
            SubmitError::Storage(e) => AppError::Storage(e),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationDetail {
    field: String,
    message: String,
}

impl AppError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Storage(_)
            | AppError::Dataset(_)
            | AppError::Internal(_)
            | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Advisor(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidDraft(_) | AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Storage(_) => "StorageError",
            AppError::Dataset(_) => "DatasetError",
            AppError::Advisor(_) => "AdvisorUnavailable",
            AppError::InvalidDraft(_) | AppError::Validation(_) => "ValidationError",
            AppError::BadRequest(_) => "BadRequest",
            AppError::NotFound(_) => "NotFound",
            AppError::Internal(_) => "InternalError",
            AppError::Serialization(_) => "SerializationError",
        }
    }

    /// Check if this error should be logged as an error vs warning
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    pub fn bad_request(message: &str) -> Self {
        AppError::BadRequest(message.to_string())
    }

    pub fn not_found(resource: &str) -> Self {
        AppError::NotFound(format!("{resource} not found"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();
        let timestamp = chrono::Utc::now().timestamp();

        if self.is_server_error() {
            crate::logging::log_error(&message, error_code);
        } else {
            tracing::warn!(error = %error_code, "{}", message);
        }

        let body = match &self {
            AppError::InvalidDraft(errors) => {
                let details: Vec<ValidationDetail> = errors
                    .iter_invalid()
                    .map(|(field, message)| ValidationDetail {
                        field: field.to_string(),
                        message: message.to_string(),
                    })
                    .collect();
                json!({
                    "error": error_code,
                    "message": message,
                    "timestamp": timestamp,
                    "details": details
                })
            }
            _ => json!({
                "error": error_code,
                "message": message,
                "timestamp": timestamp
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
