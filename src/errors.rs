//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::config::MISSING_FIELDS_MESSAGE;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation
    #[error("Missing fields")]
    MissingFields,

    /// Body could not be read as JSON; keeps the extractor's own status
    #[error("{0}")]
    Rejection(#[from] JsonRejection),

    // Store errors
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] mongodb::bson::ser::Error),

    // Internal
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable error
    #[schema(example = "Missing fields")]
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::Rejection(rejection) => rejection.status(),
            AppError::Database(_) | AppError::Serialization(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::MissingFields => MISSING_FIELDS_MESSAGE.to_string(),
            AppError::Rejection(rejection) => rejection.body_text(),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            AppError::Serialization(e) => {
                tracing::error!("Serialization error: {:?}", e);
                "Internal server error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
