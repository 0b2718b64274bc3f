//! Centralized error handling.
//!
//! Domain operations return explicit error kinds; the HTTP layer maps each
//! kind to a status code and a plain-text body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::domain::UserId;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Domain errors
    #[error("Email is already in use")]
    DuplicateEmail,

    #[error("User not found with id: {0}")]
    NotFound(UserId),

    // Request errors
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    BadRequest(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DuplicateEmail | AppError::Validation(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }

    /// Re-map `NotFound` to a 400 carrying the same message.
    ///
    /// Updates report a missing record the same way as a rejected email.
    pub fn into_bad_request(self) -> Self {
        match self {
            AppError::NotFound(_) => AppError::BadRequest(self.to_string()),
            other => other,
        }
    }

    /// Translate a failed write, treating a unique-constraint violation as
    /// a duplicate email.
    pub fn from_write(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::warn!("Unique constraint rejected write: {}", detail);
                AppError::DuplicateEmail
            }
            _ => AppError::Database(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Absence is rendered without a body
        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        (status, self.user_message()).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
