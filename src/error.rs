//! Error types for the hawaii-climate application.
//!
//! This module defines the error enum shared by the data access layer, the
//! configuration loader and the HTTP handlers.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for hawaii-climate operations.
#[derive(Error, Debug)]
pub enum ClimateError {
    /// SQLite query or connection errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A fixed reference date that could not be turned into a cutoff
    #[error("Invalid reference date '{date}': {message}")]
    ReferenceDate { date: String, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl ClimateError {
    /// HTTP status used when this error ends a request.
    ///
    /// An unreachable store (pool exhausted or file unreadable) is reported as
    /// 503, everything else as 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ClimateError::Database(sqlx::Error::PoolTimedOut)
            | ClimateError::Database(sqlx::Error::PoolClosed)
            | ClimateError::Database(sqlx::Error::Io(_)) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience type alias for Results with ClimateError
pub type Result<T> = std::result::Result<T, ClimateError>;
