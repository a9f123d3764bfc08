//! # Query Builder Errors
//!
//! Error types for query compilation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for query compilation
pub type QueryResult<T> = Result<T, QueryError>;

/// Query compilation errors
#[derive(Debug, Clone, Error)]
pub enum QueryError {
    // ==================
    // Registration Errors
    // ==================
    /// Invalid builder configuration, raised once at registration
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ==================
    // Client Errors (4xx)
    // ==================
    /// Structurally broken query parameter
    #[error("Invalid query parameter: {0}")]
    InvalidParam(String),

    /// Search text produced an invalid regex pattern
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(String),
}

impl QueryError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Misconfiguration is a server fault if it ever reaches a response
            QueryError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            QueryError::InvalidParam(_) => StatusCode::BAD_REQUEST,
            QueryError::InvalidPattern(_) => StatusCode::BAD_REQUEST,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<QueryError> for ErrorResponse {
    fn from(err: QueryError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
