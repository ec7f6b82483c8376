//! Error types for the keep-alive connector

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Page template error
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Request used a verb the endpoint does not serve
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Unexpected failure while aggregating checks
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure of a single connection check
///
/// Never leaves the health module as an error: it is always folded into a
/// failed `CheckResult`.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Invalid connection name: {0}")]
    UnknownConnection(String),

    #[error("Failed to acquire connection: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "message": "Method Not Allowed" })),
            )
                .into_response(),
            AppError::Template(e) => {
                tracing::error!("Failed to render page: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "message": "Failed to render page.",
                        "error": e.to_string(),
                    })),
                )
                    .into_response()
            }
            other => {
                tracing::error!("Database connection test failed: {:?}", other);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "message": "Failed to test database connections.",
                        "error": other.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
