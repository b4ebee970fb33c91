use axum::http::StatusCode;
use thiserror::Error;

/// Substrings that indicate the database itself is unreachable rather
/// than a query having failed. Matched against the driver message so a
/// paused backend project gets a clearer hint than a raw IO error.
const CONNECTIVITY_MARKERS: &[&str] = &[
    "connection refused",
    "connection reset",
    "pool timed out",
    "failed to lookup address",
    "network unreachable",
];

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Env error: {0}")]
    EnvError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// True when the underlying store looks unreachable, as opposed to
    /// a query that ran and failed.
    pub fn is_connectivity(&self) -> bool {
        match self {
            AppError::DatabaseError(msg) => {
                let lower = msg.to_lowercase();
                CONNECTIVITY_MARKERS.iter().any(|m| lower.contains(m))
            }
            _ => false,
        }
    }

    pub fn to_response(&self) -> (StatusCode, String) {
        if self.is_connectivity() {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                "Cannot connect to the database. The backend project may be paused or inactive."
                    .into(),
            );
        }

        match self {
            AppError::DatabaseError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::JwtError(e) => (StatusCode::UNAUTHORIZED, e.to_string()),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::EnvError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
        }
    }
}
