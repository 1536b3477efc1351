// src/error.rs

//! Unified error handling for the SCRS client.

use std::fmt;

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport failed (connection, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The server answered outside the 2xx range or with success=false
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Session is missing, expired, or was rejected with a 401
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Client-side input validation failed before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create an API error with HTTP status context.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl fmt::Display) -> Self {
        Self::Unauthorized(message.to_string())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error must tear the session down (the global 401 policy).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message() {
        let err = AppError::api(500, "boom");
        assert_eq!(err.to_string(), "API error (500): boom");
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(AppError::unauthorized("expired").is_unauthorized());
        assert!(!AppError::validation("missing title").is_unauthorized());
    }
}
