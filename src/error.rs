//! Custom error types for Cuentas Claras
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Cuentas Claras operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClarasError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Transport-level failure talking to the webhook backend
    #[error("Network error: {0}")]
    Http(String),

    /// The backend answered with a non-success status code
    #[error("{operation} failed with HTTP status {status}")]
    Status {
        operation: &'static str,
        status: u16,
    },

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl ClarasError {
    /// Create a status error for a named operation
    pub fn status(operation: &'static str, status: u16) -> Self {
        Self::Status { operation, status }
    }

    /// Check if this error came from the network (transport or status)
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ClarasError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClarasError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ClarasError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Json(err.to_string())
        } else {
            Self::Http(err.to_string())
        }
    }
}

/// Result type alias for Cuentas Claras operations
pub type ClarasResult<T> = Result<T, ClarasError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClarasError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_status_error() {
        let err = ClarasError::status("Delete expense", 500);
        assert_eq!(err.to_string(), "Delete expense failed with HTTP status 500");
        assert!(err.is_network());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ClarasError = io_err.into();
        assert!(matches!(err, ClarasError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err: ClarasError = json_err.into();
        assert!(matches!(err, ClarasError::Json(_)));
        assert!(!err.is_network());
    }
}
