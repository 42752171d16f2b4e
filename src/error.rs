//! Error handling module for the hotel explorer
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for the hotel explorer
#[derive(Error, Debug)]
pub enum ExplorerError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors (user input such as the city code)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Hotel source failures (catalog lookup, worker thread)
    #[error("Provider error: {0}")]
    Provider(String),

    /// Authentication/session errors
    #[error("Session error: {0}")]
    Session(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for explorer operations
pub type Result<T> = std::result::Result<T, ExplorerError>;

impl ExplorerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::Session(msg.into())
    }

    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Message suitable for an alert dialog, without the category prefix
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg)
            | Self::Provider(msg)
            | Self::Session(msg)
            | Self::Terminal(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExplorerError::validation("Enter 3-letter city code");
        assert_eq!(err.to_string(), "Validation error: Enter 3-letter city code");

        let err = ExplorerError::session("token expired");
        assert_eq!(err.to_string(), "Session error: token expired");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ExplorerError = io_err.into();
        assert!(matches!(err, ExplorerError::Io(_)));
    }

    #[test]
    fn test_user_message_strips_prefix() {
        let err = ExplorerError::validation("Enter 3-letter city code");
        assert_eq!(err.user_message(), "Enter 3-letter city code");
    }
}
