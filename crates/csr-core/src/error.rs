//! Centralized error types for the console.

use thiserror::Error;

/// Main error type for console operations.
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Required field '{field}' of {kind} is empty")]
    RequiredFieldEmpty { kind: &'static str, field: &'static str },

    #[error("{kind} not found: {id}")]
    RecordMissing { kind: &'static str, id: String },

    #[error("Query is empty")]
    EmptyQuery,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

impl ConsoleError {
    /// Create a required-field error.
    pub fn required(kind: &'static str, field: &'static str) -> Self {
        Self::RequiredFieldEmpty { kind, field }
    }

    /// Create a record-missing error.
    pub fn missing(kind: &'static str, id: impl Into<String>) -> Self {
        Self::RecordMissing {
            kind,
            id: id.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the operator can fix this by changing form input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::RequiredFieldEmpty { .. } | Self::EmptyQuery)
    }
}
