//! Domain error types
//!
//! This module defines the error hierarchy for the order-test viewer.
//! Errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main viewer error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Order-test fetch errors
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Failure to retrieve order-test records from the remote endpoint
///
/// Every variant is a fetch failure: transport errors and undecodable
/// bodies are handled identically by the component (logged, previous
/// records kept, loading cleared). The variants only carry diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Could not reach the endpoint
    #[error("Failed to connect to order-test endpoint: {0}")]
    ConnectionFailed(String),

    /// Endpoint answered with a non-success status
    #[error("Endpoint returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not a recognizable order-test payload
    #[error("Invalid response from endpoint: {0}")]
    InvalidResponse(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ViewerError {
    fn from(err: std::io::Error) -> Self {
        ViewerError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ViewerError {
    fn from(err: serde_json::Error) -> Self {
        ViewerError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ViewerError {
    fn from(err: toml::de::Error) -> Self {
        ViewerError::Configuration(format!("TOML parse error: {err}"))
    }
}
