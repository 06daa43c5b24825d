//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The upstream rejected the request (bad location, bad parameters)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Credentials were rejected upstream
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Upstream answered with a non-success status that has no specific mapping
    #[error("Upstream returned HTTP {status}: {message}")]
    Upstream {
        /// HTTP status code returned upstream
        status: u16,
        /// Error body or reason
        message: String,
    },

    /// External service error (transport, decode)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Note store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
