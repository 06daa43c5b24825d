//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Unknown note priority
    #[error("Invalid priority: {0}")]
    InvalidPriority(String),

    /// Malformed note identifier
    #[error("Invalid note id: {0}")]
    InvalidNoteId(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}
