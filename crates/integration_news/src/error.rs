//! News client error types

use thiserror::Error;

/// Errors that can occur while fetching headlines
#[derive(Debug, Error)]
pub enum NewsError {
    /// No API key configured; no request was sent
    #[error("News API key not configured")]
    MissingApiKey,

    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Transport-level failure
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream answered with a non-success status
    #[error("News API request failed with HTTP {status}: {message}")]
    Http {
        /// Status code
        status: u16,
        /// Upstream error message, if one was sent
        message: String,
    },

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),
}
