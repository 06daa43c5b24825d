//! Weather client error types

use thiserror::Error;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// No API key configured; no request was sent
    #[error("Weather API key not configured")]
    MissingApiKey,

    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Upstream answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// Failed to parse response from the weather service
    #[error("Parse error: {0}")]
    ParseError(String),
}
