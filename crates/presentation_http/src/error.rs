//! API error handling
//!
//! Every failure is rendered as `{error, code, details?}`. Handlers pick a
//! fixed, user-facing `error` message per route; the underlying cause goes
//! into `details`, which is withheld in production.

use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Global flag to control error detail exposure
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(true);

/// Configure whether error details are included in responses.
///
/// Set to `false` in production.
pub fn set_expose_internal_errors(expose: bool) {
    EXPOSE_INTERNAL_ERRORS.store(expose, Ordering::SeqCst);
}

fn should_expose_details() -> bool {
    EXPOSE_INTERNAL_ERRORS.load(Ordering::SeqCst)
}

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {message}")]
    BadRequest {
        message: String,
        details: Option<String>,
    },

    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
        details: Option<String>,
    },

    /// Upstream status passed through unchanged
    #[error("Upstream returned {status}: {message}")]
    Upstream {
        status: u16,
        message: String,
        details: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        details: Option<String>,
    },
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// User-facing message
    pub error: String,
    /// Machine-readable code
    pub code: String,
    /// Underlying cause (development only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            details: None,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details: None,
        }
    }

    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            details: None,
        }
    }

    /// Attach the underlying cause
    #[must_use]
    pub fn with_details(mut self, cause: impl Display) -> Self {
        match &mut self {
            Self::BadRequest { details, .. }
            | Self::Unauthorized { details, .. }
            | Self::Upstream { details, .. }
            | Self::Internal { details, .. } => *details = Some(cause.to_string()),
        }
        self
    }

    /// HTTP status for this error
    ///
    /// Upstream statuses that are not valid HTTP codes become 502.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            },
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "bad_request",
            Self::Unauthorized { .. } => "unauthorized",
            Self::Upstream { .. } => "upstream_error",
            Self::Internal { .. } => "internal_error",
        }
    }

    /// Response body, with or without details
    #[must_use]
    pub fn to_body(&self, expose_details: bool) -> ErrorResponse {
        let (message, details) = match self {
            Self::BadRequest { message, details }
            | Self::Unauthorized { message, details }
            | Self::Upstream {
                message, details, ..
            }
            | Self::Internal { message, details } => (message.clone(), details.clone()),
        };

        ErrorResponse {
            error: message,
            code: self.code().to_string(),
            details: details.filter(|_| expose_details),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        (status, Json(self.to_body(should_expose_details()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_hides_details_when_not_exposed() {
        let err = ApiError::internal("Failed to fetch notes").with_details("disk full");

        let dev = err.to_body(true);
        assert_eq!(dev.error, "Failed to fetch notes");
        assert_eq!(dev.code, "internal_error");
        assert_eq!(dev.details.as_deref(), Some("disk full"));

        let prod = err.to_body(false);
        assert_eq!(prod.error, "Failed to fetch notes");
        assert!(prod.details.is_none());
    }

    #[test]
    fn details_are_omitted_from_json_when_absent() {
        let body = ApiError::internal("Weather API key not configured").to_body(true);
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("details").is_none());
    }

    #[test]
    fn upstream_status_is_passed_through() {
        assert_eq!(
            ApiError::upstream(503, "x").status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(ApiError::upstream(429, "x").status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn invalid_upstream_status_becomes_bad_gateway() {
        assert_eq!(ApiError::upstream(42, "x").status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            ApiError::bad_request("invalid input").to_string(),
            "Bad request: invalid input"
        );
    }
}
