//! Note owner identifier
//!
//! An opaque string naming whose notes a record belongs to. Nothing
//! authenticates it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Owner used when a request does not name one
pub const DEFAULT_OWNER: &str = "default-user";

/// Opaque owner identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(String);

impl OwnerId {
    /// Create an owner ID, falling back to the default owner for blank input
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::default()
        } else {
            Self(value)
        }
    }

    /// Resolve an optional request parameter into an owner ID
    #[must_use]
    pub fn from_optional(value: Option<&str>) -> Self {
        value.map_or_else(Self::default, Self::new)
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is the placeholder owner
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.0 == DEFAULT_OWNER
    }
}

impl Default for OwnerId {
    fn default() -> Self {
        Self(DEFAULT_OWNER.to_string())
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OwnerId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
