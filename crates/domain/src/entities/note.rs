//! Note entity - A short personal reminder shown on the mirror

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;
use crate::value_objects::{NoteId, OwnerId, Priority};

/// A personal note
///
/// Content is fixed after creation; only the completion flag changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,
    /// Owner of this note
    pub user_id: OwnerId,
    /// Note text
    pub content: String,
    /// Priority
    #[serde(default)]
    pub priority: Priority,
    /// Completion flag
    #[serde(default)]
    pub is_completed: bool,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// When the note was last changed
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new, incomplete note
    ///
    /// # Errors
    ///
    /// Returns a validation error if `content` is empty.
    pub fn new(
        user_id: OwnerId,
        content: impl Into<String>,
        priority: Priority,
    ) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::ValidationError(
                "content is required".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id: NoteId::new(),
            user_id,
            content,
            priority,
            is_completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set the completion flag
    pub fn set_completed(&mut self, completed: bool) {
        self.is_completed = completed;
        self.updated_at = Utc::now();
    }

    /// Whether the note still needs doing
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_completed
    }
}

impl std::fmt::Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.is_completed { "x" } else { " " };
        write!(f, "[{mark}] {} ({})", self.content, self.priority)
    }
}
