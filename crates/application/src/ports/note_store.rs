//! Note storage port
//!
//! Defines the interface for persisting and querying notes.
//! Adapters in the infrastructure layer implement this port using SQLite.

use async_trait::async_trait;
use domain::entities::Note;
use domain::value_objects::{NoteId, OwnerId};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for note persistence operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes for an owner, newest first
    ///
    /// Notes created at the same instant are ordered by insertion, newest
    /// first.
    async fn find_by_owner(&self, owner: &OwnerId) -> Result<Vec<Note>, ApplicationError>;

    /// Persist a new note
    async fn insert(&self, note: &Note) -> Result<(), ApplicationError>;

    /// Set the completion flag (and refresh `updated_at`)
    ///
    /// Returns the updated note, or `None` if no note has this id.
    async fn set_completed(
        &self,
        id: &NoteId,
        completed: bool,
    ) -> Result<Option<Note>, ApplicationError>;

    /// Whether the backing store answers a trivial query
    async fn is_healthy(&self) -> bool;
}
