//! Notes service
//!
//! List, create and complete notes for an owner. There is no ownership
//! check on completion: any caller may toggle any note by id.

use std::{fmt, sync::Arc};

use domain::entities::Note;
use domain::value_objects::{NoteId, OwnerId, Priority};
use tracing::{debug, info, instrument};

use crate::{error::ApplicationError, ports::NoteStore};

/// Service for managing notes
#[derive(Clone)]
pub struct NotesService {
    store: Arc<dyn NoteStore>,
}

impl fmt::Debug for NotesService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotesService").finish_non_exhaustive()
    }
}

impl NotesService {
    /// Create a new notes service
    #[must_use]
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// All notes for `owner`, newest first
    #[instrument(skip(self), fields(owner = %owner))]
    pub async fn list(&self, owner: &OwnerId) -> Result<Vec<Note>, ApplicationError> {
        let notes = self.store.find_by_owner(owner).await?;
        debug!(count = notes.len(), "Listed notes");
        Ok(notes)
    }

    /// Create a note
    ///
    /// # Errors
    ///
    /// Returns a domain validation error for empty content, or the store's
    /// error if the insert fails.
    #[instrument(skip(self, content), fields(owner = %owner, priority = %priority))]
    pub async fn create(
        &self,
        owner: OwnerId,
        content: &str,
        priority: Priority,
    ) -> Result<Note, ApplicationError> {
        let note = Note::new(owner, content, priority)?;
        self.store.insert(&note).await?;

        info!(id = %note.id, "Note created");
        Ok(note)
    }

    /// Set a note's completion flag
    ///
    /// Returns `None` when no note has this id. A malformed id is an error.
    #[instrument(skip(self))]
    pub async fn set_completed(
        &self,
        id: &str,
        completed: bool,
    ) -> Result<Option<Note>, ApplicationError> {
        let id = NoteId::parse(id)?;
        let note = self.store.set_completed(&id, completed).await?;

        match &note {
            Some(_) => debug!(%id, completed, "Note updated"),
            None => debug!(%id, "No note with this id"),
        }
        Ok(note)
    }

    /// Whether the note store is reachable
    pub async fn is_store_healthy(&self) -> bool {
        self.store.is_healthy().await
    }
}
