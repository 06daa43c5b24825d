//! Notes widget
//!
//! Fetched once on start and whenever the owner changes. After that the
//! board is only changed locally, and only once the server has confirmed
//! the add or toggle.

use std::sync::Arc;

use domain::entities::Note;
use domain::value_objects::{OwnerId, Priority};
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info};

use crate::client::{ClientError, MirrorApi};
use crate::poller::Poller;
use crate::state::WidgetState;

/// Completed notes shown below the active list
pub const MAX_COMPLETED: usize = 3;

const EMPTY_TEXT: &str = "No active notes. Type `add <text>` to create one.";

/// Errors from note interactions
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Notes are not loaded yet")]
    NotLoaded,

    #[error("No note number {0} in that list")]
    NoSuchNote(usize),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// An owner's notes, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesBoard {
    notes: Vec<Note>,
}

impl NotesBoard {
    pub const fn new(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    pub fn insert(&mut self, note: Note) {
        self.notes.insert(0, note);
    }

    /// Replace the note with the same id; unknown ids are ignored
    pub fn apply(&mut self, note: Note) {
        if let Some(existing) = self.notes.iter_mut().find(|n| n.id == note.id) {
            *existing = note;
        }
    }

    pub fn active(&self, limit: usize) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.is_active()).take(limit).collect()
    }

    pub fn completed(&self) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|n| n.is_completed)
            .take(MAX_COMPLETED)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Personal notes with add and toggle
pub struct NotesWidget {
    api: Arc<dyn MirrorApi>,
    owner: Mutex<OwnerId>,
    max_active: usize,
    poller: Poller<NotesBoard>,
}

impl std::fmt::Debug for NotesWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotesWidget")
            .field("owner", &*self.owner.lock())
            .field("max_active", &self.max_active)
            .finish_non_exhaustive()
    }
}

impl NotesWidget {
    pub fn new(api: Arc<dyn MirrorApi>, owner: OwnerId, max_active: usize) -> Self {
        Self {
            api,
            owner: Mutex::new(owner),
            max_active,
            poller: Poller::new("notes"),
        }
    }

    pub fn owner(&self) -> OwnerId {
        self.owner.lock().clone()
    }

    pub const fn poller(&self) -> &Poller<NotesBoard> {
        &self.poller
    }

    /// Fetch the current owner's notes
    pub fn load(&self) {
        let api = Arc::clone(&self.api);
        let owner = self.owner();
        self.poller.start(async move {
            let notes = api.notes(&owner).await?;
            Ok(NotesBoard::new(notes))
        });
    }

    /// Switch owner and refetch
    pub fn set_owner(&self, owner: OwnerId) {
        info!(%owner, "Switching notes owner");
        *self.owner.lock() = owner;
        self.load();
    }

    /// Create a note from user input
    ///
    /// Input is trimmed; blank input is ignored without a request and
    /// returns `Ok(false)`. Fails with [`NotesError::NotLoaded`] while the
    /// board is loading, or if it was reloaded before the server answered.
    pub async fn add(&self, text: &str) -> Result<bool, NotesError> {
        let content = text.trim();
        if content.is_empty() {
            debug!("Ignoring blank note");
            return Ok(false);
        }

        let generation = self.poller.generation();
        if self.poller.with_state(|state| state.ready().is_none()) {
            return Err(NotesError::NotLoaded);
        }
        let owner = self.owner();
        let note = self
            .api
            .create_note(&owner, content, Priority::default())
            .await?;

        if !self
            .poller
            .update_if_current(generation, |board| board.insert(note))
        {
            return Err(NotesError::NotLoaded);
        }
        Ok(true)
    }

    /// Mark the `n`th (1-based) active note as done
    pub async fn complete(&self, n: usize) -> Result<(), NotesError> {
        let max_active = self.max_active;
        self.toggle(n, true, |board| board.active(max_active)).await
    }

    /// Reopen the `n`th (1-based) completed note
    pub async fn reopen(&self, n: usize) -> Result<(), NotesError> {
        self.toggle(n, false, NotesBoard::completed).await
    }

    async fn toggle(
        &self,
        n: usize,
        completed: bool,
        section: impl for<'a> Fn(&'a NotesBoard) -> Vec<&'a Note>,
    ) -> Result<(), NotesError> {
        let generation = self.poller.generation();
        let id = self.poller.with_state(|state| {
            let board = state.ready().ok_or(NotesError::NotLoaded)?;
            n.checked_sub(1)
                .and_then(|i| section(board).get(i).map(|note| note.id))
                .ok_or(NotesError::NoSuchNote(n))
        })?;

        let Some(note) = self.api.set_completed(&id, completed).await? else {
            return Ok(());
        };
        if !self
            .poller
            .update_if_current(generation, |board| board.apply(note))
        {
            return Err(NotesError::NotLoaded);
        }
        Ok(())
    }

    pub fn render(&self) -> Vec<String> {
        self.poller
            .with_state(|state| render(state, self.max_active))
    }
}

fn note_line(n: usize, note: &Note) -> String {
    format!("  {n}. {} {}", note.priority.emoji(), note)
}

fn render(state: &WidgetState<NotesBoard>, max_active: usize) -> Vec<String> {
    let board = match state {
        WidgetState::Loading => return vec!["Loading notes...".to_string()],
        WidgetState::Failed(_) => return vec!["Failed to load notes".to_string()],
        WidgetState::Ready(board) => board,
    };

    let mut lines = vec!["Notes".to_string()];
    let active = board.active(max_active);
    if active.is_empty() {
        lines.push(format!("  {EMPTY_TEXT}"));
    } else {
        lines.extend(active.iter().enumerate().map(|(i, n)| note_line(i + 1, n)));
    }

    let completed = board.completed();
    if !completed.is_empty() {
        lines.push("Completed".to_string());
        lines.extend(
            completed
                .iter()
                .enumerate()
                .map(|(i, n)| format!("  {}. ~~{}~~", i + 1, n.content)),
        );
    }
    lines
}
