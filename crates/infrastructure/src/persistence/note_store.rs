//! SQLite-based note persistence

use std::str::FromStr;
use std::sync::Arc;

use application::{error::ApplicationError, ports::NoteStore};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use domain::entities::Note;
use domain::value_objects::{NoteId, OwnerId, Priority};
use rusqlite::{OptionalExtension, Row, params, types::Type};
use tokio::task;
use tracing::{debug, instrument, warn};

use super::connection::ConnectionPool;

const NOTE_COLUMNS: &str =
    "id, user_id, content, priority, is_completed, created_at, updated_at";

/// SQLite-based note store
#[derive(Debug, Clone)]
pub struct SqliteNoteStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteNoteStore {
    /// Create a new SQLite note store
    #[must_use]
    pub const fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

fn storage_error(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Storage(e.to_string())
}

/// Fixed-width RFC 3339 so that text ordering matches time ordering
fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn conversion_error(
    idx: usize,
    e: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

fn parse_timestamp(idx: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

fn row_to_note(row: &Row<'_>) -> rusqlite::Result<Note> {
    let id: String = row.get(0)?;
    let user_id: String = row.get(1)?;
    let priority: String = row.get(3)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Note {
        id: NoteId::parse(&id).map_err(|e| conversion_error(0, e))?,
        user_id: OwnerId::new(user_id),
        content: row.get(2)?,
        priority: Priority::from_str(&priority).map_err(|e| conversion_error(3, e))?,
        is_completed: row.get(4)?,
        created_at: parse_timestamp(5, &created_at)?,
        updated_at: parse_timestamp(6, &updated_at)?,
    })
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    #[instrument(skip(self), fields(owner = %owner))]
    async fn find_by_owner(&self, owner: &OwnerId) -> Result<Vec<Note>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let owner = owner.as_str().to_string();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(storage_error)?;

            let mut stmt = conn
                .prepare(&format!(
                    "SELECT {NOTE_COLUMNS} FROM notes
                     WHERE user_id = ?1
                     ORDER BY created_at DESC, rowid DESC"
                ))
                .map_err(storage_error)?;

            let notes = stmt
                .query_map([&owner], row_to_note)
                .map_err(storage_error)?
                .collect::<Result<Vec<_>, _>>()
                .map_err(storage_error)?;

            debug!(count = notes.len(), "Loaded notes");
            Ok(notes)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self, note), fields(note_id = %note.id))]
    async fn insert(&self, note: &Note) -> Result<(), ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let note = note.clone();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(storage_error)?;

            conn.execute(
                "INSERT INTO notes (
                    id, user_id, content, priority, is_completed, created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    note.id.to_string(),
                    note.user_id.as_str(),
                    note.content,
                    note.priority.as_str(),
                    note.is_completed,
                    format_timestamp(&note.created_at),
                    format_timestamp(&note.updated_at),
                ],
            )
            .map_err(storage_error)?;

            debug!("Saved note");
            Ok(())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self), fields(note_id = %id))]
    async fn set_completed(
        &self,
        id: &NoteId,
        completed: bool,
    ) -> Result<Option<Note>, ApplicationError> {
        let pool = Arc::clone(&self.pool);
        let id = id.to_string();

        task::spawn_blocking(move || {
            let conn = pool.get().map_err(storage_error)?;

            let changed = conn
                .execute(
                    "UPDATE notes SET is_completed = ?1, updated_at = ?2 WHERE id = ?3",
                    params![completed, format_timestamp(&Utc::now()), id],
                )
                .map_err(storage_error)?;

            if changed == 0 {
                debug!("No note to update");
                return Ok(None);
            }

            conn.query_row(
                &format!("SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?1"),
                [&id],
                row_to_note,
            )
            .optional()
            .map_err(storage_error)
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }

    #[instrument(skip(self))]
    async fn is_healthy(&self) -> bool {
        let pool = Arc::clone(&self.pool);
        let result = task::spawn_blocking(move || {
            pool.get()
                .ok()
                .and_then(|conn| conn.query_row("SELECT 1", [], |row| row.get::<_, i32>(0)).ok())
                .is_some()
        })
        .await;

        match result {
            Ok(healthy) => {
                if !healthy {
                    warn!("Database health check failed: unable to execute query");
                }
                healthy
            },
            Err(e) => {
                warn!(error = %e, "Database health check task failed");
                false
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::persistence::create_pool;

    fn store() -> SqliteNoteStore {
        let pool = create_pool(&DatabaseConfig::in_memory()).unwrap();
        SqliteNoteStore::new(Arc::new(pool))
    }

    #[tokio::test]
    async fn insert_and_find() {
        let store = store();
        let note = Note::new(OwnerId::new("u1"), "buy milk", Priority::Medium).unwrap();
        store.insert(&note).await.unwrap();

        let notes = store.find_by_owner(&OwnerId::new("u1")).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].id, note.id);
        assert_eq!(notes[0].content, "buy milk");
        assert_eq!(notes[0].priority, Priority::Medium);
        assert!(!notes[0].is_completed);
    }

    #[tokio::test]
    async fn owners_are_isolated() {
        let store = store();
        let note = Note::new(OwnerId::new("alice"), "secret", Priority::Low).unwrap();
        store.insert(&note).await.unwrap();

        let notes = store.find_by_owner(&OwnerId::new("bob")).await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn same_timestamp_orders_by_insertion() {
        let store = store();
        let first = Note::new(OwnerId::default(), "first", Priority::Low).unwrap();
        let mut second = Note::new(OwnerId::default(), "second", Priority::Low).unwrap();
        second.created_at = first.created_at;
        second.updated_at = first.updated_at;

        store.insert(&first).await.unwrap();
        store.insert(&second).await.unwrap();

        let notes = store.find_by_owner(&OwnerId::default()).await.unwrap();
        let contents: Vec<_> = notes.iter().map(|n| n.content.as_str()).collect();
        assert_eq!(contents, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn set_completed_updates_flag_and_timestamp() {
        let store = store();
        let note = Note::new(OwnerId::default(), "call mom", Priority::High).unwrap();
        store.insert(&note).await.unwrap();

        let updated = store.set_completed(&note.id, true).await.unwrap().unwrap();
        assert!(updated.is_completed);
        assert_eq!(updated.content, "call mom");
        assert!(updated.updated_at >= updated.created_at);

        let reverted = store.set_completed(&note.id, false).await.unwrap().unwrap();
        assert!(!reverted.is_completed);
    }

    #[tokio::test]
    async fn set_completed_unknown_id_returns_none() {
        let store = store();
        let result = store.set_completed(&NoteId::new(), true).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn healthy_store_reports_healthy() {
        assert!(store().is_healthy().await);
    }

    #[test]
    fn timestamps_are_fixed_width() {
        let a = DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let b = DateTime::parse_from_rfc3339("2026-01-01T00:00:00.5Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(&a).len(), format_timestamp(&b).len());
        assert!(format_timestamp(&a) < format_timestamp(&b));
    }
}
