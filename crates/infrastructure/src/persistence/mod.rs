//! Persistence module
//!
//! SQLite-based storage for notes.

pub mod connection;
pub mod migrations;
pub mod note_store;

pub use connection::{ConnectionPool, DatabaseError, create_pool};
pub use note_store::SqliteNoteStore;
