//! NoteRepository trait and error types.

use crate::domain::{Note, NoteId};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
///
/// A missing note is not an error: lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A stored row could not be turned back into a note.
    #[error("corrupt row: {0}")]
    Corrupt(String),

    /// The database was written by a newer schema than this build understands.
    #[error("schema mismatch: database is at version {found}, supported up to {supported}")]
    SchemaMismatch { found: i64, supported: i64 },

    /// A storage worker task panicked or was shut down.
    #[error("storage worker failed: {0}")]
    Worker(String),

    /// A previous operation panicked while holding the connection.
    #[error("storage connection poisoned by an earlier failure")]
    Poisoned,

    /// Some deletions of a folder-wide delete failed. Earlier deletions stay applied.
    #[error("deleting folder '{folder}' removed {} note(s) but failed for {failed:?}", deleted.len())]
    PartialBulkFailure {
        folder: String,
        deleted: Vec<NoteId>,
        failed: Vec<NoteId>,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A folder value with the number of notes that carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FolderCount {
    pub folder: String,
    pub count: usize,
}

/// Synchronous data-access contract for the notes table.
///
/// Implementations own the persisted table; callers only ever hold copies.
pub trait NoteRepository {
    /// Inserts a new note or fully replaces the row sharing its id.
    ///
    /// A note whose id is unassigned, or assigned but not present, is
    /// inserted under a freshly issued id. Returns the id of the stored row.
    fn upsert(&mut self, note: &Note) -> StoreResult<NoteId>;

    /// Removes the note with the given id.
    ///
    /// Returns `true` if a row was removed. Removing an absent id is a no-op.
    fn delete(&mut self, id: NoteId) -> StoreResult<bool>;

    /// Looks up a note by id.
    fn get(&self, id: NoteId) -> StoreResult<Option<Note>>;

    /// Lists every note: pinned first, then folder ascending, then newest id first.
    fn list_all(&self) -> StoreResult<Vec<Note>>;

    /// Returns the number of stored notes.
    fn count(&self) -> StoreResult<usize>;

    /// Lists distinct folder values with their note counts, ascending.
    fn folders(&self) -> StoreResult<Vec<FolderCount>>;

    /// Returns a counter that moves whenever another connection commits.
    ///
    /// `None` means the backend cannot see outside writes, and external
    /// change watching is unavailable.
    fn external_change_counter(&self) -> StoreResult<Option<i64>> {
        Ok(None)
    }
}
