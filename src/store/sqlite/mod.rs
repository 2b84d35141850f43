//! SQLite-backed notes table.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::Transaction;

/// SQLite-backed implementation of [`NoteRepository`](crate::store::NoteRepository).
///
/// Owns the database connection. Not `Sync`; the async [`NoteStore`](crate::store::NoteStore)
/// serializes access to it.
pub struct SqliteNotes {
    pub(crate) conn: Connection,
}
