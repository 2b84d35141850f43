//! Connection management for SqliteNotes.

use super::SqliteNotes;
use super::transaction::Transaction;
use crate::store::{StoreError, StoreResult, create_schema};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tracing::debug;

impl SqliteNotes {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an in-memory database with the notes schema.
    ///
    /// Contents vanish when the value is dropped. Used by tests and demos.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates a database at the given path.
    ///
    /// Creates parent directories if they don't exist and initializes the
    /// schema on a new file.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        create_schema(&conn)?;
        debug!(path = %path.display(), "opened notes database");
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Returns SQLite's `data_version` counter.
    ///
    /// The value changes whenever another connection commits to the same
    /// database file. Commits made through this connection leave it unchanged.
    pub fn data_version(&self) -> StoreResult<i64> {
        Ok(self
            .conn
            .query_row("PRAGMA data_version", [], |row| row.get(0))?)
    }

    /// Begins a new transaction.
    ///
    /// The transaction rolls back on drop unless `commit()` is called.
    pub fn transaction(&mut self) -> StoreResult<Transaction<'_>> {
        self.conn.execute_batch("BEGIN IMMEDIATE")?;
        Ok(Transaction::new(&self.conn))
    }
}
