//! SQLite schema for the notes table.

use rusqlite::Connection;

use crate::store::{StoreError, StoreResult};

/// Schema version written to `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

/// Creates the notes table and its listing index.
///
/// Idempotent: calling it on an initialized database changes nothing.
/// `AUTOINCREMENT` keeps issued ids strictly increasing and never reused,
/// so ordering by id descending lists the newest notes first.
///
/// # Errors
///
/// Returns `StoreError::SchemaMismatch` if the database was written by a
/// newer schema version.
pub fn create_schema(conn: &Connection) -> StoreResult<()> {
    let found = get_schema_version(conn)?;
    if found > SCHEMA_VERSION {
        return Err(StoreError::SchemaMismatch {
            found,
            supported: SCHEMA_VERSION,
        });
    }

    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS notes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL DEFAULT '',
            content TEXT NOT NULL DEFAULT '',
            folder TEXT NOT NULL DEFAULT '',
            color_hex TEXT NOT NULL DEFAULT '#FFFFFF',
            is_highlighted INTEGER NOT NULL DEFAULT 0,
            pinned INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_notes_listing ON notes(pinned DESC, folder ASC, id DESC);",
    )?;

    if found < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}

/// Returns the schema version recorded in the database (0 for a fresh file).
pub fn get_schema_version(conn: &Connection) -> rusqlite::Result<i64> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}
