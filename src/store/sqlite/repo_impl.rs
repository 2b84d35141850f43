//! NoteRepository trait implementation for SqliteNotes.

use super::SqliteNotes;
use crate::domain::{ColorHex, Note, NoteId};
use crate::store::{FolderCount, NoteRepository, StoreError, StoreResult};
use rusqlite::{OptionalExtension, Row, params};
use tracing::debug;

const SELECT_COLUMNS: &str =
    "SELECT id, title, content, folder, color_hex, is_highlighted, pinned FROM notes";

/// Raw column values of one `notes` row.
type RawNote = (i64, String, String, String, String, bool, bool);

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawNote> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

fn into_note(raw: RawNote) -> StoreResult<Note> {
    let (id, title, content, folder, color_str, is_highlighted, pinned) = raw;
    let color = ColorHex::new(&color_str)
        .map_err(|e| StoreError::Corrupt(format!("note {}: {}", id, e)))?;

    Ok(Note::builder(title)
        .id(NoteId::new(id))
        .content(content)
        .folder(folder)
        .color(color)
        .highlighted(is_highlighted)
        .pinned(pinned)
        .build())
}

impl NoteRepository for SqliteNotes {
    fn upsert(&mut self, note: &Note) -> StoreResult<NoteId> {
        let tx = self.transaction()?;

        if note.id().is_assigned() {
            let replaced = tx.execute(
                "UPDATE notes SET
                     title = ?1,
                     content = ?2,
                     folder = ?3,
                     color_hex = ?4,
                     is_highlighted = ?5,
                     pinned = ?6
                 WHERE id = ?7",
                params![
                    note.title(),
                    note.content(),
                    note.folder(),
                    note.color_hex().as_str(),
                    note.is_highlighted(),
                    note.pinned(),
                    note.id().get(),
                ],
            )?;

            if replaced > 0 {
                tx.commit()?;
                debug!(id = %note.id(), "replaced note");
                return Ok(note.id());
            }
        }

        tx.execute(
            "INSERT INTO notes (title, content, folder, color_hex, is_highlighted, pinned)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                note.title(),
                note.content(),
                note.folder(),
                note.color_hex().as_str(),
                note.is_highlighted(),
                note.pinned(),
            ],
        )?;
        let id = NoteId::new(tx.last_insert_rowid());
        tx.commit()?;

        debug!(%id, requested = %note.id(), "inserted note");
        Ok(id)
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<bool> {
        if !id.is_assigned() {
            return Ok(false);
        }
        let rows = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?", [id.get()])?;
        debug!(%id, removed = rows > 0, "deleted note");
        Ok(rows > 0)
    }

    fn get(&self, id: NoteId) -> StoreResult<Option<Note>> {
        if !id.is_assigned() {
            return Ok(None);
        }

        let raw = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?", SELECT_COLUMNS),
                [id.get()],
                read_row,
            )
            .optional()?;

        raw.map(into_note).transpose()
    }

    fn list_all(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{} ORDER BY pinned DESC, folder ASC, id DESC",
            SELECT_COLUMNS
        ))?;

        let rows = stmt
            .query_map([], read_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter().map(into_note).collect()
    }

    fn count(&self) -> StoreResult<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM notes", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn folders(&self) -> StoreResult<Vec<FolderCount>> {
        let mut stmt = self.conn.prepare(
            "SELECT folder, COUNT(*) FROM notes GROUP BY folder ORDER BY folder ASC",
        )?;

        let folders = stmt
            .query_map([], |row| {
                Ok(FolderCount {
                    folder: row.get(0)?,
                    count: row.get::<_, i64>(1)? as usize,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(folders)
    }

    fn external_change_counter(&self) -> StoreResult<Option<i64>> {
        self.data_version().map(Some)
    }
}
