//! Command handlers for the CLI.

mod delete;
mod edit;
mod list;
mod new;
mod show;
mod watch;


use anyhow::{Context, Result, anyhow};

use crate::domain::{Note, NoteId};
use crate::store::NoteStore;

// Re-export public items
pub use delete::{handle_rm, handle_rm_folder};
pub use edit::{EditChanges, apply_edits, handle_edit, handle_highlight, handle_pin};
pub use list::{handle_colors, handle_folders, handle_list};
pub use new::{build_new_note, handle_new};
pub use show::handle_show;
pub use watch::handle_watch;

// ===========================================
// Shared Utilities
// ===========================================

/// Fetches a note or fails with a user-facing "not found" error.
pub(crate) async fn require_note(store: &NoteStore, id: NoteId) -> Result<Note> {
    store
        .get(id)
        .await
        .with_context(|| format!("failed to read note {}", id))?
        .ok_or_else(|| anyhow!("note not found: {}", id))
}

/// Formats one note as a listing row: id, flags, title, color.
pub(crate) fn note_row(note: &Note) -> String {
    let flags = format!(
        "{}{}",
        if note.pinned() { 'P' } else { ' ' },
        if note.is_highlighted() { 'H' } else { ' ' }
    );
    let color = note
        .color_hex()
        .palette_name()
        .map(str::to_string)
        .unwrap_or_else(|| note.color_hex().to_string());
    format!(
        "{:>6}  {}  {:<50}  {}",
        note.id(),
        flags,
        truncate_str(display_title(note), 50),
        color
    )
}

/// Title to show for a note; untitled notes fall back to their first content line.
pub(crate) fn display_title(note: &Note) -> &str {
    if !note.title().trim().is_empty() {
        return note.title();
    }
    note.content()
        .lines()
        .find(|line| !line.trim().is_empty())
        .unwrap_or("(untitled)")
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
