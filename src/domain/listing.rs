//! View-side helpers over a note snapshot: search, folder grouping, pinned strip.
//!
//! The store already emits notes in canonical order (pinned, folder, newest).
//! These functions only reshape a snapshot for display.

use crate::domain::Note;
use std::collections::BTreeMap;

/// Label shown for notes without a folder.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Returns true if `note` matches `query`.
///
/// Matching is a case-insensitive substring test against title, content
/// and folder. A blank query matches every note; otherwise the query is
/// matched as typed, surrounding whitespace included.
pub fn matches_query(note: &Note, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [note.title(), note.content(), note.folder()]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filters notes by [`matches_query`], keeping the input order.
pub fn filter_notes<'a>(notes: &'a [Note], query: &str) -> Vec<&'a Note> {
    notes.iter().filter(|n| matches_query(n, query)).collect()
}

/// Returns the display label for a folder value.
pub fn folder_label(folder: &str) -> &str {
    if folder.trim().is_empty() {
        UNCATEGORIZED
    } else {
        folder
    }
}

/// Groups notes by folder label.
///
/// Groups iterate in ascending label order. Inside a group, pinned notes
/// come first, then notes are ordered by title.
pub fn group_by_folder<'a, I>(notes: I) -> BTreeMap<String, Vec<&'a Note>>
where
    I: IntoIterator<Item = &'a Note>,
{
    let mut groups: BTreeMap<String, Vec<&'a Note>> = BTreeMap::new();
    for note in notes {
        groups
            .entry(folder_label(note.folder()).to_string())
            .or_default()
            .push(note);
    }
    for group in groups.values_mut() {
        group.sort_by(|a, b| {
            b.pinned()
                .cmp(&a.pinned())
                .then_with(|| a.title().cmp(b.title()))
        });
    }
    groups
}

/// Returns the pinned notes, keeping the input order.
pub fn pinned_notes<'a, I>(notes: I) -> Vec<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes.into_iter().filter(|n| n.pinned()).collect()
}

/// Returns the notes whose folder equals `folder` exactly.
pub fn notes_in_folder<'a>(notes: &'a [Note], folder: &str) -> Vec<&'a Note> {
    notes.iter().filter(|n| n.folder() == folder).collect()
}
