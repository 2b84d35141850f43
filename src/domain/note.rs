//! Note entity: a short text note with folder, color and flags.

use crate::domain::{ColorHex, NoteId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A short text note.
///
/// Every field may hold its zero value except `id`, which is either the
/// unassigned sentinel (not stored yet) or an identifier issued by the
/// store. Notes are plain values: edits produce a new `Note` that is
/// written back through the store, replacing the row with the same id.
///
/// # Fields
/// - `id`: store-issued identifier, [`NoteId::UNASSIGNED`] before first save
/// - `title`, `content`: free-form text, may be empty
/// - `folder`: grouping label shared by convention; empty means uncategorized
/// - `color_hex`: display color
/// - `is_highlighted`: presentational flag toggled by the user
/// - `pinned`: pinned notes are listed first
///
/// # Examples
///
/// ```
/// use flownotes::domain::{ColorHex, Note};
///
/// let note = Note::builder("Groceries")
///     .content("Milk, eggs")
///     .folder("Home")
///     .color(ColorHex::new("#FFF9C4").unwrap())
///     .build();
/// assert!(!note.id().is_assigned());
/// assert!(!note.pinned());
///
/// let pinned = note.with_pinned(true);
/// assert!(pinned.pinned());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    id: NoteId,
    title: String,
    content: String,
    folder: String,
    color_hex: ColorHex,
    #[serde(default)]
    is_highlighted: bool,
    #[serde(default)]
    pinned: bool,
}

impl Note {
    /// Creates an unsaved note with the given title and content.
    ///
    /// The note has no folder, the default color, and both flags cleared.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NoteBuilder::new(title).content(content).build()
    }

    /// Creates a builder for an unsaved note.
    pub fn builder(title: impl Into<String>) -> NoteBuilder {
        NoteBuilder::new(title)
    }

    /// Returns a builder pre-filled with this note's fields, id included.
    pub fn to_builder(&self) -> NoteBuilder {
        NoteBuilder {
            id: self.id,
            title: self.title.clone(),
            content: self.content.clone(),
            folder: self.folder.clone(),
            color_hex: self.color_hex.clone(),
            is_highlighted: self.is_highlighted,
            pinned: self.pinned,
        }
    }

    /// Returns the note's identifier.
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's body text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the folder label. Empty means uncategorized.
    pub fn folder(&self) -> &str {
        &self.folder
    }

    /// Returns the display color.
    pub fn color_hex(&self) -> &ColorHex {
        &self.color_hex
    }

    /// Returns whether the note is highlighted.
    pub fn is_highlighted(&self) -> bool {
        self.is_highlighted
    }

    /// Returns whether the note is pinned.
    pub fn pinned(&self) -> bool {
        self.pinned
    }

    /// Returns true if both title and content are blank.
    ///
    /// The editor refuses to save such notes.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }

    /// Returns true if the folder label is blank.
    pub fn is_uncategorized(&self) -> bool {
        self.folder.trim().is_empty()
    }

    /// Returns a copy carrying the given identifier.
    pub fn with_id(mut self, id: NoteId) -> Self {
        self.id = id;
        self
    }

    /// Returns a copy with the pinned flag set to `pinned`.
    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Returns a copy with the highlight flag set to `highlighted`.
    pub fn with_highlighted(mut self, highlighted: bool) -> Self {
        self.is_highlighted = highlighted;
        self
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("content", &self.content)
            .field("folder", &self.folder)
            .field("color_hex", &self.color_hex)
            .field("is_highlighted", &self.is_highlighted)
            .field("pinned", &self.pinned)
            .finish()
    }
}

/// Builder for constructing a Note.
#[derive(Debug, Clone)]
pub struct NoteBuilder {
    id: NoteId,
    title: String,
    content: String,
    folder: String,
    color_hex: ColorHex,
    is_highlighted: bool,
    pinned: bool,
}

impl NoteBuilder {
    fn new(title: impl Into<String>) -> Self {
        Self {
            id: NoteId::UNASSIGNED,
            title: title.into(),
            content: String::new(),
            folder: String::new(),
            color_hex: ColorHex::default(),
            is_highlighted: false,
            pinned: false,
        }
    }

    /// Sets the identifier.
    pub fn id(mut self, id: NoteId) -> Self {
        self.id = id;
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the body text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the folder label.
    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = folder.into();
        self
    }

    /// Sets the display color.
    pub fn color(mut self, color: ColorHex) -> Self {
        self.color_hex = color;
        self
    }

    /// Sets the highlight flag.
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.is_highlighted = highlighted;
        self
    }

    /// Sets the pinned flag.
    pub fn pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Builds the Note. Field values are kept verbatim.
    pub fn build(self) -> Note {
        Note {
            id: self.id,
            title: self.title,
            content: self.content,
            folder: self.folder,
            color_hex: self.color_hex,
            is_highlighted: self.is_highlighted,
            pinned: self.pinned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Note {
        Note::builder("Groceries")
            .content("Milk, eggs")
            .folder("Home")
            .color(ColorHex::new("#FFF9C4").unwrap())
            .build()
    }

    #[test]
    fn new_note_is_unassigned_and_unflagged() {
        let note = Note::new("Title", "Body");
        assert_eq!(note.id(), NoteId::UNASSIGNED);
        assert_eq!(note.folder(), "");
        assert_eq!(note.color_hex(), &ColorHex::default());
        assert!(!note.pinned());
        assert!(!note.is_highlighted());
    }

    #[test]
    fn builder_keeps_fields_verbatim() {
        let note = Note::builder("  padded  ").content("\n").folder(" Work ").build();
        assert_eq!(note.title(), "  padded  ");
        assert_eq!(note.content(), "\n");
        assert_eq!(note.folder(), " Work ");
    }

    #[test]
    fn empty_title_is_allowed() {
        let note = Note::new("", "only content");
        assert_eq!(note.title(), "");
        assert!(!note.is_blank());
    }

    #[test]
    fn blank_when_title_and_content_blank() {
        assert!(Note::new("  ", "\t").is_blank());
        assert!(!Note::new("x", "").is_blank());
    }

    #[test]
    fn uncategorized_when_folder_blank() {
        assert!(Note::new("a", "b").is_uncategorized());
        assert!(Note::builder("a").folder("   ").build().is_uncategorized());
        assert!(!sample().is_uncategorized());
    }

    #[test]
    fn with_methods_change_only_their_field() {
        let note = sample();
        let changed = note
            .clone()
            .with_id(NoteId::new(3))
            .with_pinned(true)
            .with_highlighted(true);

        assert_eq!(changed.id(), NoteId::new(3));
        assert!(changed.pinned());
        assert!(changed.is_highlighted());
        assert_eq!(changed.title(), note.title());
        assert_eq!(changed.content(), note.content());
        assert_eq!(changed.folder(), note.folder());
        assert_eq!(changed.color_hex(), note.color_hex());
    }

    #[test]
    fn to_builder_round_trips() {
        let note = sample().with_id(NoteId::new(9)).with_pinned(true);
        assert_eq!(note.to_builder().build(), note);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let note = sample().with_id(NoteId::new(1));
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["colorHex"], "#FFF9C4");
        assert_eq!(json["isHighlighted"], false);
        assert_eq!(json["pinned"], false);
        assert_eq!(json["folder"], "Home");
    }

    #[test]
    fn deserialize_defaults_missing_id_and_flags() {
        let json = r##"{"title":"t","content":"c","folder":"","colorHex":"#FFFFFF"}"##;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id(), NoteId::UNASSIGNED);
        assert!(!note.pinned());
        assert!(!note.is_highlighted());
    }

    #[test]
    fn display_shows_title_and_id() {
        let note = sample().with_id(NoteId::new(12));
        assert_eq!(note.to_string(), "Groceries [12]");
    }
}
