//! Core types: Note, NoteId, ColorHex and listing helpers

mod color;
pub mod listing;
mod note;
mod note_id;

pub use color::{ColorHex, PALETTE, PaletteColor, ParseColorError};
pub use note::{Note, NoteBuilder};
pub use note_id::{NoteId, ParseNoteIdError};
