//! Edit, pin and highlight command handlers.
//!
//! Every change is a full overwrite: fetch the note, change fields, upsert it back.

use anyhow::{Context, Result, bail};

use super::require_note;
use crate::cli::{EditArgs, NoteArgs};
use crate::domain::{ColorHex, Note};
use crate::store::NoteStore;

/// Field changes requested by `edit`. `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct EditChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub folder: Option<String>,
    pub color: Option<ColorHex>,
}

impl EditChanges {
    /// Parses edit arguments, resolving the color.
    pub fn from_args(args: &EditArgs) -> Result<Self> {
        let color = args
            .color
            .as_deref()
            .map(|value| {
                ColorHex::from_name_or_hex(value)
                    .with_context(|| format!("invalid color '{}'", value))
            })
            .transpose()?;

        Ok(Self {
            title: args.title.clone(),
            content: args.content.clone(),
            folder: args.folder.clone(),
            color,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.folder.is_none()
            && self.color.is_none()
    }
}

/// Applies `changes` to `note`, keeping id and flags.
///
/// # Errors
///
/// Returns an error if nothing would change or the result would be blank.
pub fn apply_edits(note: &Note, changes: EditChanges) -> Result<Note> {
    if changes.is_empty() {
        bail!("nothing to change: pass --title, --content, --folder or --color");
    }

    let mut builder = note.to_builder();
    if let Some(title) = changes.title {
        builder = builder.title(title);
    }
    if let Some(content) = changes.content {
        builder = builder.content(content);
    }
    if let Some(folder) = changes.folder {
        builder = builder.folder(folder);
    }
    if let Some(color) = changes.color {
        builder = builder.color(color);
    }

    let edited = builder.build();
    if edited.is_blank() {
        bail!("note would be empty: keep a title or some content");
    }
    Ok(edited)
}

pub async fn handle_edit(args: &EditArgs, store: &NoteStore) -> Result<()> {
    let changes = EditChanges::from_args(args)?;
    let note = require_note(store, args.note).await?;
    let edited = apply_edits(&note, changes)?;

    store
        .upsert(edited.clone())
        .await
        .with_context(|| format!("failed to save note {}", note.id()))?;

    println!("Updated: {}", edited);
    Ok(())
}

pub async fn handle_pin(args: &NoteArgs, store: &NoteStore, pinned: bool) -> Result<()> {
    let note = require_note(store, args.note).await?;
    let changed = note.pinned() != pinned;

    if changed {
        store
            .upsert(note.clone().with_pinned(pinned))
            .await
            .with_context(|| format!("failed to save note {}", note.id()))?;
    }

    let verb = if pinned { "Pinned" } else { "Unpinned" };
    if changed {
        println!("{}: {}", verb, note);
    } else {
        println!("{} already: {}", verb, note);
    }
    Ok(())
}

pub async fn handle_highlight(args: &NoteArgs, store: &NoteStore) -> Result<()> {
    let note = require_note(store, args.note).await?;
    let highlighted = !note.is_highlighted();

    store
        .upsert(note.clone().with_highlighted(highlighted))
        .await
        .with_context(|| format!("failed to save note {}", note.id()))?;

    let verb = if highlighted { "Highlighted" } else { "Unhighlighted" };
    println!("{}: {}", verb, note);
    Ok(())
}
