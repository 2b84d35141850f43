//! Delete command handlers.

use anyhow::{Context, Result};

use super::require_note;
use crate::cli::{NoteArgs, RmFolderArgs};
use crate::domain::listing::folder_label;
use crate::store::NoteStore;

pub async fn handle_rm(args: &NoteArgs, store: &NoteStore) -> Result<()> {
    let note = require_note(store, args.note).await?;

    store
        .delete(&note)
        .await
        .with_context(|| format!("failed to delete note {}", note.id()))?;

    println!("Deleted: {}", note);
    Ok(())
}

pub async fn handle_rm_folder(args: &RmFolderArgs, store: &NoteStore) -> Result<()> {
    let deleted = store
        .delete_folder(&args.folder)
        .await
        .with_context(|| format!("failed to delete folder '{}'", args.folder))?;

    println!(
        "Deleted {} note(s) from '{}'",
        deleted.len(),
        folder_label(&args.folder)
    );
    Ok(())
}
