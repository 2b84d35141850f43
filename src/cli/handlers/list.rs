//! List, folders and colors command handlers.

use anyhow::{Context, Result};

use super::{display_title, note_row, truncate_str};
use crate::cli::output::{FolderListing, Output, OutputFormat};
use crate::cli::{FoldersArgs, ListArgs};
use crate::domain::listing::{filter_notes, folder_label, group_by_folder, pinned_notes};
use crate::domain::{Note, PALETTE};
use crate::store::NoteStore;

/// Selects the notes `ls` should show, in store order.
pub(crate) fn select_notes<'a>(notes: &'a [Note], args: &ListArgs) -> Vec<&'a Note> {
    let mut selected = filter_notes(notes, args.search.as_deref().unwrap_or(""));
    if let Some(folder) = &args.folder {
        selected.retain(|n| n.folder() == folder.as_str());
    }
    selected
}

pub async fn handle_list(args: &ListArgs, store: &NoteStore) -> Result<()> {
    let snapshot = store.snapshot();
    let notes = select_notes(snapshot.notes(), args);

    match args.format {
        OutputFormat::Human => print_grouped(&notes),
        OutputFormat::Json => {
            let output = Output::new(&notes);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Ids => {
            for note in &notes {
                println!("{}", note.id());
            }
        }
    }

    Ok(())
}

/// Prints the pinned strip, then one block per folder.
pub(crate) fn print_grouped(notes: &[&Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    let pinned = pinned_notes(notes.iter().copied());
    if !pinned.is_empty() {
        let strip: Vec<String> = pinned
            .iter()
            .map(|n| format!("{} [{}]", truncate_str(display_title(n), 24), n.id()))
            .collect();
        println!("Pinned: {}", strip.join(", "));
        println!();
    }

    for (label, group) in group_by_folder(notes.iter().copied()) {
        println!("{} ({})", label, group.len());
        for note in group {
            println!("{}", note_row(note));
        }
        println!();
    }

    println!("{} note(s)", notes.len());
}

pub async fn handle_folders(args: &FoldersArgs, store: &NoteStore) -> Result<()> {
    let folders = store
        .folders()
        .await
        .with_context(|| "failed to list folders")?;
    let total = store
        .count()
        .await
        .with_context(|| "failed to count notes")?;

    let listings: Vec<FolderListing> = folders
        .into_iter()
        .map(|f| FolderListing {
            label: folder_label(&f.folder).to_string(),
            folder: f.folder,
            count: f.count,
        })
        .collect();

    match args.format {
        OutputFormat::Human => {
            if listings.is_empty() {
                println!("No folders found.");
                return Ok(());
            }
            for listing in &listings {
                println!("{:<30}  {:>5}", truncate_str(&listing.label, 30), listing.count);
            }
            println!();
            println!("{} folder(s), {} note(s)", listings.len(), total);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&listings))?);
        }
        OutputFormat::Ids => {
            for listing in &listings {
                println!("{}", listing.folder);
            }
        }
    }

    Ok(())
}

pub fn handle_colors() -> Result<()> {
    for entry in PALETTE {
        println!("{:<8}  {}", entry.name, entry.hex);
    }
    Ok(())
}
