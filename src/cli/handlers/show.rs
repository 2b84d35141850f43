//! Show command handler.

use anyhow::Result;

use super::require_note;
use crate::cli::ShowArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::listing::folder_label;
use crate::store::NoteStore;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

pub async fn handle_show(args: &ShowArgs, store: &NoteStore) -> Result<()> {
    let note = require_note(store, args.note).await?;

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.title());
            println!();

            let color = match note.color_hex().palette_name() {
                Some(name) => format!("{} ({})", name, note.color_hex()),
                None => note.color_hex().to_string(),
            };
            println!(
                "ID: {}  Folder: {}  Color: {}",
                note.id(),
                folder_label(note.folder()),
                color
            );
            println!(
                "Pinned: {}  Highlighted: {}",
                yes_no(note.pinned()),
                yes_no(note.is_highlighted())
            );
            println!();

            if !note.content().is_empty() {
                println!("{}", note.content());
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&note))?);
        }
        OutputFormat::Ids => println!("{}", note.id()),
    }

    Ok(())
}
