//! New note command handler.

use anyhow::{Context, Result, bail};

use crate::cli::NewArgs;
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat};
use crate::domain::Note;
use crate::store::NoteStore;

/// Builds an unsaved note from the given arguments (pure function, no I/O).
///
/// New notes always start unpinned.
///
/// # Errors
///
/// Returns an error if:
/// - Both title and content are blank
/// - The color is neither a palette name nor `#RRGGBB`
pub fn build_new_note(args: &NewArgs, config: &Config) -> Result<Note> {
    let color = config.new_note_color(args.color.as_deref())?;

    let note = Note::builder(args.title.as_str())
        .content(args.content.as_str())
        .folder(args.folder.as_str())
        .color(color)
        .highlighted(args.highlight)
        .build();

    if note.is_blank() {
        bail!("note is empty: give it a title or some content");
    }

    Ok(note)
}

pub async fn handle_new(args: &NewArgs, store: &NoteStore, config: &Config) -> Result<()> {
    let note = build_new_note(args, config)?;

    let id = store
        .upsert(note.clone())
        .await
        .with_context(|| "failed to save note")?;
    let saved = note.with_id(id);

    match args.format {
        OutputFormat::Human => println!("Created: {}", saved),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&Output::new(&saved))?),
        OutputFormat::Ids => println!("{}", id),
    }

    Ok(())
}
