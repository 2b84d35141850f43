//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::NoteId;
use output::OutputFormat;

/// flownotes - short notes in folders, with colors and pins
#[derive(Parser, Debug)]
#[command(name = "flownotes", version, about, long_about = None)]
pub struct Cli {
    /// Database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new note
    New(NewArgs),

    /// List notes grouped by folder
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note
    Show(ShowArgs),

    /// Change a note's title, content, folder or color
    Edit(EditArgs),

    /// Pin a note so it is listed first
    Pin(NoteArgs),

    /// Unpin a note
    Unpin(NoteArgs),

    /// Toggle a note's highlight
    Highlight(NoteArgs),

    /// Delete a note
    Rm(NoteArgs),

    /// Delete every note in a folder
    #[command(name = "rm-folder")]
    RmFolder(RmFolderArgs),

    /// List folders with note counts
    Folders(FoldersArgs),

    /// List the color palette
    Colors,

    /// Print the note list every time it changes
    Watch(WatchArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    #[arg(default_value = "")]
    pub title: String,

    /// Note body
    #[arg(short, long, default_value = "")]
    pub content: String,

    /// Folder to file the note under
    #[arg(short = 'F', long, default_value = "")]
    pub folder: String,

    /// Palette color name or #RRGGBB
    #[arg(short = 'C', long)]
    pub color: Option<String>,

    /// Highlight the note
    #[arg(long)]
    pub highlight: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only notes in this folder (exact match)
    #[arg(short = 'F', long)]
    pub folder: Option<String>,

    /// Only notes whose title, content or folder contain this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub note: NoteId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note ID
    pub note: NoteId,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New body
    #[arg(short, long)]
    pub content: Option<String>,

    /// New folder (empty string moves the note to uncategorized)
    #[arg(short = 'F', long)]
    pub folder: Option<String>,

    /// New color: palette name or #RRGGBB
    #[arg(short = 'C', long)]
    pub color: Option<String>,
}

/// Arguments for commands that act on a single note
#[derive(Parser, Debug)]
pub struct NoteArgs {
    /// Note ID
    pub note: NoteId,
}

/// Arguments for the `rm-folder` command
#[derive(Parser, Debug)]
pub struct RmFolderArgs {
    /// Folder name (exact match)
    pub folder: String,
}

/// Arguments for the `folders` command
#[derive(Parser, Debug)]
pub struct FoldersArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `watch` command
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Stop after this many snapshots (the first one is the current list)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// How often to check for changes made by other processes, in milliseconds
    #[arg(
        long = "interval",
        default_value_t = 500,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval_ms: u64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
