//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
    /// Plain note ids, one per line
    Ids,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A folder with its display label and note count.
#[derive(Debug, Serialize)]
pub struct FolderListing {
    pub folder: String,
    pub label: String,
    pub count: usize,
}

/// One emission of the live note list.
#[derive(Debug, Serialize)]
pub struct SnapshotListing<'a> {
    pub version: u64,
    pub notes: &'a [Note],
}
