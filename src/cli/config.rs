//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::ColorHex;

/// Fallback cap on blocking storage workers.
const DEFAULT_WORKERS: usize = 4;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Database file
    pub db: Option<PathBuf>,

    /// Maximum number of blocking storage workers
    pub workers: Option<usize>,

    /// Color for new notes: palette name or #RRGGBB
    pub default_color: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/flownotes/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flownotes")
            .join("config.toml")
    }

    /// Resolve the database path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `db` setting
    /// 3. `notes.db` in the platform data directory
    pub fn db_path(&self, cli_db: Option<&PathBuf>) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.db.clone())
            .unwrap_or_else(Self::default_db_path)
    }

    /// Returns the default database location.
    ///
    /// Default: `~/.local/share/flownotes/notes.db`
    pub fn default_db_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("flownotes")
            .join("notes.db")
    }

    /// Number of blocking workers for storage I/O (at least one).
    pub fn workers(&self) -> usize {
        self.workers.unwrap_or(DEFAULT_WORKERS).max(1)
    }

    /// Resolve the color for a new note.
    ///
    /// Precedence order:
    /// 1. CLI `--color` argument
    /// 2. Config file `default_color` setting
    /// 3. White
    pub fn new_note_color(&self, cli_color: Option<&str>) -> Result<ColorHex> {
        match cli_color.or(self.default_color.as_deref()) {
            Some(value) => ColorHex::from_name_or_hex(value)
                .with_context(|| format!("invalid color '{}'", value)),
            None => Ok(ColorHex::default()),
        }
    }
}
