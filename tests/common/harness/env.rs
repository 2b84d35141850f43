//! Isolated test environment with temp directory.

use super::FlownotesCommand;
use flownotes::domain::{Note, NoteId};
use flownotes::store::{NoteRepository, SqliteNotes};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary database and home directory.
///
/// Everything lives in one temp directory that is removed on drop.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the temp directory used as `HOME`.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the database the CLI is pointed at.
    pub fn db_path(&self) -> PathBuf {
        self.root.join("notes.db")
    }

    /// Stores a note directly through the repository and returns its id.
    pub fn add_note(&self, note: &Note) -> NoteId {
        let mut repo = SqliteNotes::open(&self.db_path()).expect("Failed to open test database");
        repo.upsert(note).expect("Failed to store test note")
    }

    /// Reads every stored note in canonical order.
    pub fn stored_notes(&self) -> Vec<Note> {
        let repo = SqliteNotes::open(&self.db_path()).expect("Failed to open test database");
        repo.list_all().expect("Failed to list notes")
    }

    /// Writes `config.toml` where the CLI looks for it.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.root.join("config").join("flownotes");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("Failed to write config");
        path
    }

    /// Creates a command configured for this test environment.
    pub fn cmd(&self) -> FlownotesCommand {
        FlownotesCommand::new().home(&self.root).db(&self.db_path())
    }

    /// Creates a command that uses the config file instead of `--db`.
    pub fn cmd_without_db(&self) -> FlownotesCommand {
        FlownotesCommand::new().home(&self.root)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_assigns_ids() {
        let env = TestEnv::new();
        let first = env.add_note(&Note::new("First", ""));
        let second = env.add_note(&Note::new("Second", ""));

        assert!(first.is_assigned());
        assert!(second > first);
        assert_eq!(env.stored_notes().len(), 2);
    }

    #[test]
    fn test_env_command_targets_db() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], env.db_path().to_string_lossy());
    }
}
