//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `flownotes` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct FlownotesCommand {
    args: Vec<String>,
    home: Option<PathBuf>,
}

impl FlownotesCommand {
    /// Creates a new command for the `flownotes` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            home: None,
        }
    }

    /// Sets the `--db` option to point at a database file.
    pub fn db(mut self, path: &Path) -> Self {
        self.args.push("--db".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `HOME` and the XDG directories at `dir` so no real config is read.
    pub fn home(mut self, dir: &Path) -> Self {
        self.home = Some(dir.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("flownotes").expect("Failed to find flownotes binary");
        if let Some(home) = &self.home {
            cmd.env("HOME", home)
                .env("XDG_CONFIG_HOME", home.join("config"))
                .env("XDG_DATA_HOME", home.join("data"));
        }
        cmd.env_remove("RUST_LOG");
        cmd.args(&self.args);
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    /// Runs the command with `--format ids` and parses one id per line.
    pub fn output_ids(self) -> Vec<i64> {
        self.format_ids()
            .output_success()
            .lines()
            .map(|line| line.trim().parse().expect("Output line was not an id"))
            .collect()
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `new` command with a title.
    pub fn new_note(self, title: &str) -> Self {
        self.args(["new", title])
    }

    /// Configures for the `ls` command.
    pub fn ls(self) -> Self {
        self.args(["ls"])
    }

    /// Configures for the `show` command with an ID.
    pub fn show(self, id: i64) -> Self {
        self.args(["show".to_string(), id.to_string()])
    }

    /// Configures for the `pin` command with an ID.
    pub fn pin(self, id: i64) -> Self {
        self.args(["pin".to_string(), id.to_string()])
    }

    /// Configures for the `rm` command with an ID.
    pub fn rm(self, id: i64) -> Self {
        self.args(["rm".to_string(), id.to_string()])
    }

    /// Configures for the `folders` command.
    pub fn folders(self) -> Self {
        self.args(["folders"])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format ids` to the command.
    pub fn format_ids(self) -> Self {
        self.args(["--format", "ids"])
    }
}

impl Default for FlownotesCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_command_runs_binary() {
        FlownotesCommand::new().args(["--help"]).assert().success();
    }

    #[test]
    fn test_command_with_db() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.db");
        let cmd = FlownotesCommand::new().db(&path);
        let args = cmd.get_args();
        assert_eq!(args[0], "--db");
        assert_eq!(args[1], path.to_string_lossy());
    }

    #[test]
    fn test_command_shortcuts() {
        let cmd = FlownotesCommand::new().ls().format_json();
        let args = cmd.get_args();
        assert!(args.contains(&"ls".to_string()));
        assert!(args.contains(&"--format".to_string()));
        assert!(args.contains(&"json".to_string()));
    }
}
