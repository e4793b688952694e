//! Run history - the set of commands already executed
//!
//! Persisted as one command string per line, appended after every iteration
//! that executed something. The file is re-read in full at the start of each
//! iteration; membership is checked against a set built from it, so duplicate
//! lines on disk are harmless. The file only ever grows.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::core::{Result, VigilError};

/// Append-only line store of executed command strings
pub struct RunHistory {
    path: PathBuf,
}

impl RunHistory {
    /// Create a history backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the full history as a set
    ///
    /// A missing file is an empty history, not an error.
    pub fn load(&self) -> Result<HashSet<String>> {
        if !self.path.exists() {
            return Ok(HashSet::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| VigilError::history(format!("Failed to read run history: {}", e)))?;

        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Append a batch of commands, one per line
    pub fn append(&self, commands: &[String]) -> Result<()> {
        if commands.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| VigilError::history(format!("Failed to open run history: {}", e)))?;

        for command in commands {
            writeln!(file, "{}", command)
                .map_err(|e| VigilError::history(format!("Failed to append run history: {}", e)))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn history_in(dir: &TempDir) -> RunHistory {
        RunHistory::new(dir.path().join("commands_run.txt"))
    }

    fn batch(commands: &[&str]) -> Vec<String> {
        commands.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_missing_file_is_empty_history() {
        let dir = TempDir::new().unwrap();
        assert!(history_in(&dir).load().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);

        history.append(&batch(&["whoami", "ipconfig"])).unwrap();

        let known = history.load().unwrap();
        assert_eq!(known.len(), 2);
        assert!(known.contains("whoami"));
        assert!(known.contains("ipconfig"));
    }

    #[test]
    fn test_append_preserves_prior_lines() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);

        history.append(&batch(&["one"])).unwrap();
        history.append(&batch(&["X", "Y"])).unwrap();

        let content = fs::read_to_string(dir.path().join("commands_run.txt")).unwrap();
        assert_eq!(content, "one\nX\nY\n");
    }

    #[test]
    fn test_duplicate_lines_collapse_on_load() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);

        history.append(&batch(&["a", "a"])).unwrap();
        history.append(&batch(&["a"])).unwrap();

        assert_eq!(history.load().unwrap().len(), 1);
    }

    #[test]
    fn test_unreadable_path_is_a_history_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("commands_run.txt")).unwrap();
        let history = history_in(&dir);

        assert!(matches!(
            history.load().unwrap_err(),
            crate::core::VigilError::History(_)
        ));
        assert!(matches!(
            history.append(&batch(&["x"])).unwrap_err(),
            crate::core::VigilError::History(_)
        ));
    }

    #[test]
    fn test_empty_batch_does_not_create_file() {
        let dir = TempDir::new().unwrap();
        let history = history_in(&dir);

        history.append(&[]).unwrap();
        assert!(!dir.path().join("commands_run.txt").exists());
    }
}
