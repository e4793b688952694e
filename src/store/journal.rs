//! Journal - append-only activity log
//!
//! Each entry is one line, `[<local timestamp>] <message>`, written for human
//! inspection only and never read back by the agent. Writing is best effort:
//! a journal that cannot be written must never take the loop down, so
//! failures are reported through tracing and otherwise dropped.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;
use tracing::warn;

/// Append-only, timestamped event log
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Create a journal backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one timestamped entry
    pub fn record(&self, message: &str) {
        if let Err(e) = self.try_record(message) {
            warn!("journal write failed: {}", e);
        }
    }

    fn try_record(&self, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let timestamp = Local::now().format("[%Y-%m-%d %H:%M:%S]");
        writeln!(file, "{} {}", timestamp, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_record_appends_timestamped_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("activity.log");
        let journal = Journal::new(&path);

        journal.record("Starting background polling loop");
        journal.record("Executed: whoami");

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('['));
        assert!(lines[0].ends_with("Starting background polling loop"));
        assert!(lines[1].contains("Executed: whoami"));
    }

    #[test]
    fn test_unwritable_path_does_not_panic() {
        let journal = Journal::new("/definitely/not/a/real/dir/activity.log");
        journal.record("this entry is dropped");
    }
}
