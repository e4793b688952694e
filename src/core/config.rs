//! Configuration management for Vigil
//!
//! The agent reads a single JSON file (`config.json`) from its working
//! directory at startup. Only `command_url` is required; tuning fields fall
//! back to defaults and unknown keys are ignored. The configuration is loaded
//! once and never reloaded for the lifetime of the process.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{Result, VigilError};

/// Default seconds between polling iterations
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
/// Default timeout for a single HTTP fetch
const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
/// Default timeout for a single shell command
const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 300;

/// Main configuration for the agent
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// URI of the remote command list (ftp, http, or https)
    pub command_url: String,
    /// Seconds to sleep between iterations
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    /// Timeout for a single fetch of the command list
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
    /// Timeout for a single shell command; a command that exceeds it is
    /// killed and counted as failed
    #[serde(default = "default_command_timeout")]
    pub command_timeout_secs: u64,
    /// Whether commands that failed are still recorded in the run history.
    /// The default matches the historical behavior: a failed command is
    /// never retried.
    #[serde(default = "default_record_failed")]
    pub record_failed_commands: bool,
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_fetch_timeout() -> u64 {
    DEFAULT_FETCH_TIMEOUT_SECS
}

fn default_command_timeout() -> u64 {
    DEFAULT_COMMAND_TIMEOUT_SECS
}

fn default_record_failed() -> bool {
    true
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| VigilError::config(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| VigilError::config(format!("Failed to parse config: {}", e)))?;

        if config.command_url.trim().is_empty() {
            return Err(VigilError::config("'command_url' is empty"));
        }

        Ok(config)
    }
}

/// Explicit set of file paths the agent works with
///
/// Constructed once in `main` from the agent directory and passed to every
/// component that touches the filesystem. Nothing in the crate derives a path
/// from ambient process state.
#[derive(Debug, Clone)]
pub struct AgentPaths {
    /// Directory holding the config, journal, and history files
    base_dir: PathBuf,
}

impl AgentPaths {
    /// Create the path set rooted at the given directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The agent's working directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of the JSON configuration file
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path of the append-only journal file
    pub fn journal_file(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Path of the run-history file
    pub fn history_file(&self) -> PathBuf {
        self.base_dir.join("commands_run.txt")
    }
}
