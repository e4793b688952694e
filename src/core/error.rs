//! Custom error types for Vigil
//!
//! Provides a unified error handling system across all modules. Each loop
//! operation (fetch, execute, persist) has its own variant so callers can
//! distinguish recoverable conditions from fatal ones without inspecting
//! message text. Underlying io/serde/transport errors are folded into the
//! owning operation's variant at the call site, because the operation, not
//! the error source, decides how the loop reacts.

use thiserror::Error;

/// Main error type for Vigil operations
#[derive(Error, Debug)]
pub enum VigilError {
    /// Configuration errors (fatal: the loop is never entered)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote fetch errors (recoverable: the iteration proceeds with an
    /// empty command list)
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Shell command execution errors (recoverable: the batch continues)
    #[error("Command execution error: {0}")]
    Execute(String),

    /// Run history read/append errors (recoverable: empty on read, dropped
    /// on write)
    #[error("History error: {0}")]
    History(String),
}

/// Convenience Result type for Vigil operations
pub type Result<T> = std::result::Result<T, VigilError>;

impl VigilError {
    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a fetch error
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create an execution error
    pub fn execute(msg: impl Into<String>) -> Self {
        Self::Execute(msg.into())
    }

    /// Create a history error
    pub fn history(msg: impl Into<String>) -> Self {
        Self::History(msg.into())
    }

    /// Whether this error should terminate the process rather than the
    /// current iteration
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}
