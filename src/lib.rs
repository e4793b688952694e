//! Vigil - Background Command-Polling Agent
//!
//! A small agent that periodically fetches a plain-text command list from a
//! remote HTTP(S) or FTP source, executes any commands it has not run before
//! through the system shell, and records executed commands so they are never
//! repeated.
//!
//! # Architecture
//!
//! - **Core**: Configuration, paths, and error handling
//! - **Source**: Command source abstraction with HTTP and FTP implementations
//! - **Exec**: Shell interpreter invocation
//! - **Store**: Run history and the human-readable journal
//! - **Agent**: The poll/diff/execute/persist loop

pub mod agent;
pub mod core;
pub mod exec;
pub mod source;
pub mod store;

// Re-export commonly used items
pub use crate::agent::Agent;
pub use crate::core::{AgentPaths, Config, Result, VigilError};
