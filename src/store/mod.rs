//! Store module - the agent's two on-disk stores
//!
//! The run history remembers which commands have executed; the journal is a
//! human-readable trail of what the agent did. Both are append-only text
//! files next to the config.

pub mod history;
pub mod journal;

pub use history::RunHistory;
pub use journal::Journal;
