//! Exec module - shell command invocation

pub mod shell;

pub use shell::ShellExecutor;
