//! Agent module - the poll/diff/execute/persist loop

pub mod runner;

pub use runner::{Agent, IterationReport};
