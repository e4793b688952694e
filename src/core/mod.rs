//! Core module - shared infrastructure for Vigil
//!
//! This module contains configuration, path wiring, and error handling
//! used throughout the application.

pub mod config;
pub mod error;

pub use config::{AgentPaths, Config};
pub use error::{Result, VigilError};
