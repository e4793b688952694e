//! Command source abstraction
//!
//! A command source fetches the current remote command list as plain text.
//! Submodules implement the supported transports (HTTP/HTTPS and FTP); the
//! factory picks one from the configured URL scheme.

pub mod ftp;
pub mod http;

use async_trait::async_trait;
use url::Url;

use crate::core::{Config, Result, VigilError};

pub use ftp::FtpSource;
pub use http::HttpSource;

/// A remote source of shell commands
///
/// One fetch returns the full current command list, post-processed: one
/// command per line, whitespace trimmed, empty lines dropped, order
/// preserved as received.
#[async_trait]
pub trait CommandSource: Send + Sync {
    /// Retrieve the current command list
    async fn fetch(&self) -> Result<Vec<String>>;

    /// Human-readable description of the source, for journal entries
    fn describe(&self) -> String;
}

/// Create a command source based on the configured URL
pub fn source_for(config: &Config) -> Result<Box<dyn CommandSource>> {
    let url = Url::parse(&config.command_url)
        .map_err(|e| VigilError::config(format!("Invalid command_url: {}", e)))?;

    let source: Box<dyn CommandSource> = match url.scheme() {
        "ftp" => Box::new(FtpSource::new(&url)?),
        "http" | "https" => Box::new(HttpSource::new(url, config.fetch_timeout_secs)),
        other => {
            return Err(VigilError::config(format!(
                "Unsupported command_url scheme '{}': expected ftp, http, or https",
                other
            )))
        }
    };

    Ok(source)
}

/// Split a fetched body into commands: trim each line, drop empties,
/// preserve order
pub(crate) fn clean_lines(body: &str) -> Vec<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
