//! HTTP(S) command source
//!
//! Fetches the command list with a plain GET. The body must be valid UTF-8;
//! anything else is a fetch error for the current iteration, never a crash.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::{Result, VigilError};
use crate::source::{clean_lines, CommandSource};

/// Command source backed by an HTTP or HTTPS URL
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    /// Create a source for the given URL with a per-request timeout
    pub fn new(url: Url, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, url }
    }
}

#[async_trait::async_trait]
impl CommandSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<String>> {
        let response = self
            .client
            .get(self.url.as_str())
            .send()
            .await
            .map_err(|e| VigilError::fetch(format!("GET {} failed: {}", self.url, e)))?;

        let response = response
            .error_for_status()
            .map_err(|e| VigilError::fetch(format!("GET {} failed: {}", self.url, e)))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| VigilError::fetch(format!("Reading body from {} failed: {}", self.url, e)))?;

        let text = String::from_utf8(body.to_vec())
            .map_err(|e| VigilError::fetch(format!("Body from {} is not UTF-8: {}", self.url, e)))?;

        Ok(clean_lines(&text))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}
