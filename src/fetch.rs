//! Page fetcher for mhlw-rss.
//!
//! This module fetches a target page over HTTPS and hands back its HTML
//! as text. The MHLW pages are served as UTF-8; any invalid byte
//! sequence in the body is repaired with a replacement character rather
//! than surfaced as an error.

use std::time::Duration;

use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Client;

use crate::config::FetchConfig;
use crate::{MhlwRssError, Result};

/// Page fetcher wrapping a configured HTTP client.
pub struct PageFetcher {
    client: Client,
    accept_language: String,
}

impl PageFetcher {
    /// Create a new fetcher from the given configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.total_timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| MhlwRssError::Fetch(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            accept_language: config.accept_language.clone(),
        })
    }

    /// Fetch the page at `url` and return its body as UTF-8 text.
    ///
    /// Any non-success HTTP status is an error; the run is expected to
    /// abort on it. Decoding never fails: invalid UTF-8 byte sequences
    /// are replaced with U+FFFD.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT_LANGUAGE, &self.accept_language)
            .send()
            .await
            .map_err(|e| MhlwRssError::Fetch(format!("failed to fetch {}: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MhlwRssError::Fetch(format!(
                "HTTP {} when fetching {}",
                status, url
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| MhlwRssError::Fetch(format!("failed to read response: {}", e)))?;

        Ok(decode_utf8_lossy(&bytes))
    }
}

/// Decode a response body as UTF-8, substituting replacement characters
/// for invalid sequences.
fn decode_utf8_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
