//! HTTP client for fetching a feed document.

use std::time::Duration;

use hourfeed_core::NewsEntry;
use reqwest::Client;

use crate::error::FeedError;
use crate::parse::parse_feed;

/// Fetches and parses feeds. One instance is enough for a whole run.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a client with the given total request timeout and user agent.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, FeedError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and parse the body as RSS or Atom.
    ///
    /// # Errors
    ///
    /// - [`FeedError::Http`] on network failure or a non-2xx status.
    /// - [`FeedError::Parse`] / [`FeedError::NotAFeed`] if the body is not a feed.
    pub async fn fetch_entries(&self, url: &str) -> Result<Vec<NewsEntry>, FeedError> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        let body = response.bytes().await?;

        let entries = parse_feed(&body)?;
        tracing::info!(url, entries = entries.len(), "fetched feed");
        Ok(entries)
    }
}
