//! Search API client

use super::models::SearchResponse;
use super::traits::{Lookup, MentionSource};
use crate::config::ApiSettings;
use crate::error::{Error, Result};
use crate::network::HttpClient;
use anyhow::Context;
use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Client for the full-text search API
pub struct SearchClient {
    http: HttpClient,
    base_url: Url,
    index: String,
    max_attempts: u32,
    retry_backoff: Duration,
}

impl SearchClient {
    /// Build the client from settings
    ///
    /// Fails up front if the endpoint is not a valid URL or the HTTP
    /// transport cannot be initialized.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url).map_err(|source| Error::InvalidApiUrl {
            url: settings.base_url.clone(),
            source,
        })?;

        Ok(Self {
            http: HttpClient::with_settings(settings)?,
            base_url,
            index: settings.index.clone(),
            max_attempts: settings.max_attempts.max(1),
            retry_backoff: settings.retry_backoff(),
        })
    }

    /// URL for an exact-phrase query on `name`
    pub fn query_url(&self, name: &str) -> String {
        let phrase = format!("\"{}\"", name);
        let separator = if self.base_url.query().is_some() { '&' } else { '?' };

        format!(
            "{}{}q={}&indexes={}",
            self.base_url,
            separator,
            urlencoding::encode(&phrase),
            urlencoding::encode(&self.index)
        )
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// One attempt; any transport, status or decoding problem is an error
    async fn fetch(&self, url: &str) -> anyhow::Result<Lookup> {
        let response = self.http.get(url).await?;

        if !response.is_success() {
            return Err(anyhow::anyhow!("HTTP error: {}", response.status));
        }

        let body: SearchResponse = response
            .json()
            .context("response body is not valid JSON")?;

        Ok(body.into_lookup())
    }
}

#[async_trait]
impl MentionSource for SearchClient {
    async fn lookup(&self, name: &str) -> Lookup {
        let url = self.query_url(name);

        match retry(name, self.max_attempts, self.retry_backoff, || self.fetch(&url)).await {
            Ok(lookup) => lookup,
            Err(e) => {
                warn!("API request failed for '{}': {:#}", name, e);
                Lookup::failed(format!("{:#}", e))
            }
        }
    }
}

/// Run `attempt` up to `max_attempts` times, pausing `backoff` between tries
///
/// There is no pause after the final attempt.
async fn retry<T, F, Fut>(
    name: &str,
    max_attempts: u32,
    backoff: Duration,
    mut attempt: F,
) -> anyhow::Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = anyhow::Result<T>>,
{
    let mut tries = 1;

    loop {
        match attempt().await {
            Ok(value) => return Ok(value),
            Err(e) if tries < max_attempts => {
                debug!(
                    "Attempt {}/{} for '{}' failed: {:#}",
                    tries, max_attempts, name, e
                );
                tokio::time::sleep(backoff).await;
                tries += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
