//! HTTP client for talking to the search API

use crate::config::ApiSettings;
use crate::error::Result;
use anyhow::Context;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper configured from the API settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client from the API settings
    ///
    /// Every request made through the client is bounded by
    /// `request_timeout`.
    pub fn with_settings(settings: &ApiSettings) -> Result<Self> {
        let timeout = settings.request_timeout();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(settings.user_agent.as_str())
            .gzip(true)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Simple GET request expecting a JSON body
    pub async fn get(&self, url: &str) -> anyhow::Result<HttpResponse> {
        debug!("GET {} (timeout {:?})", url, self.timeout);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("request to {} failed", url))?;

        Self::parse_response(response).await
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn parse_response(response: Response) -> anyhow::Result<HttpResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(HttpResponse { status, text })
    }
}

/// HTTP response with the body already read
#[derive(Debug)]
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl HttpResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> anyhow::Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_creation() {
        let client = HttpClient::with_settings(&ApiSettings::default()).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_response_status() {
        let ok = HttpResponse {
            status: 204,
            text: String::new(),
        };
        let err = HttpResponse {
            status: 503,
            text: String::new(),
        };
        assert!(ok.is_success());
        assert!(!err.is_success());
    }
}
