//! Single-shot HTTP GET with callback delivery.

use crate::error::Result;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Response descriptor handed to the caller once a GET completes.
///
/// Produced per call and consumed by the callback; nothing is cached.
#[derive(Debug)]
pub struct FetchResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl FetchResponse {
    /// Parse the raw body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Settings for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("{}/{}", crate::PACKAGE_NAME, crate::VERSION),
        }
    }
}

/// HTTP GET wrapper around a client built once from [`FetcherConfig`].
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Issues one GET to `url` and reads the body as a string.
    ///
    /// Every call is exactly one outbound request: no retry, no redirect
    /// handling beyond the client default, no caching. Non-2xx statuses are
    /// not errors; they come back in [`FetchResponse::status`].
    pub async fn get(&self, url: &str) -> Result<FetchResponse> {
        let parsed = Url::parse(url)?;
        debug!(url = %parsed, "fetching");

        let response = self.client.get(parsed).send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "fetch complete");

        Ok(FetchResponse {
            status,
            headers,
            body,
        })
    }
}

/// Issues a single GET to `url` and delivers the outcome to `callback`.
///
/// The callback runs exactly once: with `Ok(response)` when the request
/// completes (any status code), or with `Err(_)` when the URL is invalid or
/// the request cannot complete (connection failure, timeout).
pub async fn get_from_url<F>(url: &str, callback: F)
where
    F: FnOnce(Result<FetchResponse>),
{
    let outcome = match Fetcher::new(FetcherConfig::default()) {
        Ok(fetcher) => fetcher.get(url).await,
        Err(e) => Err(e),
    };
    callback(outcome);
}
