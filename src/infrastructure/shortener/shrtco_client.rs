//! HTTP client for shrtco-compatible shortening APIs.

use std::time::Duration;

use crate::domain::gateways::ShortenerApi;
use crate::error::ShortenError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Default base URL of the public shrtco.de API.
pub const DEFAULT_API_URL: &str = "https://api.shrtco.de/v2/";

/// Successful response body: `{"ok": true, "result": {"short_link": "..."}}`.
#[derive(Debug, Deserialize)]
struct ShortenResponse {
    result: ShortenResult,
}

#[derive(Debug, Deserialize)]
struct ShortenResult {
    short_link: String,
}

/// Failure response body: `{"ok": false, "error_code": 2, "error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

/// Client issuing `GET {api_url}shorten?url={url}`.
///
/// The client does not bound the request itself; the widget races each
/// call against its own timeout.
pub struct ShrtcoClient {
    api_url: String,
    client: reqwest::Client,
}

impl ShrtcoClient {
    /// Creates a client for `api_url`. A trailing `/` is added if missing.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self::with_client(api_url, reqwest::Client::new())
    }

    /// Creates a client with a pre-configured [`reqwest::Client`].
    pub fn with_client(api_url: impl Into<String>, client: reqwest::Client) -> Self {
        let mut api_url = api_url.into();
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        Self { api_url, client }
    }

    /// Builds a client whose connection attempts give up after `connect_timeout`.
    pub fn with_connect_timeout(
        api_url: impl Into<String>,
        connect_timeout: Duration,
    ) -> Result<Self, ShortenError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ShortenError::Network(e.to_string()))?;
        Ok(Self::with_client(api_url, client))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self) -> String {
        format!("{}shorten", self.api_url)
    }
}

impl Default for ShrtcoClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl ShortenerApi for ShrtcoClient {
    async fn shorten(&self, url: &str) -> Result<String, ShortenError> {
        debug!(url, endpoint = %self.endpoint(), "Requesting short link");

        let response = self
            .client
            .get(self.endpoint())
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| ShortenError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error);

            debug!(status = status.as_u16(), ?detail, "Shortening service rejected request");
            return Err(ShortenError::HttpStatus {
                status: status.as_u16(),
                detail,
            });
        }

        let body: ShortenResponse = response.json().await.map_err(|e| {
            if e.is_decode() {
                ShortenError::Parse(e.to_string())
            } else {
                ShortenError::Network(e.to_string())
            }
        })?;

        Ok(body.result.short_link)
    }
}
