//! Fantasy-transit feed HTTP client.

use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::TransitNetwork;

use super::error::NetworkError;

/// Default feed URL.
pub const DEFAULT_NETWORK_URL: &str = "http://fantasy-transit.appspot.com/net?format=json";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum number of body characters kept on a decode error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the transit feed client.
#[derive(Debug, Clone)]
pub struct NetworkClientConfig {
    /// Full feed URL, including any `format=json` query
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NetworkClientConfig {
    /// Create a config for the given feed URL with the default timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom feed URL (for testing).
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NetworkClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_URL)
    }
}

/// Client for the transit network feed.
///
/// Cloning is cheap and clones share a connection pool. No response data is
/// kept between calls.
#[derive(Debug, Clone)]
pub struct NetworkClient {
    http: reqwest::Client,
    url: String,
}

impl NetworkClient {
    /// Create a new feed client.
    pub fn new(config: NetworkClientConfig) -> Result<Self, NetworkError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch and decode the whole network.
    ///
    /// Makes exactly one GET request. Either the complete network is
    /// returned or an error; a partially decoded network is never produced.
    /// Dropping the returned future aborts the request.
    pub async fn fetch_network(&self) -> Result<TransitNetwork, NetworkError> {
        let response = self.http.get(&self.url).send().await.inspect_err(|e| {
            warn!(url = %self.url, error = %e, "transit feed request failed");
        })?;
        let status = response.status();

        if !status.is_success() {
            let body = excerpt(&response.text().await.unwrap_or_default());
            warn!(url = %self.url, status = status.as_u16(), %body, "transit feed returned error status");
            return Err(NetworkError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.bytes().await?;

        let network: TransitNetwork = serde_json::from_slice(&body).map_err(|e| {
            let body = excerpt(&String::from_utf8_lossy(&body));
            warn!(url = %self.url, error = %e, %body, "transit feed body did not decode");
            NetworkError::Decode {
                message: e.to_string(),
                body: Some(body),
            }
        })?;

        debug!(
            lines = network.len(),
            stations = network.station_count(),
            "fetched transit network"
        );

        Ok(network)
    }
}

/// First [`BODY_EXCERPT_CHARS`] characters of an upstream body.
fn excerpt(body: &str) -> String {
    body.chars().take(BODY_EXCERPT_CHARS).collect()
}
