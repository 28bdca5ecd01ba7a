//! Anypoint Fetcher - OrganizationFetcher implementation for the
//! Anypoint accounts API.
//!
//! Fetches one organization per call via `GET {base_url}/{id}` with HTTP
//! basic auth. No retries: the tree builder treats every fetch as a
//! single attempt.
//!
//! # Configuration
//!
//! ```ignore
//! let config = AnypointConfig::new()
//!     .with_base_url("https://anypoint.example.com/accounts/api/organizations")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let fetcher = AnypointFetcher::new(config);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;
use tracing::debug;

use crate::domain::OrganizationId;
use crate::ports::{Credentials, FetchError, OrganizationFetcher};

/// Default organizations endpoint of the Anypoint accounts API.
const DEFAULT_BASE_URL: &str = "https://anypoint.mulesoft.com/accounts/api/organizations";

/// Configuration for the Anypoint fetcher.
#[derive(Debug, Clone)]
pub struct AnypointConfig {
    /// Base URL of the organizations endpoint.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for AnypointConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnypointConfig {
    /// Creates a configuration pointing at the public Anypoint endpoint.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Anypoint accounts API fetcher.
pub struct AnypointFetcher {
    config: AnypointConfig,
    client: Client,
}

impl AnypointFetcher {
    /// Creates a fetcher with the given configuration.
    pub fn new(config: AnypointConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the URL for a single organization.
    fn organization_url(&self, id: &OrganizationId) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), id)
    }

    /// Maps a non-success response to a fetch error.
    async fn handle_response_status(&self, response: Response) -> Result<Response, FetchError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(FetchError::AuthenticationFailed),
            _ => Err(FetchError::unexpected_status(status.as_u16(), body)),
        }
    }
}

#[async_trait]
impl OrganizationFetcher for AnypointFetcher {
    async fn fetch(
        &self,
        id: &OrganizationId,
        credentials: &Credentials,
    ) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(self.organization_url(id))
            .basic_auth(
                credentials.username(),
                Some(credentials.password().expose_secret()),
            )
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    FetchError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    FetchError::connect(format!("Connection failed: {}", e))
                } else {
                    FetchError::network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        debug!(organization = %id, bytes = body.len(), "directory response received");

        Ok(body.to_vec())
    }
}
