//! Organization Fetcher Port - Interface for the remote directory service.
//!
//! Implementations connect to the directory (HTTP in production, an
//! in-memory directory in tests) and return the raw response body for one
//! organization. The tree builder makes exactly one call per discovered
//! entity: no retries, no caching.

use async_trait::async_trait;
use secrecy::Secret;

use crate::domain::OrganizationId;

/// Port for fetching raw organization payloads.
#[async_trait]
pub trait OrganizationFetcher: Send + Sync {
    /// Fetches the raw payload for a single organization.
    ///
    /// Transport policy (timeouts, TLS) belongs to the implementation;
    /// any failure to produce a payload surfaces as a [`FetchError`].
    async fn fetch(
        &self,
        id: &OrganizationId,
        credentials: &Credentials,
    ) -> Result<Vec<u8>, FetchError>;
}

/// Credentials for the directory service (HTTP basic auth).
///
/// Read-only and safely shared across all fetch tasks. The password is
/// wrapped in [`Secret`] so it never appears in debug output; it is
/// exposed only at the transport call site.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: Secret<String>,
}

impl Credentials {
    /// Creates credentials from a username and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Secret::new(password.into()),
        }
    }

    /// Returns the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the wrapped password; callers expose it only when making
    /// the actual request.
    pub fn password(&self) -> &Secret<String> {
        &self.password
    }
}

/// Fetcher errors.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// The service rejected the credentials.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The service answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        body: String,
    },
}

impl FetchError {
    /// Creates a connection error.
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect(message.into())
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an unexpected-status error.
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Returns true when the failure was an authentication failure.
    pub fn is_auth(&self) -> bool {
        matches!(self, FetchError::AuthenticationFailed)
    }
}
