//! Mock directory for testing.
//!
//! In-memory implementation of the OrganizationFetcher port: a
//! configurable organization graph, simulated latency, per-id error
//! injection, and call tracking for verification.
//!
//! # Example
//!
//! ```ignore
//! let fetcher = MockFetcher::new()
//!     .with_organization(Organization::new("root", "Root").with_sub_organization("a"))
//!     .with_organization(Organization::new("a", "A"))
//!     .with_delay(Duration::from_millis(5));
//!
//! let payload = fetcher.fetch(&OrganizationId::new("root"), &credentials).await?;
//! assert_eq!(fetcher.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::{Organization, OrganizationId};
use crate::ports::{Credentials, FetchError, OrganizationFetcher};

/// Mock directory fetcher for testing.
///
/// Organizations are stored as the JSON payloads the real service would
/// return, so tests exercise the production decoder.
#[derive(Debug, Clone)]
pub struct MockFetcher {
    /// Encoded payloads keyed by organization id.
    payloads: Arc<Mutex<HashMap<OrganizationId, Vec<u8>>>>,
    /// Injected failures keyed by organization id.
    errors: Arc<Mutex<HashMap<OrganizationId, MockError>>>,
    /// Simulated latency per fetch.
    delay: Duration,
    /// Fetch history for verification.
    calls: Arc<Mutex<Vec<OrganizationId>>>,
}

/// Mock error types for testing failure handling.
#[derive(Debug, Clone)]
pub enum MockError {
    /// Simulate a timeout.
    Timeout { timeout_secs: u32 },
    /// Simulate a connection failure.
    Connect { message: String },
    /// Simulate a generic network failure.
    Network { message: String },
    /// Simulate rejected credentials.
    AuthenticationFailed,
    /// Simulate a non-success status.
    UnexpectedStatus { status: u16, body: String },
}

impl From<MockError> for FetchError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::Timeout { timeout_secs } => FetchError::Timeout { timeout_secs },
            MockError::Connect { message } => FetchError::connect(message),
            MockError::Network { message } => FetchError::network(message),
            MockError::AuthenticationFailed => FetchError::AuthenticationFailed,
            MockError::UnexpectedStatus { status, body } => {
                FetchError::unexpected_status(status, body)
            }
        }
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFetcher {
    /// Creates an empty mock directory.
    pub fn new() -> Self {
        Self {
            payloads: Arc::new(Mutex::new(HashMap::new())),
            errors: Arc::new(Mutex::new(HashMap::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds an organization, stored as its JSON payload.
    pub fn with_organization(self, organization: Organization) -> Self {
        let payload = serde_json::to_vec(&organization).expect("organization record serializes");
        self.payloads
            .lock()
            .unwrap()
            .insert(organization.id.clone(), payload);
        self
    }

    /// Adds a raw payload for an id (for malformed-payload tests).
    pub fn with_payload(self, id: impl Into<OrganizationId>, payload: impl Into<Vec<u8>>) -> Self {
        self.payloads
            .lock()
            .unwrap()
            .insert(id.into(), payload.into());
        self
    }

    /// Injects an error for an id.
    pub fn with_error(self, id: impl Into<OrganizationId>, error: MockError) -> Self {
        self.errors.lock().unwrap().insert(id.into(), error);
        self
    }

    /// Sets simulated latency per fetch.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of fetches made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns the ids fetched, in call order.
    pub fn calls(&self) -> Vec<OrganizationId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrganizationFetcher for MockFetcher {
    async fn fetch(
        &self,
        id: &OrganizationId,
        _credentials: &Credentials,
    ) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().unwrap().push(id.clone());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        if let Some(error) = self.errors.lock().unwrap().get(id) {
            return Err(error.clone().into());
        }

        match self.payloads.lock().unwrap().get(id) {
            Some(payload) => Ok(payload.clone()),
            None => Err(FetchError::unexpected_status(
                404,
                format!("organization {} not found", id),
            )),
        }
    }
}
