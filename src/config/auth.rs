//! Directory credentials configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::ValidationError;
use crate::ports::Credentials;

/// Credentials for the directory service (HTTP basic auth).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Username for HTTP basic auth.
    pub username: String,

    /// Password for HTTP basic auth.
    pub password: Secret<String>,
}

impl AuthConfig {
    /// Validate the credentials configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() {
            return Err(ValidationError::MissingRequired("auth.username"));
        }
        if self.password.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("auth.password"));
        }
        Ok(())
    }

    /// Builds the credentials value handed to the fetcher.
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.expose_secret().clone())
    }
}
