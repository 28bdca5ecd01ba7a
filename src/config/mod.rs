//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `ORGTREE` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use orgtree::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod directory;
mod error;

pub use auth::AuthConfig;
pub use directory::DirectoryConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Directory service configuration (endpoint, timeout).
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Directory credentials (HTTP basic auth).
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `ORGTREE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `ORGTREE__AUTH__USERNAME=svc` -> `auth.username = svc`
    /// - `ORGTREE__DIRECTORY__BASE_URL=...` -> `directory.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ORGTREE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.directory.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var("ORGTREE__AUTH__USERNAME", "svc-account");
        env::set_var("ORGTREE__AUTH__PASSWORD", "hunter2");
    }

    fn clear_env() {
        env::remove_var("ORGTREE__AUTH__USERNAME");
        env::remove_var("ORGTREE__AUTH__PASSWORD");
        env::remove_var("ORGTREE__DIRECTORY__BASE_URL");
        env::remove_var("ORGTREE__DIRECTORY__TIMEOUT_SECS");
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.auth.username, "svc-account");
    }

    #[test]
    fn test_validate_full_config() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok());
        let config = result.unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_directory_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.directory.base_url,
            "https://anypoint.mulesoft.com/accounts/api/organizations"
        );
        assert_eq!(config.directory.timeout_secs, 30);
    }

    #[test]
    fn test_custom_directory_endpoint() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var(
            "ORGTREE__DIRECTORY__BASE_URL",
            "https://anypoint.example.com/orgs",
        );
        env::set_var("ORGTREE__DIRECTORY__TIMEOUT_SECS", "10");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.directory.base_url, "https://anypoint.example.com/orgs");
        assert_eq!(config.directory.timeout_secs, 10);
    }

    #[test]
    fn test_missing_auth_fails_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let result = AppConfig::load();

        assert!(result.is_err());
    }
}
