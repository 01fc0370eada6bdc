//! Trigger Configuration
//!
//! Loads configuration from environment variables. Misconfiguration is caught
//! here, before any request is attempted, so the operator can tell a bad
//! environment apart from a failing receiver.

use std::env;
use std::time::Duration;

use thiserror::Error;

/// The secret value shipped in documentation. Refusing it prevents signing
/// real traffic with a publicly known key.
const PLACEHOLDER_SECRET: &str = "your-webhook-secret-here";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("WEBHOOK_URL must be set to the receiver endpoint")]
    MissingUrl,
    #[error("WEBHOOK_URL is not a valid http(s) URL: {0}")]
    InvalidUrl(String),
    #[error("WEBHOOK_SECRET must be set to a non-empty shared secret")]
    MissingSecret,
    #[error("WEBHOOK_SECRET still holds the documentation placeholder; set the real shared secret")]
    PlaceholderSecret,
}

/// Configuration for one manual trigger invocation.
#[derive(Debug, Clone)]
pub struct TriggerConfig {
    /// Receiver endpoint URL (e.g. `https://coder.example.com/api/webhook`)
    pub endpoint_url: String,

    /// Shared HMAC secret; compared only via signature equality, never logged
    pub secret: String,

    /// Upper bound on the single outbound request
    pub timeout: Duration,
}

impl TriggerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("WEBHOOK_URL").ok(),
            env::var("WEBHOOK_SECRET").ok(),
            env::var("WEBHOOK_TIMEOUT_SECS").ok(),
        )
    }

    /// Validate raw configuration values (env lookups stay in `from_env` so
    /// tests do not race over process-global state).
    fn from_values(
        url: Option<String>,
        secret: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let endpoint_url = url.ok_or(ConfigError::MissingUrl)?;
        if !(endpoint_url.starts_with("http://") || endpoint_url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(endpoint_url));
        }

        let secret = secret.filter(|s| !s.is_empty()).ok_or(ConfigError::MissingSecret)?;
        if secret == PLACEHOLDER_SECRET {
            return Err(ConfigError::PlaceholderSecret);
        }

        let timeout_secs = timeout_secs
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            endpoint_url,
            secret,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Create a configuration for testing against a local receiver.
    #[must_use]
    pub fn default_for_test() -> Self {
        Self {
            endpoint_url: "http://127.0.0.1:8080/webhook".into(),
            secret: "test-secret".into(),
            timeout: Duration::from_secs(5),
        }
    }
}
