//! Environment-backed configuration.
//!
//! Settings are deserialised with `envy`. Model settings are read at every
//! initialisation attempt so a missing key can be fixed without restarting
//! the process; gateway settings are read once when the binary wires the
//! service together.

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Environment variable holding the model-service API key.
pub const API_KEY_VARIABLE: &str = "OPENAI_API_KEY";

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Authentication backend used when `CONCIERGE_AUTH_BASE_URL` is not set.
pub const DEFAULT_AUTH_BASE_URL: &str = "http://localhost:3000";

/// Timeout applied to authentication requests by default.
pub const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 5;

/// Model-service settings, read from `OPENAI_*` variables.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct ModelConfig {
    /// API key (`OPENAI_API_KEY`). Required for initialisation.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model name (`OPENAI_MODEL`).
    #[serde(default = "default_model")]
    pub model: String,
}

impl ModelConfig {
    /// Reads `OPENAI_API_KEY` and `OPENAI_MODEL` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`envy::Error`] when a variable is present but cannot be
    /// deserialised.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("OPENAI_").from_env()
    }

    /// Returns a copy with `api_key` set.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .finish()
    }
}

/// Authentication backend settings, read from `CONCIERGE_*` variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GatewayConfig {
    /// Backend base URL (`CONCIERGE_AUTH_BASE_URL`).
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,

    /// Request timeout in seconds (`CONCIERGE_AUTH_TIMEOUT_SECS`).
    #[serde(default = "default_auth_timeout_secs")]
    pub auth_timeout_secs: u64,
}

impl GatewayConfig {
    /// Reads `CONCIERGE_AUTH_BASE_URL` and `CONCIERGE_AUTH_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`envy::Error`] when a variable is present but cannot be
    /// deserialised.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("CONCIERGE_").from_env()
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.auth_timeout_secs)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            auth_base_url: default_auth_base_url(),
            auth_timeout_secs: default_auth_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}

fn default_auth_base_url() -> String {
    DEFAULT_AUTH_BASE_URL.to_owned()
}

const fn default_auth_timeout_secs() -> u64 {
    DEFAULT_AUTH_TIMEOUT_SECS
}
