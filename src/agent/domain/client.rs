//! Constructed agent client handle.

use super::{ClientId, ModelSettings};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

/// Model-service API key.
///
/// `Debug` output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a key from a raw value.
    ///
    /// Returns `None` when the value is empty after trimming.
    #[must_use]
    pub fn new(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_owned()))
    }

    /// Returns the raw key for authenticating model requests.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// The expensive downstream client, constructed once per service lifetime.
///
/// Once published by the agent service the client is immutable and shared by
/// every caller.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentClient {
    id: ClientId,
    settings: ModelSettings,
    api_key: ApiKey,
    initialized_at: DateTime<Utc>,
}

impl AgentClient {
    /// Creates a client handle stamped with the current time.
    #[must_use]
    pub fn new(settings: ModelSettings, api_key: ApiKey, clock: &impl Clock) -> Self {
        Self {
            id: ClientId::new(),
            settings,
            api_key,
            initialized_at: clock.utc(),
        }
    }

    /// Returns the client identifier.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the model settings the client was built with.
    #[must_use]
    pub const fn settings(&self) -> &ModelSettings {
        &self.settings
    }

    /// Returns the API key the client authenticates with.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns when the client was constructed.
    #[must_use]
    pub const fn initialized_at(&self) -> DateTime<Utc> {
        self.initialized_at
    }
}
