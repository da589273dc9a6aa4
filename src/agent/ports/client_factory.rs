//! Client factory port.

use crate::agent::domain::{AgentClient, ApiKey, ModelSettings};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for client construction.
pub type AgentClientFactoryResult<T> = Result<T, AgentClientFactoryError>;

/// Constructs the expensive downstream model client.
///
/// The agent service guarantees this is called at most once per
/// initialisation attempt, however many callers are waiting.
#[async_trait]
pub trait AgentClientFactory: Send + Sync {
    /// Builds a client for `settings`, authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`AgentClientFactoryError`] when the settings are rejected or
    /// construction fails.
    async fn create(
        &self,
        api_key: ApiKey,
        settings: ModelSettings,
    ) -> AgentClientFactoryResult<AgentClient>;
}

/// Errors returned by client factories.
#[derive(Debug, Clone, Error)]
pub enum AgentClientFactoryError {
    /// The settings are outside what the model service accepts.
    #[error("model settings rejected: {0}")]
    Rejected(String),

    /// Construction failed.
    #[error("model client construction failed: {0}")]
    Construction(Arc<dyn std::error::Error + Send + Sync>),
}

impl AgentClientFactoryError {
    /// Wraps a construction failure.
    pub fn construction(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Construction(Arc::new(err))
    }
}
