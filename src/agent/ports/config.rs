//! Configuration source port.

use crate::config::ModelConfig;
use std::sync::Arc;
use thiserror::Error;

/// Result type for configuration reads.
pub type ConfigSourceResult<T> = Result<T, ConfigSourceError>;

/// Supplies model configuration at each initialisation attempt.
pub trait ConfigSource: Send + Sync {
    /// Reads the current model configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigSourceError::Unavailable`] when the configuration
    /// cannot be read or decoded.
    fn load(&self) -> ConfigSourceResult<ModelConfig>;
}

/// Errors returned by configuration sources.
#[derive(Debug, Clone, Error)]
pub enum ConfigSourceError {
    /// The configuration could not be read or decoded.
    #[error("configuration unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ConfigSourceError {
    /// Wraps a read or decode failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
