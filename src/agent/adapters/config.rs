//! Configuration source adapters.

use crate::agent::ports::{ConfigSource, ConfigSourceError, ConfigSourceResult};
use crate::config::ModelConfig;
use std::sync::RwLock;

/// Reads model configuration from the process environment on every load.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvConfigSource;

impl EnvConfigSource {
    /// Creates an environment-backed source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ConfigSource for EnvConfigSource {
    fn load(&self) -> ConfigSourceResult<ModelConfig> {
        ModelConfig::from_env().map_err(ConfigSourceError::unavailable)
    }
}

/// Holds model configuration in memory.
///
/// The configuration can be replaced at runtime, which lets tests fix a
/// missing key between two initialisation attempts.
#[derive(Debug, Default)]
pub struct StaticConfigSource {
    config: RwLock<ModelConfig>,
}

impl StaticConfigSource {
    /// Creates a source returning `config`.
    #[must_use]
    pub const fn new(config: ModelConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Replaces the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigSourceError::Unavailable`] when lock acquisition fails.
    pub fn replace(&self, config: ModelConfig) -> ConfigSourceResult<()> {
        let mut stored = self
            .config
            .write()
            .map_err(|err| ConfigSourceError::unavailable(std::io::Error::other(err.to_string())))?;
        *stored = config;
        Ok(())
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self) -> ConfigSourceResult<ModelConfig> {
        let stored = self
            .config
            .read()
            .map_err(|err| ConfigSourceError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(stored.clone())
    }
}
