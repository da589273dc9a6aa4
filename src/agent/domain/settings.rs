//! Fixed model parameters.

use super::InitError;
use serde::{Deserialize, Serialize};

/// Output length bound applied to every client.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Parameters the model client is constructed with.
///
/// Sampling is deterministic and output length is bounded; only the model
/// name is configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ModelSettings {
    /// Creates deterministic settings for `model`.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::InvalidConfig`] when the model name is empty after
    /// trimming.
    pub fn deterministic(model: &str) -> Result<Self, InitError> {
        let trimmed = model.trim();
        if trimmed.is_empty() {
            return Err(InitError::InvalidConfig(
                "model name must not be empty".to_owned(),
            ));
        }
        Ok(Self {
            model: trimmed.to_owned(),
            temperature: 0.0,
            max_tokens: DEFAULT_MAX_TOKENS,
        })
    }

    /// Returns the model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Returns the sampling temperature.
    #[must_use]
    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Returns the maximum number of output tokens.
    #[must_use]
    pub const fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}
