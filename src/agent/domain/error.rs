//! Initialisation error type.

use std::sync::Arc;
use thiserror::Error;

/// Errors that abort an initialisation attempt.
///
/// The type is `Clone` because one failed attempt is reported to every
/// caller that was waiting on it. None of these errors is cached: the next
/// call starts a fresh attempt.
#[derive(Debug, Clone, Error)]
pub enum InitError {
    /// A required configuration value is absent or blank.
    #[error("required configuration '{variable}' is not set")]
    MissingConfig {
        /// Name of the missing environment variable.
        variable: &'static str,
    },

    /// A configuration value is present but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be read.
    #[error("configuration unavailable: {0}")]
    ConfigUnavailable(Arc<dyn std::error::Error + Send + Sync>),

    /// The client factory failed.
    #[error("client construction failed: {0}")]
    ClientConstruction(Arc<dyn std::error::Error + Send + Sync>),

    /// Construction panicked; the panic message is kept.
    #[error("initialisation panicked: {0}")]
    Panicked(String),
}
