//! Error types for command interpretation.

use crate::capability::domain::CapabilityName;
use thiserror::Error;

/// Errors returned while interpreting free text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The capability keyword was found but no argument could be extracted.
    #[error(
        "capability '{capability}' was requested but no argument was found; expected a quoted 'identifier|secret' pair"
    )]
    MalformedArguments {
        /// Capability named in the text.
        capability: CapabilityName,
    },
}
