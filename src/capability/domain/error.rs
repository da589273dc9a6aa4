//! Error types for capability domain validation.

use super::{CapabilityName, LoginState};
use thiserror::Error;

/// Errors returned while constructing capability domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CapabilityDomainError {
    /// The caller credential is empty after trimming.
    #[error("credential must not be empty")]
    EmptyCredential,

    /// The capability received the wrong number of positional arguments.
    #[error("capability '{capability}' expects {expected} argument(s), got {actual}")]
    ArgumentCount {
        /// Capability receiving the arguments.
        capability: CapabilityName,
        /// Number of arguments the capability accepts.
        expected: usize,
        /// Number of arguments supplied.
        actual: usize,
    },

    /// The login argument has no `|` separator.
    #[error("expected 'identifier|secret' but no '|' separator was found")]
    MissingPairSeparator,

    /// The identifier half of the login pair is empty.
    #[error("login identifier must not be empty")]
    EmptyIdentifier,

    /// The secret half of the login pair is empty.
    #[error("login secret must not be empty")]
    EmptySecret,

    /// Transitioning between two login states is invalid.
    #[error("invalid login transition: {from} -> {to}")]
    InvalidLoginTransition {
        /// Current login state.
        from: LoginState,
        /// Requested target login state.
        to: LoginState,
    },
}
