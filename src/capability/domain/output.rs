//! Structured capability results.

use super::LoginSession;
use serde::{Deserialize, Serialize};

/// Result data produced by a successful capability invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapabilityOutput {
    /// Session returned by the `login` capability.
    Login(LoginSession),
}

impl CapabilityOutput {
    /// Returns the login session when this output came from `login`.
    #[must_use]
    pub const fn as_login(&self) -> Option<&LoginSession> {
        match self {
            Self::Login(session) => Some(session),
        }
    }
}
