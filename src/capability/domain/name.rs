//! Names of the capabilities the agent can run.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A capability the agent knows how to run.
///
/// The name doubles as the keyword the command interpreter looks for in free
/// text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapabilityName {
    /// Exchange an `identifier|secret` pair for a session.
    Login,
}

impl CapabilityName {
    /// Returns the name of the `login` capability.
    #[must_use]
    pub const fn login() -> Self {
        Self::Login
    }

    /// Returns the keyword form of the name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
        }
    }
}

impl fmt::Display for CapabilityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
