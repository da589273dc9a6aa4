//! Parsed command value.

use crate::capability::domain::CapabilityName;

/// Outcome of interpreting one piece of free text.
///
/// Lives only for the duration of a single invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    capability: Option<CapabilityName>,
    args: Vec<String>,
}

impl ParsedCommand {
    /// Creates a command that requests `capability` with `args`.
    #[must_use]
    pub const fn new(capability: CapabilityName, args: Vec<String>) -> Self {
        Self {
            capability: Some(capability),
            args,
        }
    }

    /// Creates a command that requests nothing.
    #[must_use]
    pub const fn unmatched() -> Self {
        Self {
            capability: None,
            args: Vec::new(),
        }
    }

    /// Returns whether a capability was recognised.
    #[must_use]
    pub const fn matched(&self) -> bool {
        self.capability.is_some()
    }

    /// Returns the recognised capability name.
    #[must_use]
    pub const fn capability(&self) -> Option<&CapabilityName> {
        self.capability.as_ref()
    }

    /// Returns the extracted positional arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
