//! Caller-supplied bearer credential.

use super::CapabilityDomainError;
use std::fmt;

/// Opaque bearer token supplied by a caller for a single invocation.
///
/// The value is never persisted by the core and its `Debug` output is
/// redacted so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Creates a credential from a raw token.
    ///
    /// Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityDomainError::EmptyCredential`] when the token is
    /// empty after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, CapabilityDomainError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CapabilityDomainError::EmptyCredential);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the raw token for injection into an outbound request.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}
