//! Value types for the `login` capability.

use super::{CapabilityDomainError, CapabilityName};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the identifier and the secret in a login argument.
pub const PAIR_SEPARATOR: char = '|';

/// Validated `identifier|secret` pair submitted to the authentication backend.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    identifier: String,
    secret: String,
}

impl LoginCredentials {
    /// Parses a single `identifier|secret` argument.
    ///
    /// The argument is split on the first separator, so the secret may itself
    /// contain `|`. Both halves are trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityDomainError::MissingPairSeparator`] when there is no
    /// separator, or [`CapabilityDomainError::EmptyIdentifier`] /
    /// [`CapabilityDomainError::EmptySecret`] when either half is empty.
    pub fn parse(raw: &str) -> Result<Self, CapabilityDomainError> {
        let (raw_identifier, raw_secret) = raw
            .split_once(PAIR_SEPARATOR)
            .ok_or(CapabilityDomainError::MissingPairSeparator)?;
        let identifier = raw_identifier.trim();
        let secret = raw_secret.trim();

        if identifier.is_empty() {
            return Err(CapabilityDomainError::EmptyIdentifier);
        }
        if secret.is_empty() {
            return Err(CapabilityDomainError::EmptySecret);
        }

        Ok(Self {
            identifier: identifier.to_owned(),
            secret: secret.to_owned(),
        })
    }

    /// Parses the positional arguments handed to the `login` capability.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityDomainError::ArgumentCount`] unless exactly one
    /// argument is supplied, otherwise the errors of [`Self::parse`].
    pub fn from_args(args: &[String]) -> Result<Self, CapabilityDomainError> {
        match args {
            [single] => Self::parse(single),
            _ => Err(CapabilityDomainError::ArgumentCount {
                capability: CapabilityName::login(),
                expected: 1,
                actual: args.len(),
            }),
        }
    }

    /// Returns the account identifier (an email address for the backend).
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Returns the account secret.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Account attributes returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display username.
    pub username: String,
    /// Numeric account identifier.
    pub user_id: u64,
    /// Account email address.
    pub email: String,
    /// Role name assigned by the backend.
    pub rol: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
}

/// Structured result of a successful login.
///
/// The session is returned to the caller as data; persisting it on the client
/// side is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginSession {
    /// Session token issued by the backend.
    pub token: String,
    /// Account attributes.
    pub user: UserProfile,
}
