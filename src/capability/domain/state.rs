//! Per-invocation state machine of the `login` capability.

use super::CapabilityDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stage reached by a single login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginState {
    /// The argument is being checked for an `identifier|secret` pair.
    ValidatingInput,
    /// The request to the authentication backend is being sent.
    SendingRequest,
    /// A response from the authentication backend is being interpreted.
    AwaitingResponse,
    /// The backend issued a session.
    Success,
    /// Validation, transport, or the backend rejected the attempt.
    Failure,
}

impl LoginState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValidatingInput => "validating_input",
            Self::SendingRequest => "sending_request",
            Self::AwaitingResponse => "awaiting_response",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }

    /// Returns whether the attempt has finished.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }

    /// Returns whether transition to `target` is allowed.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::ValidatingInput, Self::SendingRequest | Self::Failure)
                | (Self::SendingRequest, Self::AwaitingResponse | Self::Failure)
                | (Self::AwaitingResponse, Self::Success | Self::Failure)
        )
    }
}

impl fmt::Display for LoginState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Tracks the state of one login attempt.
///
/// Attempts are never persisted; a fresh one is created per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    state: LoginState,
}

impl LoginAttempt {
    /// Starts an attempt in [`LoginState::ValidatingInput`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoginState::ValidatingInput,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> LoginState {
        self.state
    }

    /// Moves the attempt to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityDomainError::InvalidLoginTransition`] when the
    /// transition is not allowed from the current state.
    pub fn advance(&mut self, target: LoginState) -> Result<(), CapabilityDomainError> {
        if !self.state.can_transition_to(target) {
            return Err(CapabilityDomainError::InvalidLoginTransition {
                from: self.state,
                to: target,
            });
        }
        tracing::trace!(from = %self.state, to = %target, "login state transition");
        self.state = target;
        Ok(())
    }
}

impl Default for LoginAttempt {
    fn default() -> Self {
        Self::new()
    }
}
