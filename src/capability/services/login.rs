//! The `login` capability.

use super::{Capability, CapabilityError, CapabilityResult};
use crate::capability::{
    domain::{
        CapabilityName, CapabilityOutput, Credential, LoginAttempt, LoginCredentials, LoginState,
    },
    ports::AuthGateway,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Exchanges an `identifier|secret` pair for a session.
///
/// The caller's credential is bound at construction and injected into the
/// outbound request as a bearer token.
pub struct LoginCapability {
    name: CapabilityName,
    gateway: Arc<dyn AuthGateway>,
    authorization: Option<Credential>,
}

impl LoginCapability {
    /// Creates a `login` capability bound to `authorization`.
    #[must_use]
    pub fn new(gateway: Arc<dyn AuthGateway>, authorization: Option<Credential>) -> Self {
        Self {
            name: CapabilityName::login(),
            gateway,
            authorization,
        }
    }
}

impl fmt::Debug for LoginCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCapability")
            .field("name", &self.name)
            .field("authorization", &self.authorization)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Capability for LoginCapability {
    fn name(&self) -> &CapabilityName {
        &self.name
    }

    async fn invoke(&self, args: &[String]) -> CapabilityResult<CapabilityOutput> {
        let mut attempt = LoginAttempt::new();

        let credentials = match LoginCredentials::from_args(args) {
            Ok(credentials) => credentials,
            Err(source) => {
                attempt.advance(LoginState::Failure)?;
                tracing::debug!(capability = %self.name, error = %source, "login arguments rejected");
                return Err(CapabilityError::InvalidArguments {
                    capability: self.name,
                    source,
                });
            }
        };

        attempt.advance(LoginState::SendingRequest)?;
        let outcome = self
            .gateway
            .login(&credentials, self.authorization.as_ref())
            .await;
        if outcome
            .as_ref()
            .map_or_else(|err| err.has_response(), |_| true)
        {
            attempt.advance(LoginState::AwaitingResponse)?;
        }

        match outcome {
            Ok(session) => {
                attempt.advance(LoginState::Success)?;
                tracing::info!(
                    capability = %self.name,
                    username = %session.user.username,
                    "login succeeded"
                );
                Ok(CapabilityOutput::Login(session))
            }
            Err(err) => {
                attempt.advance(LoginState::Failure)?;
                tracing::warn!(capability = %self.name, error = %err, "login failed");
                Err(err.into())
            }
        }
    }
}
