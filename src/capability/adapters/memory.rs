//! In-memory authentication backend for tests and local runs.

use crate::capability::{
    domain::{Credential, LoginCredentials, LoginSession},
    ports::{AuthGateway, AuthGatewayError, AuthGatewayResult},
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// A login request observed by [`InMemoryAuthGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedLogin {
    /// Identifier submitted by the capability.
    pub identifier: String,
    /// Bearer credential injected into the request, if any.
    pub authorization: Option<String>,
}

/// In-memory authentication backend.
///
/// Accounts are registered up front. Unknown identifiers and wrong secrets
/// are answered with `401 bad credentials`, mirroring the real backend.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAuthGateway {
    state: Arc<RwLock<InMemoryGatewayState>>,
}

#[derive(Debug, Default)]
struct InMemoryGatewayState {
    accounts: HashMap<String, (String, LoginSession)>,
    calls: Vec<RecordedLogin>,
    unreachable: bool,
    latency: Option<Duration>,
}

impl InMemoryAuthGateway {
    /// Creates a gateway with no accounts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an account and the session issued for it.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Setup`] when lock acquisition fails.
    pub fn add_account(
        &self,
        identifier: impl Into<String>,
        secret: impl Into<String>,
        session: LoginSession,
    ) -> AuthGatewayResult<()> {
        let mut state = self.write_state()?;
        state
            .accounts
            .insert(identifier.into(), (secret.into(), session));
        Ok(())
    }

    /// Makes every subsequent request fail as if the backend were down.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Setup`] when lock acquisition fails.
    pub fn set_unreachable(&self, unreachable: bool) -> AuthGatewayResult<()> {
        self.write_state()?.unreachable = unreachable;
        Ok(())
    }

    /// Delays every response by `latency`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Setup`] when lock acquisition fails.
    pub fn set_latency(&self, latency: Duration) -> AuthGatewayResult<()> {
        self.write_state()?.latency = Some(latency);
        Ok(())
    }

    /// Returns every request received so far, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Setup`] when lock acquisition fails.
    pub fn calls(&self) -> AuthGatewayResult<Vec<RecordedLogin>> {
        let state = self
            .state
            .read()
            .map_err(|err| AuthGatewayError::setup(std::io::Error::other(err.to_string())))?;
        Ok(state.calls.clone())
    }

    fn write_state(
        &self,
    ) -> AuthGatewayResult<std::sync::RwLockWriteGuard<'_, InMemoryGatewayState>> {
        self.state
            .write()
            .map_err(|err| AuthGatewayError::setup(std::io::Error::other(err.to_string())))
    }

    fn answer(
        &self,
        credentials: &LoginCredentials,
        authorization: Option<&Credential>,
    ) -> AuthGatewayResult<LoginSession> {
        let mut state = self.write_state()?;
        state.calls.push(RecordedLogin {
            identifier: credentials.identifier().to_owned(),
            authorization: authorization.map(|credential| credential.expose().to_owned()),
        });

        if state.unreachable {
            return Err(AuthGatewayError::network(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }

        match state.accounts.get(credentials.identifier()) {
            Some((secret, session)) if secret == credentials.secret() => Ok(session.clone()),
            _ => Err(AuthGatewayError::Upstream {
                status: 401,
                message: "bad credentials".to_owned(),
            }),
        }
    }
}

#[async_trait]
impl AuthGateway for InMemoryAuthGateway {
    async fn login(
        &self,
        credentials: &LoginCredentials,
        authorization: Option<&Credential>,
    ) -> AuthGatewayResult<LoginSession> {
        let latency = self
            .state
            .read()
            .map_err(|err| AuthGatewayError::setup(std::io::Error::other(err.to_string())))?
            .latency;
        if let Some(delay) = latency {
            tokio::time::sleep(delay).await;
        }
        self.answer(credentials, authorization)
    }
}
