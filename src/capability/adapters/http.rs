//! `reqwest` adapter for the authentication backend.

use crate::capability::{
    domain::{Credential, LoginCredentials, LoginSession},
    ports::{AuthGateway, AuthGatewayError, AuthGatewayResult},
};
use crate::config::GatewayConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path of the login endpoint relative to the backend base URL.
pub const LOGIN_PATH: &str = "/api/users/login";

#[derive(Debug, Serialize)]
struct LoginRequestBody<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Authentication gateway that posts JSON to `POST /api/users/login`.
///
/// Every request is bounded by the client timeout, so a hung backend cannot
/// hold a caller indefinitely.
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    client: reqwest::Client,
    login_url: String,
}

impl HttpAuthGateway {
    /// Creates a gateway for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Setup`] when `base_url` is not an
    /// `http://` or `https://` URL, `timeout` is zero, or the HTTP client
    /// cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> AuthGatewayResult<Self> {
        if timeout.is_zero() {
            return Err(AuthGatewayError::setup(std::io::Error::other(
                "authentication timeout must be greater than zero",
            )));
        }

        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(AuthGatewayError::setup(std::io::Error::other(format!(
                "authentication base URL '{base_url}' must start with 'http://' or 'https://'"
            ))));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AuthGatewayError::setup)?;

        Ok(Self {
            client,
            login_url: format!("{trimmed}{LOGIN_PATH}"),
        })
    }

    /// Creates a gateway from environment-backed settings.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::new`].
    pub fn from_config(config: &GatewayConfig) -> AuthGatewayResult<Self> {
        Self::new(&config.auth_base_url, config.timeout())
    }

    /// Returns the absolute login endpoint URL.
    #[must_use]
    pub fn login_url(&self) -> &str {
        &self.login_url
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(
        &self,
        credentials: &LoginCredentials,
        authorization: Option<&Credential>,
    ) -> AuthGatewayResult<LoginSession> {
        let body = LoginRequestBody {
            email: credentials.identifier(),
            password: credentials.secret(),
        };
        let mut request = self.client.post(&self.login_url).json(&body);
        if let Some(credential) = authorization {
            request = request.bearer_auth(credential.expose());
        }

        let response = request.send().await.map_err(AuthGatewayError::network)?;
        let status = response.status();
        // Headers already arrived, so a failed body read is a bad response.
        let text = response
            .text()
            .await
            .map_err(AuthGatewayError::invalid_response)?;
        tracing::debug!(url = %self.login_url, status = status.as_u16(), "authentication backend responded");

        if !status.is_success() {
            return Err(AuthGatewayError::Upstream {
                status: status.as_u16(),
                message: upstream_message(&text),
            });
        }

        serde_json::from_str(&text).map_err(AuthGatewayError::invalid_response)
    }
}

fn upstream_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map_or_else(|_| body.trim().to_owned(), |parsed| parsed.message)
}
