//! Authentication backend port used by the `login` capability.

use crate::capability::domain::{Credential, LoginCredentials, LoginSession};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for authentication backend operations.
pub type AuthGatewayResult<T> = Result<T, AuthGatewayError>;

/// Contract for exchanging login credentials for a session.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Submits one login request.
    ///
    /// `authorization` is the caller's bearer credential, injected into the
    /// request when present.
    ///
    /// # Errors
    ///
    /// Returns [`AuthGatewayError::Upstream`] when the backend answers with a
    /// non-success status, [`AuthGatewayError::Network`] when no response
    /// arrives, or [`AuthGatewayError::InvalidResponse`] when a success body
    /// cannot be decoded.
    async fn login(
        &self,
        credentials: &LoginCredentials,
        authorization: Option<&Credential>,
    ) -> AuthGatewayResult<LoginSession>;
}

/// Errors returned by authentication backend adapters.
#[derive(Debug, Clone, Error)]
pub enum AuthGatewayError {
    /// The backend could not be reached or timed out.
    #[error("authentication backend unreachable: {0}")]
    Network(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend rejected the request.
    #[error("authentication backend returned {status}: {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Message reported by the backend.
        message: String,
    },

    /// The backend answered with a body that is not a session, or the body
    /// could not be read.
    #[error("invalid response from authentication backend: {0}")]
    InvalidResponse(Arc<dyn std::error::Error + Send + Sync>),

    /// The adapter could not be constructed.
    #[error("authentication client setup failed: {0}")]
    Setup(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthGatewayError {
    /// Wraps a transport failure.
    pub fn network(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Arc::new(err))
    }

    /// Wraps a response decoding failure.
    pub fn invalid_response(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidResponse(Arc::new(err))
    }

    /// Wraps an adapter construction failure.
    pub fn setup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Setup(Arc::new(err))
    }

    /// Returns whether a response was received before the failure.
    #[must_use]
    pub const fn has_response(&self) -> bool {
        matches!(self, Self::Upstream { .. } | Self::InvalidResponse(_))
    }
}
