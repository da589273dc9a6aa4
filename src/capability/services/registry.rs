//! Capability contract, catalog, and per-call registry.
//!
//! The [`CapabilityCatalog`] is built once, when the agent initialises. Each
//! invocation asks the catalog for a fresh [`CapabilityRegistry`] bound to the
//! caller's credential, so a credential never outlives the call that supplied
//! it and never reaches another caller's capabilities.

use super::LoginCapability;
use crate::capability::{
    domain::{CapabilityDomainError, CapabilityName, CapabilityOutput, Credential},
    ports::{AuthGateway, AuthGatewayError},
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised while invoking a capability.
#[derive(Debug, Clone, Error)]
pub enum CapabilityError {
    /// The positional arguments were rejected before any side effect.
    #[error("invalid arguments for capability '{capability}': {source}")]
    InvalidArguments {
        /// Capability that rejected the arguments.
        capability: CapabilityName,
        /// Validation failure.
        #[source]
        source: CapabilityDomainError,
    },

    /// The downstream call failed.
    #[error(transparent)]
    Gateway(#[from] AuthGatewayError),

    /// A domain invariant was violated while running the capability.
    #[error(transparent)]
    Domain(#[from] CapabilityDomainError),
}

/// Result type for capability invocations.
pub type CapabilityResult<T> = Result<T, CapabilityError>;

/// A named, invocable side-effecting action.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Returns the capability name.
    fn name(&self) -> &CapabilityName;

    /// Runs the capability with positional arguments.
    ///
    /// # Errors
    ///
    /// Returns [`CapabilityError::InvalidArguments`] when the arguments are
    /// malformed, or [`CapabilityError::Gateway`] when the downstream call
    /// fails.
    async fn invoke(&self, args: &[String]) -> CapabilityResult<CapabilityOutput>;
}

/// Immutable description of the available capabilities.
#[derive(Clone)]
pub struct CapabilityCatalog {
    gateway: Arc<dyn AuthGateway>,
}

impl CapabilityCatalog {
    /// Creates a catalog whose `login` capability talks to `gateway`.
    #[must_use]
    pub const fn new(gateway: Arc<dyn AuthGateway>) -> Self {
        Self { gateway }
    }

    /// Returns the names of the capabilities every registry will contain.
    #[must_use]
    pub fn names(&self) -> Vec<CapabilityName> {
        vec![CapabilityName::login()]
    }

    /// Builds a registry bound to `credential`.
    #[must_use]
    pub fn build(&self, credential: Option<Credential>) -> CapabilityRegistry {
        let login = LoginCapability::new(Arc::clone(&self.gateway), credential);
        CapabilityRegistry {
            capabilities: vec![Box::new(login)],
        }
    }
}

/// Ordered set of capabilities bound to one caller's credential.
pub struct CapabilityRegistry {
    capabilities: Vec<Box<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Finds a capability by name.
    #[must_use]
    pub fn find(&self, name: &CapabilityName) -> Option<&dyn Capability> {
        self.capabilities
            .iter()
            .find(|capability| capability.name() == name)
            .map(|capability| &**capability)
    }

    /// Returns the capability names in registration order.
    #[must_use]
    pub fn names(&self) -> Vec<&CapabilityName> {
        self.capabilities
            .iter()
            .map(|capability| capability.name())
            .collect()
    }

    /// Returns the number of capabilities.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Returns whether the registry is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}
