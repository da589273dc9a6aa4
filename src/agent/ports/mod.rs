//! Port contracts for agent initialisation.
//!
//! Ports define infrastructure-agnostic interfaces used by the agent service.

mod client_factory;
mod config;

pub use client_factory::{AgentClientFactory, AgentClientFactoryError, AgentClientFactoryResult};
pub use config::{ConfigSource, ConfigSourceError, ConfigSourceResult};
