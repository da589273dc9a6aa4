//! Concierge: lazily initialised agent that turns free text into actions.
//!
//! The crate answers requests such as `please login 'user@example.com|pw'`
//! by constructing a model client on first use, recognising the requested
//! capability in the text, and running it against the authentication
//! backend with the caller's own bearer credential.
//!
//! # Architecture
//!
//! Concierge follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, environment, memory)
//!
//! # Modules
//!
//! - [`agent`]: Single-flight client initialisation and request dispatch
//! - [`capability`]: The `login` capability and the per-call registry
//! - [`command`]: Keyword and argument extraction from free text
//! - [`config`]: Environment-backed settings

pub mod agent;
pub mod capability;
pub mod command;
pub mod config;
