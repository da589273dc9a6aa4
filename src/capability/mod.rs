//! Invocable capabilities and the per-call capability registry.
//!
//! A capability is a named, side-effecting action the agent may run on behalf
//! of a caller. The only capability today is `login`, which exchanges an
//! `identifier|secret` pair for a session token at the authentication backend.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Capability implementations and the registry in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
