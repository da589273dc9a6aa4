//! Agent initialisation and command dispatch.
//!
//! [`services::AgentService`] is the entry point used by every caller. It
//! builds the model client lazily, exactly once even under concurrent
//! callers, then routes free text through the command interpreter to a
//! capability registry bound to the caller's credential.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The orchestration service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
