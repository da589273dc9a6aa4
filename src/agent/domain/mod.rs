//! Domain model for the agent client.

mod client;
mod error;
mod ids;
mod settings;

pub use client::{AgentClient, ApiKey};
pub use error::InitError;
pub use ids::ClientId;
pub use settings::{DEFAULT_MAX_TOKENS, ModelSettings};
