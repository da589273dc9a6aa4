//! Adapter implementations for agent initialisation ports.

mod chat_model;
mod config;

pub use chat_model::ChatModelClientFactory;
pub use config::{EnvConfigSource, StaticConfigSource};
