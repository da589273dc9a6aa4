//! Adapter implementations for the authentication backend port.

mod http;
mod memory;

pub use http::{HttpAuthGateway, LOGIN_PATH};
pub use memory::{InMemoryAuthGateway, RecordedLogin};
