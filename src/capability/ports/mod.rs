//! Port contracts for capability side effects.

mod gateway;

pub use gateway::{AuthGateway, AuthGatewayError, AuthGatewayResult};
