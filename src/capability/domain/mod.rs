//! Domain model for capabilities and the `login` exchange.
//!
//! These types carry no transport concerns: the wire format of the
//! authentication backend lives in the HTTP adapter.

mod credential;
mod error;
mod login;
mod name;
mod output;
mod state;

pub use credential::Credential;
pub use error::CapabilityDomainError;
pub use login::{LoginCredentials, LoginSession, PAIR_SEPARATOR, UserProfile};
pub use name::CapabilityName;
pub use output::CapabilityOutput;
pub use state::{LoginAttempt, LoginState};
