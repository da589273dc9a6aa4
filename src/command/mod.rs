//! Free-text command recognition.
//!
//! The interpreter does no language understanding: a capability is requested
//! when its name appears in the text, and its single argument is taken from
//! the first quoted run (or a bare `identifier|secret` token).
//!
//! - Domain types in [`domain`]
//! - The pure interpreter in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
