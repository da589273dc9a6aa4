//! Domain model for parsed commands.

mod error;
mod parsed;

pub use error::CommandError;
pub use parsed::ParsedCommand;
