//! Command interpretation services.

mod interpreter;

pub use interpreter::CommandInterpreter;
