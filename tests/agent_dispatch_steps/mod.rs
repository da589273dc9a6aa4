//! Step definitions for agent dispatch BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
