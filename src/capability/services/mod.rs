//! Capability implementations and the per-call registry.

mod login;
mod registry;

pub use login::LoginCapability;
pub use registry::{
    Capability, CapabilityCatalog, CapabilityError, CapabilityRegistry, CapabilityResult,
};
