//! Application services for agent initialisation and dispatch.

mod dispatch;
mod reply;

pub use dispatch::{AgentService, AgentServiceError, AgentServiceResult};
pub use reply::{AgentReply, NO_ACTION_REPLY};
