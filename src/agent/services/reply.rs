//! Replies returned by the agent service.

use crate::capability::domain::CapabilityOutput;

/// Reply text for input that requests no capability.
pub const NO_ACTION_REPLY: &str =
    "No action taken: the request did not ask for a supported capability.";

/// Structured outcome of a dispatched request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentReply {
    /// No capability was requested.
    NoAction,
    /// A capability ran and produced data.
    Completed(CapabilityOutput),
}

impl AgentReply {
    /// Renders the reply as the text returned to callers.
    ///
    /// Capability data is rendered as JSON so the UI layer can pick out the
    /// session token and user attributes.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::NoAction => NO_ACTION_REPLY.to_owned(),
            Self::Completed(output) => serde_json::to_string(output)
                .unwrap_or_else(|err| format!("Error processing query: {err}")),
        }
    }
}
