//! Chat model client factory.

use crate::agent::{
    domain::{AgentClient, ApiKey, ModelSettings},
    ports::{AgentClientFactory, AgentClientFactoryError, AgentClientFactoryResult},
};
use async_trait::async_trait;
use mockable::Clock;
use std::sync::Arc;

/// Highest sampling temperature the model service accepts.
const MAX_TEMPERATURE: f32 = 2.0;

/// Builds chat model clients stamped by an injected clock.
#[derive(Debug, Clone)]
pub struct ChatModelClientFactory<C>
where
    C: Clock + Send + Sync,
{
    clock: Arc<C>,
}

impl<C> ChatModelClientFactory<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a factory using `clock` for construction timestamps.
    #[must_use]
    pub const fn new(clock: Arc<C>) -> Self {
        Self { clock }
    }
}

#[async_trait]
impl<C> AgentClientFactory for ChatModelClientFactory<C>
where
    C: Clock + Send + Sync,
{
    async fn create(
        &self,
        api_key: ApiKey,
        settings: ModelSettings,
    ) -> AgentClientFactoryResult<AgentClient> {
        if !(0.0..=MAX_TEMPERATURE).contains(&settings.temperature()) {
            return Err(AgentClientFactoryError::Rejected(format!(
                "temperature {} is outside 0..={MAX_TEMPERATURE}",
                settings.temperature()
            )));
        }
        if settings.max_tokens() == 0 {
            return Err(AgentClientFactoryError::Rejected(
                "max_tokens must be positive".to_owned(),
            ));
        }

        let client = AgentClient::new(settings, api_key, &*self.clock);
        tracing::debug!(
            client_id = %client.id(),
            model = client.settings().model(),
            "chat model client constructed"
        );
        Ok(client)
    }
}
