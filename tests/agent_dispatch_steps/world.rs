//! Shared world state for agent dispatch BDD scenarios.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use concierge::agent::{
    adapters::{ChatModelClientFactory, StaticConfigSource},
    domain::{AgentClient, ApiKey, ModelSettings},
    ports::{AgentClientFactory, AgentClientFactoryResult},
    services::AgentService,
};
use concierge::capability::{
    adapters::InMemoryAuthGateway,
    domain::{Credential, LoginSession, UserProfile},
};
use concierge::config::ModelConfig;
use mockable::DefaultClock;
use rstest::fixture;

/// Client factory that counts constructions.
///
/// Each construction is delayed so concurrent callers overlap.
pub struct CountingFactory {
    inner: ChatModelClientFactory<DefaultClock>,
    calls: AtomicUsize,
}

impl CountingFactory {
    /// Number of clients constructed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AgentClientFactory for CountingFactory {
    async fn create(
        &self,
        api_key: ApiKey,
        settings: ModelSettings,
    ) -> AgentClientFactoryResult<AgentClient> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(25)).await;
        self.inner.create(api_key, settings).await
    }
}

/// Service type used by the BDD world.
pub type TestAgentService = AgentService<StaticConfigSource, CountingFactory, InMemoryAuthGateway>;

/// Scenario world for agent dispatch behaviour tests.
pub struct DispatchWorld {
    /// Configuration handed to the agent.
    pub config: Arc<StaticConfigSource>,
    /// Counting client factory.
    pub factory: Arc<CountingFactory>,
    /// In-memory authentication backend.
    pub gateway: Arc<InMemoryAuthGateway>,
    /// The service under test.
    pub service: TestAgentService,
    /// Credential presented by the caller, if any.
    pub credential: Option<Credential>,
    /// Replies from the most recent `When` step.
    pub replies: Vec<String>,
}

impl DispatchWorld {
    /// Creates a world whose agent has no API key configured.
    #[must_use]
    pub fn new() -> Self {
        let config = Arc::new(StaticConfigSource::new(ModelConfig::default()));
        let factory = Arc::new(CountingFactory {
            inner: ChatModelClientFactory::new(Arc::new(DefaultClock)),
            calls: AtomicUsize::new(0),
        });
        let gateway = Arc::new(InMemoryAuthGateway::new());
        let service = AgentService::new(
            Arc::clone(&config),
            Arc::clone(&factory),
            Arc::clone(&gateway),
        );
        Self {
            config,
            factory,
            gateway,
            service,
            credential: None,
            replies: Vec::new(),
        }
    }

    /// Returns the most recent reply.
    pub fn last_reply(&self) -> Result<&str, eyre::Report> {
        self.replies
            .last()
            .map(String::as_str)
            .ok_or_else(|| eyre::eyre!("no reply recorded in scenario world"))
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds the session the backend issues for `identifier`.
pub fn session_for(identifier: &str, token: &str) -> LoginSession {
    let username = identifier.split('@').next().unwrap_or(identifier).to_owned();
    LoginSession {
        token: token.to_owned(),
        user: UserProfile {
            username,
            user_id: 1,
            email: identifier.to_owned(),
            rol: "user".to_owned(),
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
        },
    }
}
