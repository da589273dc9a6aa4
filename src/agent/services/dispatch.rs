//! Single-flight initialisation and dispatch for the agent.
//!
//! Initialisation is memoised as a shared future guarded by a mutex. The
//! first caller to find no client starts an attempt; callers arriving while it
//! runs await the same attempt and see the same outcome. A successful runtime
//! is published to a [`OnceLock`] and read without locking afterwards. A
//! failed attempt is cleared under the same mutex that registered it, and only
//! if it is still the registered attempt, so a late waiter of a failed attempt
//! cannot clear a newer one. A panic during construction is caught inside the
//! shared future and settles the attempt as an ordinary failure.

use crate::agent::{
    domain::{AgentClient, ApiKey, InitError, ModelSettings},
    ports::{AgentClientFactory, AgentClientFactoryError, ConfigSource, ConfigSourceError},
    services::AgentReply,
};
use crate::capability::{
    domain::{CapabilityName, Credential},
    ports::AuthGateway,
    services::{CapabilityCatalog, CapabilityError},
};
use crate::command::{domain::CommandError, services::CommandInterpreter};
use crate::config::API_KEY_VARIABLE;
use futures::future::{BoxFuture, FutureExt, Shared};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use thiserror::Error;

/// Service-level errors for dispatch.
#[derive(Debug, Clone, Error)]
pub enum AgentServiceError {
    /// The agent could not be initialised.
    #[error(transparent)]
    Init(#[from] InitError),
    /// The text named a capability but its arguments could not be extracted.
    #[error(transparent)]
    Command(#[from] CommandError),
    /// The capability failed.
    #[error(transparent)]
    Capability(#[from] CapabilityError),
    /// The interpreter recognised a capability the registry does not hold.
    #[error("capability '{0}' is not available")]
    UnknownCapability(CapabilityName),
}

/// Result type for agent service operations.
pub type AgentServiceResult<T> = Result<T, AgentServiceError>;

impl From<ConfigSourceError> for InitError {
    fn from(err: ConfigSourceError) -> Self {
        match err {
            ConfigSourceError::Unavailable(source) => Self::ConfigUnavailable(source),
        }
    }
}

impl From<AgentClientFactoryError> for InitError {
    fn from(err: AgentClientFactoryError) -> Self {
        match err {
            AgentClientFactoryError::Rejected(reason) => Self::InvalidConfig(reason),
            AgentClientFactoryError::Construction(source) => Self::ClientConstruction(source),
        }
    }
}

/// Everything built by one successful initialisation.
struct AgentRuntime {
    client: Arc<AgentClient>,
    catalog: CapabilityCatalog,
}

type InitOutcome = Result<Arc<AgentRuntime>, InitError>;
type SharedInit = Shared<BoxFuture<'static, InitOutcome>>;

struct PendingInit {
    attempt: u64,
    future: SharedInit,
}

#[derive(Default)]
struct InitSlot {
    attempts_started: u64,
    in_flight: Option<PendingInit>,
}

enum Join {
    Ready(Arc<AgentRuntime>),
    Wait(u64, SharedInit),
}

struct Dependencies<S, F, G> {
    config_source: Arc<S>,
    client_factory: Arc<F>,
    gateway: Arc<G>,
}

/// Agent entry point shared by all callers.
///
/// Construct one per process and hand it out behind an [`Arc`].
pub struct AgentService<S, F, G>
where
    S: ConfigSource + 'static,
    F: AgentClientFactory + 'static,
    G: AuthGateway + 'static,
{
    dependencies: Arc<Dependencies<S, F, G>>,
    interpreter: CommandInterpreter,
    runtime: OnceLock<Arc<AgentRuntime>>,
    slot: Mutex<InitSlot>,
}

impl<S, F, G> AgentService<S, F, G>
where
    S: ConfigSource + 'static,
    F: AgentClientFactory + 'static,
    G: AuthGateway + 'static,
{
    /// Creates an uninitialised service.
    ///
    /// Nothing is constructed until the first call to [`Self::initialize`],
    /// [`Self::dispatch`], or [`Self::invoke`].
    #[must_use]
    pub fn new(config_source: Arc<S>, client_factory: Arc<F>, gateway: Arc<G>) -> Self {
        Self {
            dependencies: Arc::new(Dependencies {
                config_source,
                client_factory,
                gateway,
            }),
            interpreter: CommandInterpreter::default(),
            runtime: OnceLock::new(),
            slot: Mutex::new(InitSlot::default()),
        }
    }

    /// Returns the published client, if initialisation has succeeded.
    #[must_use]
    pub fn client(&self) -> Option<Arc<AgentClient>> {
        self.runtime
            .get()
            .map(|runtime| Arc::clone(&runtime.client))
    }

    /// Ensures the client is constructed and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`InitError`] when this attempt fails. The failure is shared
    /// with every caller that joined the same attempt and is not cached.
    pub async fn initialize(&self) -> Result<Arc<AgentClient>, InitError> {
        let runtime = self.runtime().await?;
        Ok(Arc::clone(&runtime.client))
    }

    /// Interprets `input` and runs the requested capability, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AgentServiceError`] when initialisation, interpretation, or
    /// the capability fails.
    pub async fn dispatch(
        &self,
        input: &str,
        credential: Option<Credential>,
    ) -> AgentServiceResult<AgentReply> {
        let runtime = self.runtime().await?;
        let parsed = self.interpreter.parse(input)?;
        let Some(name) = parsed.capability() else {
            tracing::debug!(client_id = %runtime.client.id(), "no capability requested");
            return Ok(AgentReply::NoAction);
        };

        let registry = runtime.catalog.build(credential);
        let capability = registry
            .find(name)
            .ok_or_else(|| AgentServiceError::UnknownCapability(*name))?;
        tracing::debug!(client_id = %runtime.client.id(), capability = %name, "dispatching capability");
        let output = capability.invoke(parsed.args()).await?;
        Ok(AgentReply::Completed(output))
    }

    /// Answers `input`, always with a string.
    ///
    /// Failures of any kind, including a panic inside a capability, are
    /// rendered as a descriptive message instead of being propagated.
    pub async fn invoke(&self, input: &str, credential: Option<Credential>) -> String {
        let outcome = AssertUnwindSafe(self.dispatch(input, credential))
            .catch_unwind()
            .await;
        match outcome {
            Ok(Ok(reply)) => reply.render(),
            Ok(Err(AgentServiceError::Init(err))) => format!("Error initializing agent: {err}"),
            Ok(Err(err)) => format!("Error processing query: {err}"),
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                tracing::error!(panic = %message, "agent dispatch panicked");
                format!("Error processing query: {message}")
            }
        }
    }

    /// Discards the client and any attempt in flight.
    ///
    /// Requires exclusive access, so no caller can observe a half-reset
    /// service. The next call constructs a new client.
    pub fn reset(&mut self) {
        self.runtime = OnceLock::new();
        let slot = self.slot.get_mut().unwrap_or_else(PoisonError::into_inner);
        slot.in_flight = None;
        tracing::info!("agent service reset");
    }

    async fn runtime(&self) -> Result<Arc<AgentRuntime>, InitError> {
        if let Some(runtime) = self.runtime.get() {
            return Ok(Arc::clone(runtime));
        }

        let (attempt, future) = match self.join_or_start() {
            Join::Ready(runtime) => return Ok(runtime),
            Join::Wait(attempt, future) => (attempt, future),
        };
        let outcome = future.await;
        self.settle(attempt, &outcome);
        outcome
    }

    fn join_or_start(&self) -> Join {
        let mut slot = self.lock_slot();
        if let Some(runtime) = self.runtime.get() {
            return Join::Ready(Arc::clone(runtime));
        }
        if let Some(pending) = slot.in_flight.as_ref() {
            return Join::Wait(pending.attempt, pending.future.clone());
        }

        slot.attempts_started += 1;
        let attempt = slot.attempts_started;
        let future = AssertUnwindSafe(construct(Arc::clone(&self.dependencies), attempt))
            .catch_unwind()
            .map(move |outcome| {
                outcome.unwrap_or_else(|panic| {
                    let message = panic_message(panic.as_ref());
                    tracing::error!(attempt, panic = %message, "agent initialisation panicked");
                    Err(InitError::Panicked(message))
                })
            })
            .boxed()
            .shared();
        slot.in_flight = Some(PendingInit {
            attempt,
            future: future.clone(),
        });
        Join::Wait(attempt, future)
    }

    fn settle(&self, attempt: u64, outcome: &InitOutcome) {
        let mut slot = self.lock_slot();
        let is_current = slot
            .in_flight
            .as_ref()
            .is_some_and(|pending| pending.attempt == attempt);
        if !is_current {
            return;
        }

        match outcome {
            Ok(runtime) => {
                if self.runtime.set(Arc::clone(runtime)).is_err() {
                    tracing::debug!(attempt, "runtime already published");
                }
            }
            Err(err) => tracing::warn!(attempt, error = %err, "agent initialisation failed"),
        }
        slot.in_flight = None;
    }

    fn lock_slot(&self) -> MutexGuard<'_, InitSlot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

async fn construct<S, F, G>(
    dependencies: Arc<Dependencies<S, F, G>>,
    attempt: u64,
) -> InitOutcome
where
    S: ConfigSource + 'static,
    F: AgentClientFactory + 'static,
    G: AuthGateway + 'static,
{
    tracing::info!(attempt, "initialising agent");
    let config = dependencies.config_source.load()?;
    let api_key = config
        .api_key
        .as_deref()
        .and_then(ApiKey::new)
        .ok_or(InitError::MissingConfig {
            variable: API_KEY_VARIABLE,
        })?;
    let settings = ModelSettings::deterministic(&config.model)?;
    let client = dependencies
        .client_factory
        .create(api_key, settings)
        .await?;

    let gateway = Arc::clone(&dependencies.gateway);
    let catalog = CapabilityCatalog::new(gateway);
    tracing::info!(
        attempt,
        client_id = %client.id(),
        model = client.settings().model(),
        capabilities = ?catalog.names(),
        "agent initialised"
    );

    Ok(Arc::new(AgentRuntime {
        client: Arc::new(client),
        catalog,
    }))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unexpected internal failure".to_owned())
}
