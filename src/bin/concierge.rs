//! Answers a single free-text request from the command line.
//!
//! Usage:
//!
//! ```text
//! concierge [--credential TOKEN] <TEXT>...
//! ```
//!
//! The reply is written to stdout. Logs go to stderr and are filtered by
//! `RUST_LOG` (default `info`). `OPENAI_API_KEY` must be set; the
//! authentication backend is configured through `CONCIERGE_AUTH_BASE_URL`
//! and `CONCIERGE_AUTH_TIMEOUT_SECS`.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use concierge::agent::adapters::{ChatModelClientFactory, EnvConfigSource};
use concierge::agent::services::AgentService;
use concierge::capability::adapters::HttpAuthGateway;
use concierge::capability::domain::Credential;
use concierge::config::GatewayConfig;
use mockable::DefaultClock;
use tracing_subscriber::EnvFilter;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "concierge", version, about = "Run a free-text request through the agent")]
struct Args {
    /// Bearer credential forwarded to the authentication backend.
    #[arg(long, env = "CONCIERGE_CREDENTIAL", hide_env_values = true)]
    credential: Option<String>,

    /// Request text, for example: login 'user@example.com|secret'
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let credential = args
        .credential
        .as_deref()
        .map(Credential::new)
        .transpose()
        .context("invalid --credential value")?;

    let gateway_config =
        GatewayConfig::from_env().context("failed to load CONCIERGE_* configuration")?;
    tracing::debug!(
        auth_base_url = %gateway_config.auth_base_url,
        auth_timeout_secs = gateway_config.auth_timeout_secs,
        "configuration loaded"
    );
    let gateway = HttpAuthGateway::from_config(&gateway_config)
        .context("failed to build authentication client")?;

    let service = AgentService::new(
        Arc::new(EnvConfigSource::new()),
        Arc::new(ChatModelClientFactory::new(Arc::new(DefaultClock))),
        Arc::new(gateway),
    );

    let reply = service.invoke(&args.text.join(" "), credential).await;
    writeln!(std::io::stdout().lock(), "{reply}").context("failed to write reply")?;
    Ok(())
}
