//! Given steps for agent dispatch BDD scenarios.

use super::world::{DispatchWorld, session_for};
use concierge::capability::domain::Credential;
use concierge::config::ModelConfig;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("an agent configured with an API key")]
fn agent_with_api_key(world: &mut DispatchWorld) -> Result<(), eyre::Report> {
    world
        .config
        .replace(ModelConfig::default().with_api_key("sk-test"))
        .wrap_err("configure API key")
}

#[given("an agent without an API key")]
fn agent_without_api_key(world: &mut DispatchWorld) -> Result<(), eyre::Report> {
    world
        .config
        .replace(ModelConfig::default())
        .wrap_err("clear API key")
}

#[given(r#"an account "{identifier}" with secret "{secret}" issuing token "{token}""#)]
fn account_with_secret(
    world: &mut DispatchWorld,
    identifier: String,
    secret: String,
    token: String,
) -> Result<(), eyre::Report> {
    let session = session_for(&identifier, &token);
    world
        .gateway
        .add_account(identifier, secret, session)
        .wrap_err("register backend account")
}

#[given(r#"the caller holds credential "{token}""#)]
fn caller_holds_credential(world: &mut DispatchWorld, token: String) -> Result<(), eyre::Report> {
    world.credential = Some(Credential::new(token).wrap_err("build caller credential")?);
    Ok(())
}
