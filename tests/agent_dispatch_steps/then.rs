//! Then steps for agent dispatch BDD scenarios.

use super::world::DispatchWorld;
use concierge::agent::services::NO_ACTION_REPLY;
use rstest_bdd_macros::then;

#[then(r#"the reply contains "{fragment}""#)]
fn reply_contains(world: &DispatchWorld, fragment: String) -> Result<(), eyre::Report> {
    let reply = world.last_reply()?;
    if !reply.contains(&fragment) {
        return Err(eyre::eyre!("expected reply to contain {fragment:?}, got {reply:?}"));
    }
    Ok(())
}

#[then(r#"the reply carries session token "{token}""#)]
fn reply_carries_token(world: &DispatchWorld, token: String) -> Result<(), eyre::Report> {
    reply_contains(world, token_field(&token))
}

#[then(r#"every reply carries session token "{token}""#)]
fn every_reply_carries_token(world: &DispatchWorld, token: String) -> Result<(), eyre::Report> {
    let expected = token_field(&token);
    if world.replies.is_empty() {
        return Err(eyre::eyre!("no replies recorded in scenario world"));
    }
    if let Some(reply) = world.replies.iter().find(|reply| !reply.contains(&expected)) {
        return Err(eyre::eyre!("expected every reply to contain {expected:?}, got {reply:?}"));
    }
    Ok(())
}

#[then("the reply is the no-action message")]
fn reply_is_no_action(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let reply = world.last_reply()?;
    if reply != NO_ACTION_REPLY {
        return Err(eyre::eyre!("expected no-action reply, got {reply:?}"));
    }
    Ok(())
}

#[then("the number of model clients built is {count:usize}")]
fn clients_built(world: &DispatchWorld, count: usize) -> Result<(), eyre::Report> {
    let built = world.factory.calls();
    if built != count {
        return Err(eyre::eyre!("expected {count} model client(s), built {built}"));
    }
    Ok(())
}

#[then("the backend received no requests")]
fn backend_received_nothing(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let calls = world
        .gateway
        .calls()
        .map_err(|err| eyre::eyre!("read backend calls: {err}"))?;
    if !calls.is_empty() {
        return Err(eyre::eyre!("expected no backend requests, got {calls:?}"));
    }
    Ok(())
}

#[then(r#"the backend saw credential "{token}" for "{identifier}""#)]
fn backend_saw_credential(
    world: &DispatchWorld,
    token: String,
    identifier: String,
) -> Result<(), eyre::Report> {
    let calls = world
        .gateway
        .calls()
        .map_err(|err| eyre::eyre!("read backend calls: {err}"))?;
    let call = calls
        .iter()
        .find(|call| call.identifier == identifier)
        .ok_or_else(|| eyre::eyre!("backend saw no request for {identifier}"))?;
    if call.authorization.as_deref() != Some(token.as_str()) {
        return Err(eyre::eyre!(
            "expected credential {token:?} for {identifier}, got {:?}",
            call.authorization
        ));
    }
    Ok(())
}

fn token_field(token: &str) -> String {
    format!("\"token\":\"{token}\"")
}
