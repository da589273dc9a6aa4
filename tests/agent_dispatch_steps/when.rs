//! When steps for agent dispatch BDD scenarios.

use super::world::{DispatchWorld, run_async};
use concierge::config::ModelConfig;
use eyre::WrapErr;
use futures::future::join_all;
use rstest_bdd_macros::when;

#[when(r#"the agent is asked "{text}""#)]
fn agent_is_asked(world: &mut DispatchWorld, text: String) {
    let reply = run_async(world.service.invoke(&text, world.credential.clone()));
    world.replies = vec![reply];
}

#[when(r#"{count:usize} callers ask "{text}" at the same time"#)]
fn callers_ask_concurrently(world: &mut DispatchWorld, count: usize, text: String) {
    let service = &world.service;
    let request_text = text.as_str();
    let credential = world.credential.clone();
    let requests = (0..count).map(move |_| service.invoke(request_text, credential.clone()));
    world.replies = run_async(join_all(requests));
}

#[when("an API key is configured")]
fn api_key_is_configured(world: &mut DispatchWorld) -> Result<(), eyre::Report> {
    world
        .config
        .replace(ModelConfig::default().with_api_key("sk-test"))
        .wrap_err("configure API key")
}
