//! Unit tests for capability registry and `login` behaviour.

use std::sync::Arc;

use crate::capability::{
    adapters::InMemoryAuthGateway,
    domain::{CapabilityDomainError, CapabilityName, Credential, LoginSession, UserProfile},
    ports::AuthGatewayError,
    services::{CapabilityCatalog, CapabilityError},
};
use rstest::{fixture, rstest};

struct TestContext {
    gateway: Arc<InMemoryAuthGateway>,
    catalog: CapabilityCatalog,
}

fn session(token: &str) -> LoginSession {
    LoginSession {
        token: token.to_owned(),
        user: UserProfile {
            username: "ana".to_owned(),
            user_id: 7,
            email: "ana@example.com".to_owned(),
            rol: "admin".to_owned(),
            first_name: "Ana".to_owned(),
            last_name: "Lopez".to_owned(),
            phone: "555-0100".to_owned(),
        },
    }
}

#[fixture]
fn context() -> TestContext {
    let gateway = Arc::new(InMemoryAuthGateway::new());
    gateway
        .add_account("ana@example.com", "hunter2", session("T-ana"))
        .expect("account registration should succeed");
    let catalog = CapabilityCatalog::new(gateway.clone());
    TestContext { gateway, catalog }
}

fn args(value: &str) -> Vec<String> {
    vec![value.to_owned()]
}

#[rstest]
fn registry_contains_login_only(context: TestContext) {
    let registry = context.catalog.build(None);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.names(), vec![&CapabilityName::login()]);
    assert_eq!(context.catalog.names(), vec![CapabilityName::login()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn login_returns_session_for_valid_pair(context: TestContext) {
    let registry = context.catalog.build(None);
    let login = registry
        .find(&CapabilityName::login())
        .expect("login should be registered");

    let output = login
        .invoke(&args("ana@example.com|hunter2"))
        .await
        .expect("login should succeed");

    let session = output.as_login().expect("login output");
    assert_eq!(session.token, "T-ana");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_secret_is_rejected_without_network_call(context: TestContext) {
    let registry = context.catalog.build(None);
    let login = registry
        .find(&CapabilityName::login())
        .expect("login should be registered");

    let result = login.invoke(&args("a|")).await;

    assert!(matches!(
        result,
        Err(CapabilityError::InvalidArguments {
            source: CapabilityDomainError::EmptySecret,
            ..
        })
    ));
    assert!(
        context
            .gateway
            .calls()
            .expect("calls should be readable")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn wrong_secret_surfaces_upstream_rejection(context: TestContext) {
    let registry = context.catalog.build(None);
    let login = registry
        .find(&CapabilityName::login())
        .expect("login should be registered");

    let result = login.invoke(&args("ana@example.com|wrong")).await;

    match result {
        Err(CapabilityError::Gateway(AuthGatewayError::Upstream { status, message })) => {
            assert_eq!(status, 401);
            assert_eq!(message, "bad credentials");
        }
        other => panic!("expected upstream rejection, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unreachable_backend_is_a_network_failure(context: TestContext) {
    context
        .gateway
        .set_unreachable(true)
        .expect("toggle should succeed");
    let registry = context.catalog.build(None);
    let login = registry
        .find(&CapabilityName::login())
        .expect("login should be registered");

    let result = login.invoke(&args("ana@example.com|hunter2")).await;

    assert!(matches!(
        result,
        Err(CapabilityError::Gateway(AuthGatewayError::Network(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bound_credential_is_injected_per_registry(context: TestContext) {
    let first = context
        .catalog
        .build(Some(Credential::new("token-a").expect("valid credential")));
    let second = context.catalog.build(None);

    for registry in [&first, &second] {
        registry
            .find(&CapabilityName::login())
            .expect("login should be registered")
            .invoke(&args("ana@example.com|hunter2"))
            .await
            .expect("login should succeed");
    }

    let calls = context.gateway.calls().expect("calls should be readable");
    let authorizations: Vec<_> = calls.iter().map(|call| call.authorization.as_deref()).collect();
    assert_eq!(authorizations, vec![Some("token-a"), None]);
}
