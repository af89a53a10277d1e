//! Sign-up flow against the simulated account service.

use std::time::Duration;

use force_core::services::SimulatedAccountService;
use force_core::signup::REGISTRATION_FAILED;
use force_core::{AccountService, Route, ServiceConfig, ServiceRegistry, SignUpFlow, SignUpForm};
use pretty_assertions::assert_eq;

fn form(email: &str) -> SignUpForm {
    SignUpForm {
        email: email.to_string(),
        password: "s3cret-pass".to_string(),
        confirm_password: "s3cret-pass".to_string(),
    }
}

/// Routes log output through the test harness so failures show the warnings.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

async fn submit(
    flow: &mut SignUpFlow,
    service: &dyn AccountService,
) -> Option<Route> {
    let request = flow.begin()?;
    let result = service.create_account(request).await;
    flow.finish(result)
}

#[tokio::test(start_paused = true)]
async fn successful_signup_navigates_to_onboarding() {
    let registry = ServiceRegistry::with_builtin_backends();
    let service = registry.create(&ServiceConfig::default()).await.unwrap();
    let mut flow = SignUpFlow::new();
    flow.edit(form("ada@example.com"));

    let next = submit(&mut flow, service.as_ref()).await;

    assert_eq!(next, Some(Route::Onboarding));
    assert_eq!(flow.failure(), None);
}

#[tokio::test]
async fn duplicate_email_shows_generic_failure_and_allows_retry() {
    let _guard = init_test_tracing();
    let service = SimulatedAccountService::new(Duration::ZERO);
    let mut first = SignUpFlow::new();
    first.edit(form("ada@example.com"));
    submit(&mut first, &service).await;

    let mut second = SignUpFlow::new();
    second.edit(form("ada@example.com"));
    let next = submit(&mut second, &service).await;

    assert_eq!(next, None);
    assert_eq!(second.failure(), Some(REGISTRATION_FAILED));

    second.edit(form("lovelace@example.com"));
    let retry = submit(&mut second, &service).await;

    assert_eq!(retry, Some(Route::Onboarding));
    assert_eq!(service.accounts().await.len(), 2);
}

#[tokio::test]
async fn configured_failure_keeps_form_editable() {
    let config = ServiceConfig {
        latency_ms: 0,
        fail_signups: true,
        ..ServiceConfig::default()
    };
    let service = ServiceRegistry::with_builtin_backends()
        .create(&config)
        .await
        .unwrap();
    let mut flow = SignUpFlow::new();
    flow.edit(form("ada@example.com"));

    let next = submit(&mut flow, service.as_ref()).await;

    assert_eq!(next, None);
    assert_eq!(flow.failure(), Some(REGISTRATION_FAILED));
    assert_eq!(flow.form(), &form("ada@example.com"));
    assert!(flow.can_submit());
}
