use super::*;
use crate::net::http::test_transport;
use crate::net::types::Role;
use futures::executor::block_on;

const ORIGIN: &str = "http://testhost";

fn client() -> ApiClient {
    test_transport::reset();
    ApiClient::with_origin(ORIGIN)
}

const USER_BODY: &str = r#"{"user":{"id":7,"name":"Ana Larasati","email":"ana@example.com","role":"customer"}}"#;

fn sample_principal(role: Role) -> Principal {
    Principal {
        id: 7,
        name: "Ana Larasati".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: None,
        role,
    }
}

// ============================================================
// Initial probe
// ============================================================

#[test]
fn resolve_session_installs_the_account_and_settles() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, USER_BODY);
    let session = RwSignal::new(SessionState::default());
    assert!(session.get_untracked().loading, "the probe starts undecided");

    block_on(resolve_session(&client, session));

    let state = session.get_untracked();
    assert!(!state.loading);
    assert_eq!(
        state.principal.map(|principal| principal.name),
        Some("Ana Larasati".to_owned())
    );
}

#[test]
fn resolve_session_bootstraps_before_probing() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, USER_BODY);
    let session = RwSignal::new(SessionState::default());

    block_on(resolve_session(&client, session));

    assert_eq!(
        test_transport::calls(),
        vec![
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("GET {ORIGIN}/api/me"),
        ]
    );
}

#[test]
fn resolve_session_settles_signed_out_on_401() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(401, r#"{"message":"Unauthenticated."}"#);
    let session = RwSignal::new(SessionState::default());

    block_on(resolve_session(&client, session));

    let state = session.get_untracked();
    assert!(!state.loading);
    assert!(state.principal.is_none());
}

#[test]
fn resolve_session_settles_signed_out_when_the_backend_is_down() {
    let client = client();
    test_transport::fail_next();
    test_transport::fail_next();
    let session = RwSignal::new(SessionState::default());

    block_on(resolve_session(&client, session));

    let state = session.get_untracked();
    assert!(!state.loading);
    assert!(state.principal.is_none());
}

// ============================================================
// Login and logout bookkeeping
// ============================================================

#[test]
fn install_principal_never_touches_loading() {
    let session = RwSignal::new(SessionState::default());

    install_principal(session, sample_principal(Role::Customer));

    let state = session.get_untracked();
    assert!(state.loading, "only the probe settles loading");
    assert!(state.is_authenticated());
}

#[test]
fn sign_out_clears_the_account_even_when_the_backend_refuses() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(500, "");
    let session = RwSignal::new(SessionState::default());
    install_principal(session, sample_principal(Role::Admin));

    block_on(sign_out(&client, session));

    assert!(session.get_untracked().principal.is_none());
}

// ============================================================
// Role checks
// ============================================================

#[test]
fn admin_detection_requires_the_admin_role() {
    let mut state = SessionState::default();
    assert!(!state.is_admin());

    state.principal = Some(sample_principal(Role::Customer));
    assert!(state.is_authenticated());
    assert!(!state.is_admin());

    state.principal = Some(sample_principal(Role::Admin));
    assert!(state.is_admin());
}
