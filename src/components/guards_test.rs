use super::*;
use crate::net::types::{Principal, Role};

fn principal(role: Role) -> Principal {
    Principal {
        id: 7,
        name: "Ana Larasati".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: None,
        role,
    }
}

fn probing() -> SessionState {
    SessionState::default()
}

fn signed_out() -> SessionState {
    SessionState {
        principal: None,
        loading: false,
    }
}

fn signed_in(role: Role) -> SessionState {
    SessionState {
        principal: Some(principal(role)),
        loading: false,
    }
}

// ============================================================
// Loading holds
// ============================================================

#[test]
fn both_gates_hold_while_the_probe_runs() {
    assert_eq!(authenticated_gate(&probing()), GateOutcome::Pending);
    assert_eq!(admin_gate(&probing()), GateOutcome::Pending);
}

#[test]
fn gates_hold_even_when_an_account_landed_early() {
    // A login submitted before the probe settles leaves a principal in a
    // still-loading state; the gates keep waiting for the probe.
    let state = SessionState {
        principal: Some(principal(Role::Admin)),
        loading: true,
    };
    assert_eq!(authenticated_gate(&state), GateOutcome::Pending);
    assert_eq!(admin_gate(&state), GateOutcome::Pending);
}

// ============================================================
// Authenticated gate
// ============================================================

#[test]
fn authenticated_gate_sends_strangers_to_login() {
    assert_eq!(authenticated_gate(&signed_out()), GateOutcome::ToLogin);
}

#[test]
fn authenticated_gate_admits_any_signed_in_account() {
    assert_eq!(
        authenticated_gate(&signed_in(Role::Customer)),
        GateOutcome::Allow
    );
    assert_eq!(
        authenticated_gate(&signed_in(Role::Admin)),
        GateOutcome::Allow
    );
}

// ============================================================
// Admin gate
// ============================================================

#[test]
fn admin_gate_admits_only_admins() {
    assert_eq!(admin_gate(&signed_in(Role::Admin)), GateOutcome::Allow);
}

#[test]
fn admin_gate_reroutes_signed_in_customers_to_their_dashboard() {
    assert_eq!(
        admin_gate(&signed_in(Role::Customer)),
        GateOutcome::ToDashboard
    );
}

#[test]
fn admin_gate_sends_strangers_to_login() {
    assert_eq!(admin_gate(&signed_out()), GateOutcome::ToLogin);
}
