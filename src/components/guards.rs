//! Route guards for the customer and admin areas.
//!
//! DESIGN
//! ======
//! Guards decide through the pure gate functions below, which the wrapper
//! components then translate into holds and redirects. The gates never
//! admit or reject anyone while the session probe is still running: a
//! premature decision either flashes a protected page at a stranger or
//! bounces a signed-in account to the login page on every hard refresh.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::{self, SessionState};

/// What a gate decided for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// The probe has not settled; hold rendering.
    Pending,
    /// Render the protected content.
    Allow,
    /// Send the visitor to the login page.
    ToLogin,
    /// Send a signed-in non-admin to the customer dashboard.
    ToDashboard,
}

/// Gate for routes any signed-in account may open.
pub fn authenticated_gate(state: &SessionState) -> GateOutcome {
    if state.loading {
        GateOutcome::Pending
    } else if state.is_authenticated() {
        GateOutcome::Allow
    } else {
        GateOutcome::ToLogin
    }
}

/// Gate for admin-only routes. A signed-in customer goes to their own
/// dashboard, where the admin login would only bounce them around.
pub fn admin_gate(state: &SessionState) -> GateOutcome {
    if state.loading {
        GateOutcome::Pending
    } else if state.is_admin() {
        GateOutcome::Allow
    } else if state.is_authenticated() {
        GateOutcome::ToDashboard
    } else {
        GateOutcome::ToLogin
    }
}

/// Wraps routes any signed-in account may open.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = session::use_session();

    view! {
        {move || match authenticated_gate(&session.get()) {
            GateOutcome::Pending => view! { <GateHold/> }.into_any(),
            GateOutcome::Allow => children().into_any(),
            GateOutcome::ToLogin => view! { <Redirect path="/login"/> }.into_any(),
            GateOutcome::ToDashboard => view! { <Redirect path="/dashboard"/> }.into_any(),
        }}
    }
}

/// Wraps admin-only routes.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = session::use_session();

    view! {
        {move || match admin_gate(&session.get()) {
            GateOutcome::Pending => view! { <GateHold/> }.into_any(),
            GateOutcome::Allow => children().into_any(),
            GateOutcome::ToLogin => view! { <Redirect path="/admin/login"/> }.into_any(),
            GateOutcome::ToDashboard => view! { <Redirect path="/dashboard"/> }.into_any(),
        }}
    }
}

/// Neutral hold shown while the session probe is undecided.
#[component]
fn GateHold() -> impl IntoView {
    view! {
        <div class="gate-hold">
            <p>"Checking your session..."</p>
        </div>
    }
}
