//! Session state for the signed-in account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and account-aware components read this state to decide
//! between rendering, holding, and redirecting. The session token itself
//! lives in an HttpOnly cookie the browser manages; this state only
//! mirrors who the backend says is signed in.
//!
//! LIFECYCLE
//! =========
//! `loading` starts `true` and flips to `false` exactly once, when the
//! initial `/api/me` probe settles. Guards treat `loading` as "undecided"
//! and hold rendering rather than guessing; a guess either flashes a
//! protected page at a stranger or bounces a signed-in account to the
//! login page on every hard refresh.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::auth;
use crate::net::csrf;
use crate::net::http::ApiClient;
use crate::net::types::Principal;

/// Session state tracking the signed-in account and the initial probe.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub principal: Option<Principal>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            principal: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// Whether somebody is signed in. `false` while the probe is running.
    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    /// Whether the signed-in account is an admin.
    pub fn is_admin(&self) -> bool {
        self.principal
            .as_ref()
            .is_some_and(|principal| principal.role.is_admin())
    }
}

/// Installs the session context and kicks off the initial probe.
pub fn provide_session() {
    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "web")]
    leptos::task::spawn_local(async move {
        let client = ApiClient::new();
        resolve_session(&client, session).await;
    });
}

/// The session signal installed by [`provide_session`].
pub fn use_session() -> RwSignal<SessionState> {
    expect_context::<RwSignal<SessionState>>()
}

/// Probes `/api/me` once and settles the session either way.
///
/// A 401 is the normal signed-out answer and stays silent. Other failures
/// are logged and also settle as signed out; the account can still sign
/// in by hand when the backend comes back.
pub async fn resolve_session(client: &ApiClient, session: RwSignal<SessionState>) {
    csrf::bootstrap(client).await;
    let principal = match auth::fetch_me(client).await {
        Ok(principal) => Some(principal),
        Err(error) if error.is_unauthenticated() => None,
        Err(error) => {
            leptos::logging::log!("session probe failed: {error}");
            None
        }
    };
    session.update(|state| {
        state.principal = principal;
        state.loading = false;
    });
}

/// Installs a freshly authenticated account. Never touches `loading`:
/// only the probe settles it.
pub fn install_principal(session: RwSignal<SessionState>, principal: Principal) {
    session.update(|state| state.principal = Some(principal));
}

/// Signs out: tells the backend, then clears the account locally whether
/// or not the backend acknowledged. The cookie may already be gone, and a
/// stale local session is worse than a stale server one.
pub async fn sign_out(client: &ApiClient, session: RwSignal<SessionState>) {
    if let Err(error) = auth::logout(client).await {
        leptos::logging::warn!("logout request failed: {error}");
    }
    session.update(|state| state.principal = None);
}
