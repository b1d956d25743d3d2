//! Staff sign-in page.
//!
//! Shares the `/api/login` endpoint with the customer page but only
//! admits accounts holding the admin role. A customer signing in here is
//! turned away locally; the guard on every admin route backstops that.

#[cfg(test)]
#[path = "admin_login_test.rs"]
mod admin_login_test;

use leptos::prelude::*;

#[cfg(feature = "web")]
use leptos::task::spawn_local;
#[cfg(feature = "web")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "web")]
use crate::net::auth;
#[cfg(feature = "web")]
use crate::net::http::ApiClient;
use crate::net::types::Principal;
#[cfg(feature = "web")]
use crate::state::session;
use crate::state::session::use_session;
use crate::state::toasts::{self, use_toasts};

/// Rejects non-admin accounts before they reach the admin area.
fn ensure_admin(principal: &Principal) -> Result<(), &'static str> {
    if principal.role.is_admin() {
        Ok(())
    } else {
        Err("This account has no admin access.")
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "web")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if email_value.trim().is_empty() || password_value.is_empty() {
            toasts::error(toasts, "Please fill in every field.");
            return;
        }
        busy.set(true);
        #[cfg(feature = "web")]
        {
            let navigate = navigate.clone();
            spawn_local(async move {
                let client = ApiClient::new();
                match auth::login(&client, email_value.trim(), &password_value).await {
                    Ok(principal) => match ensure_admin(&principal) {
                        Ok(()) => {
                            session::install_principal(session, principal);
                            toasts::success(toasts, "Welcome back!");
                            navigate("/admin/dashboard", Default::default());
                        }
                        Err(message) => {
                            toasts::error(toasts, message);
                            busy.set(false);
                        }
                    },
                    Err(error) => {
                        toasts::error(toasts, error.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = (session, email_value, password_value);
    };

    view! {
        <div class="page page--admin-entry">
            <div class="auth-card auth-card--admin">
                <h1>"ChromaLens Admin"</h1>
                <p class="auth-card__lead">"Staff access only."</p>

                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="admin@example.com"
                            prop:value=email
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            placeholder="Your password"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    <a href="/login">"Back to customer sign-in"</a>
                </p>
            </div>
        </div>
    }
}
