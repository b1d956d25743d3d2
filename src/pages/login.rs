//! Customer sign-in page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(feature = "web")]
use leptos::task::spawn_local;
#[cfg(feature = "web")]
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
#[cfg(feature = "web")]
use crate::net::auth;
#[cfg(feature = "web")]
use crate::net::http::ApiClient;
#[cfg(feature = "web")]
use crate::state::session;
use crate::state::session::use_session;
use crate::state::toasts::{self, use_toasts};

/// Checks the sign-in form before anything goes over the wire.
fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in every field.");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
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
        if let Err(message) = validate_login(&email_value, &password_value) {
            toasts::error(toasts, message);
            return;
        }
        busy.set(true);
        #[cfg(feature = "web")]
        {
            let navigate = navigate.clone();
            spawn_local(async move {
                let client = ApiClient::new();
                match auth::login(&client, email_value.trim(), &password_value).await {
                    Ok(principal) => {
                        session::install_principal(session, principal);
                        toasts::success(toasts, "Welcome back!");
                        navigate("/dashboard", Default::default());
                    }
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
        <div class="page page--public">
            <Navbar/>

            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__lead">"Sign in to continue your colour journey."</p>

                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Email"</span>
                        <input
                            type="email"
                            placeholder="you@example.com"
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
                    "Don't have an account? " <a href="/register">"Sign up"</a>
                </p>
                <p class="auth-card__switch auth-card__switch--muted">
                    <a href="/admin/login">"Staff sign-in"</a>
                </p>
            </div>
        </div>
    }
}
