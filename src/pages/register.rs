//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

#[cfg(feature = "web")]
use leptos::task::spawn_local;
#[cfg(feature = "web")]
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
#[cfg(feature = "web")]
use crate::net::auth;
use crate::net::auth::RegistrationPayload;
#[cfg(feature = "web")]
use crate::net::http::ApiClient;
use crate::state::toasts::{self, use_toasts};

/// Checks the registration form before anything goes over the wire.
///
/// The backend re-validates everything; these checks only catch the
/// mistakes worth a round trip to avoid.
fn validate_registration(payload: &RegistrationPayload) -> Result<(), &'static str> {
    let filled = !payload.full_name.trim().is_empty()
        && !payload.email.trim().is_empty()
        && !payload.phone.trim().is_empty()
        && !payload.password.is_empty()
        && !payload.password_confirmation.is_empty();
    if !filled {
        return Err("Please fill in every field.");
    }
    if payload.password != payload.password_confirmation {
        return Err("The passwords don't match.");
    }
    if payload.password.chars().count() < 8 {
        return Err("Passwords need at least 8 characters.");
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = use_toasts();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "web")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = RegistrationPayload {
            full_name: full_name.get_untracked().trim().to_owned(),
            email: email.get_untracked().trim().to_owned(),
            phone: phone.get_untracked().trim().to_owned(),
            password: password.get_untracked(),
            password_confirmation: confirmation.get_untracked(),
        };
        if let Err(message) = validate_registration(&payload) {
            toasts::error(toasts, message);
            return;
        }
        busy.set(true);
        #[cfg(feature = "web")]
        {
            let navigate = navigate.clone();
            spawn_local(async move {
                let client = ApiClient::new();
                match auth::register(&client, &payload).await {
                    Ok(()) => {
                        toasts::success(toasts, "Account created! Please sign in.");
                        navigate("/login", Default::default());
                    }
                    Err(error) => {
                        toasts::error(toasts, error.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    view! {
        <div class="page page--public">
            <Navbar/>

            <div class="auth-card">
                <h1>"Create Your Account"</h1>
                <p class="auth-card__lead">"Discover the palette that was made for you."</p>

                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Full Name"</span>
                        <input
                            type="text"
                            placeholder="Your name"
                            prop:value=full_name
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
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
                        <span>"Phone Number"</span>
                        <input
                            type="tel"
                            placeholder="0812 3456 7890"
                            prop:value=phone
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Password"</span>
                        <input
                            type="password"
                            placeholder="At least 8 characters"
                            prop:value=password
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Confirm Password"</span>
                        <input
                            type="password"
                            placeholder="Repeat your password"
                            prop:value=confirmation
                            on:input=move |ev| confirmation.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=busy>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
