//! Navbar for the admin area.

use leptos::prelude::*;

#[cfg(feature = "web")]
use crate::net::http::ApiClient;
use crate::state::session;

/// Top navigation for the admin routes.
#[component]
pub fn AdminNavbar() -> impl IntoView {
    let session = session::use_session();
    let pathname = leptos_router::hooks::use_location().pathname;

    let account_name = move || {
        session
            .get()
            .principal
            .map(|principal| principal.name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            let client = ApiClient::new();
            session::sign_out(&client, session).await;
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        });
    };

    let links = [
        ("/admin/dashboard", "Dashboard"),
        ("/admin/products", "Manage Products"),
        ("/admin/analysis-history", "Analysis History"),
    ];

    view! {
        <nav class="navbar navbar--admin">
            <a class="navbar__brand" href="/admin/dashboard">
                <span class="navbar__logo" aria-hidden="true">"◐"</span>
                "ChromaLens Admin"
            </a>
            <div class="navbar__links">
                {links
                    .into_iter()
                    .map(|(path, label)| {
                        view! {
                            <a
                                class="navbar__link"
                                class:navbar__link--active=move || pathname.get() == path
                                href=path
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <span class="navbar__link navbar__link--account">{account_name}</span>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
