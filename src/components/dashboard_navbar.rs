//! Navbar for the signed-in customer area.

use leptos::prelude::*;

#[cfg(feature = "web")]
use crate::net::http::ApiClient;
use crate::state::session;

/// Top navigation for the customer dashboard routes.
#[component]
pub fn DashboardNavbar() -> impl IntoView {
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
        ("/dashboard", "Dashboard"),
        ("/dashboard/analysis", "Colour Analysis"),
        ("/dashboard/catalog", "Product Catalog"),
    ];

    view! {
        <nav class="navbar navbar--dashboard">
            <a class="navbar__brand" href="/dashboard">
                <span class="navbar__logo" aria-hidden="true">"◐"</span>
                "ChromaLens"
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
                <a class="navbar__link navbar__link--account" href="/dashboard/profile">
                    {account_name}
                </a>
                <button class="btn btn--ghost" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
