//! Public navbar for the landing, about and auth pages.

use leptos::prelude::*;

/// Top navigation for visitors who are not (or not yet) signed in.
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = leptos_router::hooks::use_location().pathname;

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                <span class="navbar__logo" aria-hidden="true">"◐"</span>
                "ChromaLens"
            </a>
            <div class="navbar__links">
                <a
                    class="navbar__link"
                    class:navbar__link--active=move || pathname.get() == "/"
                    href="/"
                >
                    "Home"
                </a>
                <a
                    class="navbar__link"
                    class:navbar__link--active=move || pathname.get() == "/about"
                    href="/about"
                >
                    "About"
                </a>
                <a class="btn btn--ghost" href="/login">
                    "Login"
                </a>
                <a class="btn btn--primary" href="/register">
                    "Sign Up"
                </a>
            </div>
        </nav>
    }
}
