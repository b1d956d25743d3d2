//! Customer dashboard: the landing screen after sign-in.

use leptos::prelude::*;

use crate::components::dashboard_navbar::DashboardNavbar;
use crate::state::session::use_session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let first_name = move || {
        session
            .get()
            .principal
            .map(|principal| {
                principal
                    .name
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_owned()
            })
            .unwrap_or_default()
    };

    view! {
        <div class="page page--app">
            <DashboardNavbar/>

            <main class="page__body">
                <header class="page__header">
                    <h1>{move || format!("Welcome back, {}!", first_name())}</h1>
                    <p>"What would you like to do today?"</p>
                </header>

                <section class="card-grid card-grid--actions">
                    <a class="action-card" href="/dashboard/analysis">
                        <span class="action-card__icon">"📷"</span>
                        <h2>"Colour Analysis"</h2>
                        <p>"Snap or upload a photo and find your seasonal palette."</p>
                    </a>
                    <a class="action-card" href="/dashboard/history">
                        <span class="action-card__icon">"🕘"</span>
                        <h2>"My History"</h2>
                        <p>"Look back at every analysis you've run."</p>
                    </a>
                    <a class="action-card" href="/dashboard/catalog">
                        <span class="action-card__icon">"🛍"</span>
                        <h2>"Product Catalog"</h2>
                        <p>"Browse products matched to each palette."</p>
                    </a>
                </section>

                <section class="card-grid card-grid--info">
                    <div class="info-card">
                        <h2>"Tips for a good photo"</h2>
                        <ul>
                            <li>"Face the light; daylight beats lamps."</li>
                            <li>"Skip make-up and glasses where you can."</li>
                            <li>"Pull hair away from your face."</li>
                            <li>"Use a plain background."</li>
                        </ul>
                    </div>
                    <div class="info-card">
                        <h2>"How the analysis works"</h2>
                        <p>
                            "Your photo is assessed for skin undertone and contrast, "
                            "then mapped to the closest of the four seasonal "
                            "palettes. Each result comes with a swatch set and an "
                            "explanation, and is saved to your history."
                        </p>
                    </div>
                </section>
            </main>
        </div>
    }
}
