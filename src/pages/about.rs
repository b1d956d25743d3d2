//! Public about page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page page--public">
            <Navbar/>

            <section class="hero hero--compact">
                <h1>"About ChromaLens"</h1>
                <p class="hero__lead">
                    "Personal colour analysis used to mean booking a consultant "
                    "and a studio session. We wanted the same answer from a "
                    "single photo."
                </p>
            </section>

            <section class="prose">
                <h2>"What is personal colour analysis?"</h2>
                <p>
                    "Everyone's skin carries an undertone, and some colours play "
                    "along with it while others fight it. Seasonal colour analysis "
                    "groups flattering combinations into four palettes named after "
                    "the seasons. Wearing colours from your own palette makes skin "
                    "look clearer and brighter; wearing against it does the "
                    "opposite."
                </p>

                <h2>"How the analysis works"</h2>
                <p>
                    "Your photo is assessed for skin undertone and contrast, then "
                    "mapped to the closest of the four palettes: winter clear, "
                    "summer cool, spring bright, or autumn warm. The result comes "
                    "with a swatch set and a short explanation of why it fits."
                </p>

                <h2>"What happens to my photo?"</h2>
                <p>
                    "Photos are uploaded only to run the analysis, and each result "
                    "is stored in your own history where you can review or delete "
                    "it at any time."
                </p>
            </section>

            <section class="cta">
                <h2>"Try it yourself"</h2>
                <a class="btn btn--primary btn--large" href="/register">
                    "Create an Account"
                </a>
            </section>
        </div>
    }
}
