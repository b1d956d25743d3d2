//! Public landing page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::util::palette::Palette;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="page page--public">
            <Navbar/>

            <section class="hero">
                <h1 class="hero__title">"Find the colours that were made for you"</h1>
                <p class="hero__lead">
                    "ChromaLens analyses a photo of your face and assigns you one of "
                    "four seasonal colour palettes, then matches it against a curated "
                    "beauty catalog."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--large" href="/register">
                        "Get Started"
                    </a>
                    <a class="btn btn--ghost btn--large" href="/about">
                        "Learn More"
                    </a>
                </div>
            </section>

            <section class="features">
                <h2>"Why ChromaLens?"</h2>
                <div class="features__grid">
                    <div class="feature-card">
                        <h3>"Personal Analysis"</h3>
                        <p>
                            "Your skin undertone is assessed from a single photo, "
                            "taken with your webcam or uploaded from your device."
                        </p>
                    </div>
                    <div class="feature-card">
                        <h3>"A Palette of Your Own"</h3>
                        <p>
                            "Every result comes with a swatch set you can take to "
                            "the mirror, the wardrobe, or the store."
                        </p>
                    </div>
                    <div class="feature-card">
                        <h3>"Matching Products"</h3>
                        <p>
                            "The catalog is tagged by palette, so recommendations "
                            "actually suit the colours you were assigned."
                        </p>
                    </div>
                </div>
            </section>

            <section class="steps">
                <h2>"How It Works"</h2>
                <ol class="steps__list">
                    <li class="step">
                        <span class="step__number">"1"</span>
                        <h3>"Create an account"</h3>
                        <p>"Sign up and log in. Your results are saved to your history."</p>
                    </li>
                    <li class="step">
                        <span class="step__number">"2"</span>
                        <h3>"Share a photo"</h3>
                        <p>"Use your webcam or upload a clear, well-lit photo of your face."</p>
                    </li>
                    <li class="step">
                        <span class="step__number">"3"</span>
                        <h3>"Get your palette"</h3>
                        <p>"See your seasonal palette, swatches, and matching products."</p>
                    </li>
                </ol>
            </section>

            <section class="palettes">
                <h2>"The Four Seasonal Palettes"</h2>
                <div class="palettes__grid">
                    {Palette::ALL
                        .into_iter()
                        .map(|palette| {
                            view! {
                                <div class="palette-card">
                                    <h3>{palette.label()}</h3>
                                    <p>{palette_blurb(palette)}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="cta">
                <h2>"Ready to find your best colours?"</h2>
                <a class="btn btn--primary btn--large" href="/register">
                    "Start Your Analysis"
                </a>
            </section>

            <footer class="footer">
                <span>"ChromaLens"</span>
                <nav class="footer__links">
                    <a href="/">"Home"</a>
                    <a href="/about">"About"</a>
                    <a href="/login">"Login"</a>
                    <a href="/register">"Sign Up"</a>
                </nav>
            </footer>
        </div>
    }
}

fn palette_blurb(palette: Palette) -> &'static str {
    match palette {
        Palette::WinterClear => "Cool undertones that shine in crisp, high-contrast colours.",
        Palette::SummerCool => "Soft, muted shades for cool undertones with low contrast.",
        Palette::SpringBright => "Warm undertones brought alive by fresh, vivid colours.",
        Palette::AutumnWarm => "Rich, earthy tones that flatter warm, golden undertones.",
    }
}
