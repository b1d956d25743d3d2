//! Analysis results: assigned palette, swatches and matching products.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::dashboard_navbar::DashboardNavbar;
use crate::components::product_card::ProductCard;
use crate::net::analysis;
use crate::net::http::ApiClient;
use crate::state::analysis::{AnalysisReport, use_analysis_report};
use crate::util::palette::Palette;

/// How many product picks to request for the assigned palette.
const RECOMMENDATION_LIMIT: usize = 8;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let report = use_analysis_report();

    // A cold visit has no report to show; send the visitor to start one.
    view! {
        {move || match report.get() {
            None => view! { <Redirect path="/dashboard/analysis"/> }.into_any(),
            Some(report) => view! { <ResultsView report=report/> }.into_any(),
        }}
    }
}

#[component]
fn ResultsView(report: AnalysisReport) -> impl IntoView {
    let AnalysisReport { image, outcome } = report;
    let palette_label = Palette::parse(&outcome.palette_name)
        .map(|palette| palette.label().to_owned())
        .unwrap_or_else(|| outcome.palette_name.clone());
    let wire_palette = outcome.palette_name.clone();
    // The analysis response sometimes carries its own picks; only ask the
    // recommendations endpoint when it did not.
    let carried = (!outcome.recommendations.is_empty()).then(|| outcome.recommendations.clone());
    let recommendations = LocalResource::new(move || {
        let palette = wire_palette.clone();
        let carried = carried.clone();
        async move {
            if let Some(products) = carried {
                return Ok(products);
            }
            let client = ApiClient::new();
            analysis::fetch_recommendations(&client, &palette, RECOMMENDATION_LIMIT).await
        }
    });

    view! {
        <div class="page page--app">
            <DashboardNavbar/>

            <main class="page__body">
                <div class="banner banner--success">
                    <h1>"Analysis Complete!"</h1>
                    <p>"Here is the palette that suits you best."</p>
                </div>

                <section class="results-summary">
                    {image
                        .map(|src| {
                            view! {
                                <div class="results-summary__photo">
                                    <img src=src alt="Analysed photo"/>
                                </div>
                            }
                        })}
                    <div class="results-summary__verdict">
                        <span class="badge badge--palette badge--large">{palette_label}</span>
                        {outcome
                            .undertone
                            .map(|undertone| {
                                view! { <p>"Undertone: " <strong>{undertone}</strong></p> }
                            })}
                        {outcome
                            .explanation
                            .map(|explanation| {
                                view! { <p class="results-summary__explanation">{explanation}</p> }
                            })}
                    </div>
                </section>

                <section class="results-colors">
                    <h2>"Your Colours"</h2>
                    <div class="results-colors__grid">
                        {outcome
                            .colors
                            .into_iter()
                            .map(|color| {
                                view! {
                                    <div class="color-tile">
                                        <span
                                            class="color-tile__swatch"
                                            style=format!("background-color: {color}")
                                        ></span>
                                        <span class="color-tile__hex">{color.clone()}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>

                <section class="results-picks">
                    <h2>"Products Picked for You"</h2>
                    <Suspense fallback=move || {
                        view! { <p class="page__status">"Finding matching products..."</p> }
                    }>
                        {move || {
                            recommendations
                                .get()
                                .map(|outcome| match outcome {
                                    Ok(products) if products.is_empty() => {
                                        view! {
                                            <p class="page__status">
                                                "No matching products yet. Check the catalog later."
                                            </p>
                                        }
                                            .into_any()
                                    }
                                    Ok(products) => {
                                        view! {
                                            <div class="product-grid">
                                                {products
                                                    .into_iter()
                                                    .map(|product| {
                                                        view! { <ProductCard product=product/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                    Err(error) => {
                                        view! {
                                            <p class="page__status page__status--error">
                                                {error.user_message()}
                                            </p>
                                        }
                                            .into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>

                <div class="results-actions">
                    <a class="btn btn--ghost" href="/dashboard/analysis">
                        "Run Another Analysis"
                    </a>
                    <a class="btn btn--primary" href="/dashboard/catalog">
                        "Browse the Catalog"
                    </a>
                </div>
            </main>
        </div>
    }
}
