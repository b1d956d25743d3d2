//! Customer-facing product catalog with palette filtering.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use leptos::prelude::*;

use crate::components::dashboard_navbar::DashboardNavbar;
use crate::components::product_card::ProductCard;
use crate::net::http::ApiClient;
use crate::net::products;
use crate::net::types::Product;
use crate::util::palette::Palette;

/// Keeps the products whose palettes include `palette`; `"all"` keeps
/// everything. Matching ignores case because the backend mixes spellings.
fn filter_products(products: &[Product], palette: &str) -> Vec<Product> {
    if palette == "all" {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| {
            product
                .palette_names()
                .iter()
                .any(|name| name.eq_ignore_ascii_case(palette))
        })
        .cloned()
        .collect()
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let selected = RwSignal::new("all".to_owned());
    let catalog = LocalResource::new(|| async {
        let client = ApiClient::new();
        products::fetch_catalog(&client).await
    });

    view! {
        <div class="page page--app">
            <DashboardNavbar/>

            <main class="page__body">
                <header class="page__header">
                    <h1>"Product Catalog"</h1>
                    <p>"Products matched to each seasonal palette."</p>
                </header>

                <div class="filter-bar">
                    <label class="filter-bar__field">
                        <span>"Palette"</span>
                        <select
                            prop:value=selected
                            on:change=move |ev| selected.set(event_target_value(&ev))
                        >
                            <option value="all">"All Palettes"</option>
                            {Palette::ALL
                                .into_iter()
                                .map(|palette| {
                                    view! {
                                        <option value=palette.as_str()>{palette.label()}</option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>

                <Suspense fallback=move || {
                    view! { <p class="page__status">"Loading products..."</p> }
                }>
                    {move || {
                        catalog
                            .get()
                            .map(|outcome| match outcome {
                                Ok(all) => {
                                    let shown = filter_products(&all, &selected.get());
                                    if all.is_empty() {
                                        view! {
                                            <p class="page__status">
                                                "No products in the catalog yet."
                                            </p>
                                        }
                                            .into_any()
                                    } else if shown.is_empty() {
                                        view! {
                                            <p class="page__status">
                                                "No products match this palette yet."
                                            </p>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <p class="page__count">
                                                {format!("{} products found", shown.len())}
                                            </p>
                                            <div class="product-grid">
                                                {shown
                                                    .into_iter()
                                                    .map(|product| {
                                                        view! { <ProductCard product=product/> }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
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
            </main>
        </div>
    }
}
