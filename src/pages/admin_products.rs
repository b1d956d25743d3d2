//! Admin product management: list, filter, delete.

#[cfg(test)]
#[path = "admin_products_test.rs"]
mod admin_products_test;

use leptos::prelude::*;

use crate::components::admin_navbar::AdminNavbar;
use crate::config;
use crate::net::http::ApiClient;
use crate::net::products;
use crate::net::types::{Product, ProductStats};
use crate::state::toasts::{self, use_toasts};
use crate::util::format::{format_price, group_thousands};
use crate::util::images::resolve_image_url;
use crate::util::palette::Palette;

/// Maps the filter dropdown to the query argument; `"all"` means no filter.
fn palette_filter(selected: &str) -> Option<&str> {
    if selected == "all" {
        None
    } else {
        Some(selected)
    }
}

/// Palette column text: tag names joined, or a dash for untagged products.
fn palette_summary(product: &Product) -> String {
    let names = product.palette_names();
    if names.is_empty() {
        "-".to_owned()
    } else {
        names.join(", ")
    }
}

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let toasts = use_toasts();
    let selected = RwSignal::new("all".to_owned());
    let search = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<i64>);
    let origin = config::backend_origin();

    let listing = LocalResource::new(move || {
        let palette = selected.get();
        let search = search.get();
        async move {
            let client = ApiClient::new();
            products::fetch_admin_products(&client, palette_filter(&palette), &search).await
        }
    });

    let confirm_delete = Callback::new(move |id: i64| {
        pending_delete.set(None);
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            let client = ApiClient::new();
            match products::delete_product(&client, id).await {
                Ok(()) => {
                    toasts::success(toasts, "Product deleted.");
                    listing.refetch();
                }
                Err(error) => toasts::error(toasts, error.user_message()),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = (toasts, id);
    });

    view! {
        <div class="page page--admin">
            <AdminNavbar/>

            <main class="page__body">
                <header class="page__header page__header--split">
                    <div>
                        <h1>"Manage Products"</h1>
                        <p>"The catalog as customers see it."</p>
                    </div>
                    <a class="btn btn--primary" href="/admin/products/add">
                        "Add Product"
                    </a>
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
                    <label class="filter-bar__field filter-bar__field--grow">
                        <span>"Search"</span>
                        <input
                            type="search"
                            placeholder="Name, brand or category"
                            prop:value=search
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                    </label>
                </div>

                <Suspense fallback=move || {
                    view! { <p class="page__status">"Loading products..."</p> }
                }>
                    {move || {
                        listing
                            .get()
                            .map(|outcome| match outcome {
                                Ok((products, stats)) => {
                                    view! {
                                        <StatsRow stats=stats/>
                                        <ProductTable
                                            products=products
                                            origin=origin.clone()
                                            pending_delete=pending_delete
                                        />
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
            </main>

            {move || {
                pending_delete
                    .get()
                    .map(|id| {
                        view! {
                            <div class="dialog-backdrop" on:click=move |_| pending_delete.set(None)>
                                <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                                    <h2>"Delete this product?"</h2>
                                    <p>"Customers will no longer see it. This cannot be undone."</p>
                                    <div class="dialog__actions">
                                        <button class="btn" on:click=move |_| pending_delete.set(None)>
                                            "Cancel"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| confirm_delete.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn StatsRow(stats: ProductStats) -> impl IntoView {
    view! {
        <section class="stat-grid stat-grid--compact">
            <div class="stat-card">
                <span class="stat-card__label">"Products"</span>
                <span class="stat-card__value">{group_thousands(stats.total_products)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Units in Stock"</span>
                <span class="stat-card__value">{group_thousands(stats.total_stock)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Categories"</span>
                <span class="stat-card__value">{group_thousands(stats.total_categories)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-card__label">"Palettes Covered"</span>
                <span class="stat-card__value">{group_thousands(stats.total_palettes)}</span>
            </div>
        </section>
    }
}

#[component]
fn ProductTable(
    products: Vec<Product>,
    origin: String,
    pending_delete: RwSignal<Option<i64>>,
) -> impl IntoView {
    if products.is_empty() {
        return view! { <p class="page__status">"No products match your filters."</p> }.into_any();
    }
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Image"</th>
                    <th>"Name"</th>
                    <th>"Category"</th>
                    <th>"Price"</th>
                    <th>"Stock"</th>
                    <th>"Palettes"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {products
                    .into_iter()
                    .map(|product| product_row(product, &origin, pending_delete))
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

fn product_row(
    product: Product,
    origin: &str,
    pending_delete: RwSignal<Option<i64>>,
) -> impl IntoView {
    let id = product.id;
    let image = product
        .image_url
        .as_deref()
        .map(|raw| resolve_image_url(origin, raw));
    let palettes = palette_summary(&product);

    view! {
        <tr>
            <td class="table__image">
                {match image {
                    Some(url) => {
                        view! { <img src=url alt=product.name.clone()/> }.into_any()
                    }
                    None => view! { <div class="table__placeholder"></div> }.into_any(),
                }}
            </td>
            <td>{product.name}</td>
            <td>{product.category}</td>
            <td>{format_price(product.price)}</td>
            <td>{product.stock.to_string()}</td>
            <td>{palettes}</td>
            <td class="table__actions">
                <a class="btn btn--small" href=format!("/admin/products/edit/{id}")>
                    "Edit"
                </a>
                <button
                    class="btn btn--danger btn--small"
                    on:click=move |_| pending_delete.set(Some(id))
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
