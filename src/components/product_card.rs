//! Product card for the catalog and recommendation grids.

use leptos::prelude::*;

use crate::config;
use crate::net::types::Product;
use crate::util::format;
use crate::util::images;

/// A single product card. Backend-relative image paths are resolved
/// against the configured backend origin.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let image = product
        .image_url
        .as_deref()
        .map(|raw| images::resolve_image_url(&config::backend_origin(), raw));
    let palettes = product.palette_names();
    let price = format::format_price(product.price);
    let alt = product.name.clone();

    view! {
        <div class="product-card">
            {match image {
                Some(src) => {
                    view! { <img class="product-card__image" src=src alt=alt/> }.into_any()
                }
                None => {
                    view! { <div class="product-card__image product-card__image--empty"></div> }
                        .into_any()
                }
            }}
            <div class="product-card__body">
                <span class="product-card__brand">
                    {product.brand.clone().unwrap_or_default()}
                </span>
                <h3 class="product-card__name">{product.name}</h3>
                <p class="product-card__category">{product.category}</p>
                <div class="product-card__palettes">
                    {palettes
                        .into_iter()
                        .map(|palette| view! { <span class="badge">{palette}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <span class="product-card__price">{price}</span>
            </div>
        </div>
    }
}
