//! Add/edit product form for the admin area.
//!
//! The same page serves both modes: an `:id` route param switches it to
//! edit, which loads the admin listing and prefills from the matching
//! product. The backend has no single-product read, so the listing is the
//! lookup.

#[cfg(test)]
#[path = "admin_product_form_test.rs"]
mod admin_product_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[cfg(feature = "web")]
use leptos::task::spawn_local;
#[cfg(feature = "web")]
use leptos_router::hooks::use_navigate;

use crate::components::admin_navbar::AdminNavbar;
use crate::net::http::{ApiClient, ApiError, FormPayload};
use crate::net::products;
use crate::net::types::Product;
use crate::state::toasts::{self, use_toasts};
use crate::util::palette::Palette;

/// The form as typed, numbers still raw strings.
#[derive(Clone, Debug, Default, PartialEq)]
struct ProductForm {
    name: String,
    category: String,
    price: String,
    stock: String,
    description: String,
    palettes: Vec<String>,
}

/// Checks the form before building the multipart payload.
fn validate_form(form: &ProductForm) -> Result<(), &'static str> {
    if form.name.trim().is_empty()
        || form.category.trim().is_empty()
        || form.palettes.is_empty()
        || form.price.trim().is_empty()
        || form.stock.trim().is_empty()
    {
        return Err("Name, category, palettes, price and stock are all required.");
    }
    if !form
        .price
        .trim()
        .parse::<f64>()
        .is_ok_and(|price| price >= 0.0)
    {
        return Err("The price must be a number.");
    }
    if !form
        .stock
        .trim()
        .parse::<i64>()
        .is_ok_and(|stock| stock >= 0)
    {
        return Err("The stock must be a whole number.");
    }
    Ok(())
}

/// Builds the multipart body the backend expects: scalar fields, the first
/// palette doubled as `palette_category`, then one `palettes[]` part per
/// selection. The image part is appended by the caller when one is picked.
fn form_payload(form: &ProductForm) -> FormPayload {
    let mut payload = FormPayload::new()
        .text("name", form.name.trim())
        .text("category", form.category.trim())
        .text("price", form.price.trim())
        .text("stock", form.stock.trim())
        .text(
            "palette_category",
            form.palettes.first().map_or("", String::as_str),
        );
    for palette in &form.palettes {
        payload = payload.text("palettes[]", palette.as_str());
    }
    if !form.description.trim().is_empty() {
        payload = payload.text("description", form.description.trim());
    }
    payload
}

/// Finds the product being edited in the admin listing.
fn find_product(products: &[Product], id: i64) -> Option<Product> {
    products.iter().find(|product| product.id == id).cloned()
}

#[component]
pub fn AdminProductFormPage() -> impl IntoView {
    let toasts = use_toasts();
    let params = use_params_map();
    let editing_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<i64>().ok())
    });

    let name = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let stock = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let palettes = RwSignal::new(Vec::<String>::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "web")]
    let image = RwSignal::new_local(None::<web_sys::File>);
    #[cfg(feature = "web")]
    let navigate = use_navigate();

    let existing = LocalResource::new(move || {
        let id = editing_id.get();
        async move {
            let Some(id) = id else {
                return Ok::<_, ApiError>(None);
            };
            let client = ApiClient::new();
            let (products, _) = products::fetch_admin_products(&client, None, "").await?;
            Ok(find_product(&products, id))
        }
    });

    // Prefill once the edited product arrives.
    Effect::new(move || match existing.get() {
        Some(Ok(Some(product))) => {
            let palette_names = product.palette_names();
            name.set(product.name);
            category.set(product.category);
            price.set(product.price.to_string());
            stock.set(product.stock.to_string());
            description.set(product.description.unwrap_or_default());
            palettes.set(palette_names);
        }
        Some(Err(_)) => toasts::error(toasts, "Could not load the product."),
        Some(Ok(None)) if editing_id.get_untracked().is_some() => {
            toasts::error(toasts, "That product no longer exists.");
        }
        _ => {}
    });

    let toggle_palette = move |wire: &'static str| {
        palettes.update(|selected| {
            if let Some(index) = selected.iter().position(|name| name == wire) {
                selected.remove(index);
            } else {
                selected.push(wire.to_owned());
            }
        });
    };

    let on_pick_image = move |ev: leptos::ev::Event| {
        #[cfg(feature = "web")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let picked = input.files().and_then(|files| files.get(0));
            if let Some(file) = &picked {
                if !file.type_().starts_with("image/") {
                    toasts::error(toasts, "Please choose an image file.");
                    return;
                }
            }
            image.set(picked);
        }
        #[cfg(not(feature = "web"))]
        let _ = ev;
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = ProductForm {
            name: name.get_untracked(),
            category: category.get_untracked(),
            price: price.get_untracked(),
            stock: stock.get_untracked(),
            description: description.get_untracked(),
            palettes: palettes.get_untracked(),
        };
        if let Err(message) = validate_form(&form) {
            toasts::error(toasts, message);
            return;
        }
        busy.set(true);
        let payload = form_payload(&form);
        #[cfg(feature = "web")]
        {
            let navigate = navigate.clone();
            spawn_local(async move {
                let mut payload = payload;
                if let Some(file) = image.get_untracked() {
                    payload = payload.file("image", file);
                }
                let client = ApiClient::new();
                let saved = match editing_id.get_untracked() {
                    Some(id) => products::update_product(&client, id, payload).await,
                    None => products::create_product(&client, payload).await,
                };
                match saved {
                    Ok(()) => {
                        let message = if editing_id.get_untracked().is_some() {
                            "Product updated."
                        } else {
                            "Product created."
                        };
                        toasts::success(toasts, message);
                        navigate("/admin/products", Default::default());
                    }
                    Err(error) => {
                        toasts::error(toasts, error.user_message());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    view! {
        <div class="page page--admin">
            <AdminNavbar/>

            <main class="page__body page__body--narrow">
                <a class="backlink" href="/admin/products">
                    "Back to products"
                </a>
                <header class="page__header">
                    <h1>
                        {move || {
                            if editing_id.get().is_some() { "Edit Product" } else { "Add Product" }
                        }}
                    </h1>
                </header>

                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        <span>"Name"</span>
                        <input
                            type="text"
                            placeholder="Product name"
                            prop:value=name
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Category"</span>
                        <input
                            type="text"
                            placeholder="e.g. lipstick"
                            prop:value=category
                            on:input=move |ev| category.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="form__row">
                        <label class="form__field">
                            <span>"Price (Rp)"</span>
                            <input
                                type="number"
                                min="0"
                                placeholder="125000"
                                prop:value=price
                                on:input=move |ev| price.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            <span>"Stock"</span>
                            <input
                                type="number"
                                min="0"
                                placeholder="0"
                                prop:value=stock
                                on:input=move |ev| stock.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <fieldset class="form__field">
                        <legend>"Palettes"</legend>
                        <div class="checkbox-row">
                            {Palette::ALL
                                .into_iter()
                                .map(|palette| {
                                    let wire = palette.as_str();
                                    view! {
                                        <label class="checkbox">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || {
                                                    palettes.get().iter().any(|name| name == wire)
                                                }
                                                on:change=move |_| toggle_palette(wire)
                                            />
                                            <span>{palette.label()}</span>
                                        </label>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </fieldset>

                    <label class="form__field">
                        <span>"Description (optional)"</span>
                        <textarea
                            placeholder="What makes this product special?"
                            prop:value=description
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="form__field">
                        <span>"Image (optional)"</span>
                        <input type="file" accept="image/*" on:change=on_pick_image/>
                    </label>

                    <div class="form__actions">
                        <a class="btn" href="/admin/products">
                            "Cancel"
                        </a>
                        <button class="btn btn--primary" type="submit" disabled=busy>
                            {move || if busy.get() { "Saving..." } else { "Save Product" }}
                        </button>
                    </div>
                </form>
            </main>
        </div>
    }
}
