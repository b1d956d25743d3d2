//! Product catalog and admin product management calls.
//!
//! The public catalog is world-readable; everything under `/admin` is a
//! mutating or privileged call and rides behind the CSRF bootstrap like
//! the rest of the write paths.

use serde_json::Value;

use super::csrf;
use super::http::{ApiClient, ApiError, FormPayload};
use super::types::{self, Product, ProductStats};

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

/// Fetches the public product catalog.
///
/// No CSRF bootstrap happens here: the catalog is a plain read and must
/// stay reachable for signed-out visitors.
///
/// # Errors
///
/// [`ApiError::Network`] when the request never completes,
/// [`ApiError::Status`] on a non-2xx answer and [`ApiError::Decode`] when
/// the body carries no product list.
pub async fn fetch_catalog(client: &ApiClient) -> Result<Vec<Product>, ApiError> {
    let value = client.get_value("/products").await?;
    types::extract_list(value).map_err(ApiError::Decode)
}

/// Builds the admin listing query. Blank filters are dropped entirely
/// rather than sent as empty parameters.
fn product_query(palette: Option<&str>, search: &str) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(palette) = palette {
        let palette = palette.trim();
        if !palette.is_empty() {
            params.push(("palette_category", palette.to_owned()));
        }
    }
    let search = search.trim();
    if !search.is_empty() {
        params.push(("search", search.to_owned()));
    }
    params
}

/// Splits the admin listing answer into the product list and the stats
/// block the backend rides alongside it. A missing stats block falls back
/// to zeroes so older backends keep working.
fn decode_admin_products(mut value: Value) -> Result<(Vec<Product>, ProductStats), String> {
    let stats = match value.as_object_mut().and_then(|map| map.remove("stats")) {
        Some(raw) => serde_json::from_value(raw).map_err(|error| error.to_string())?,
        None => ProductStats::default(),
    };
    let products = types::extract_list(value)?;
    Ok((products, stats))
}

/// Fetches the admin product listing, filtered by palette and free-text
/// search when either is non-blank.
///
/// # Errors
///
/// [`ApiError::Network`], [`ApiError::Status`] or [`ApiError::Decode`] as
/// for [`fetch_catalog`].
pub async fn fetch_admin_products(
    client: &ApiClient,
    palette: Option<&str>,
    search: &str,
) -> Result<(Vec<Product>, ProductStats), ApiError> {
    let params = product_query(palette, search);
    let value = client
        .get_value_with_query("/admin/products", &params)
        .await?;
    decode_admin_products(value).map_err(ApiError::Decode)
}

/// Creates a product from a multipart form.
///
/// # Errors
///
/// [`ApiError::Network`] or [`ApiError::Status`] when the backend rejects
/// the form; validation problems surface as a 422 with the backend's own
/// message.
pub async fn create_product(client: &ApiClient, form: FormPayload) -> Result<(), ApiError> {
    csrf::bootstrap(client).await;
    client.post_form("/admin/products", form).await?;
    Ok(())
}

/// Updates a product. Multipart bodies cannot travel on a real PUT, so the
/// form goes out as `POST ...?_method=PUT` and the backend unspools the
/// spoofed method.
///
/// # Errors
///
/// [`ApiError::Network`] or [`ApiError::Status`] when the backend rejects
/// the form.
pub async fn update_product(
    client: &ApiClient,
    id: i64,
    form: FormPayload,
) -> Result<(), ApiError> {
    csrf::bootstrap(client).await;
    client
        .post_form_with_query(
            &format!("/admin/products/{id}"),
            &[("_method", "PUT".to_owned())],
            form,
        )
        .await?;
    Ok(())
}

/// Deletes a product.
///
/// # Errors
///
/// [`ApiError::Network`] or [`ApiError::Status`] when the backend refuses.
pub async fn delete_product(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    csrf::bootstrap(client).await;
    client.delete(&format!("/admin/products/{id}")).await?;
    Ok(())
}
