//! Image URL resolution and data-URL decoding.
//!
//! The backend stores product and analysis images under relative storage
//! paths; absolute URLs occasionally appear when a product links out to an
//! external image. Webcam captures arrive as base64 data URLs from the
//! canvas API and are decoded back to bytes for multipart upload.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use base64ct::{Base64, Encoding};

/// Resolves a backend-relative image path against the backend origin.
/// Absolute `http(s)` URLs pass through untouched.
pub fn resolve_image_url(origin: &str, raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        return raw.to_owned();
    }
    let path = raw.trim_start_matches('/');
    format!("{origin}/{path}")
}

/// Decodes a `data:<mime>;base64,<payload>` URL into its MIME type and raw
/// bytes. Returns `None` for anything that is not a base64 data URL.
pub fn decode_data_url(url: &str) -> Option<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let bytes = Base64::decode_vec(payload).ok()?;
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    Some((mime.to_owned(), bytes))
}
