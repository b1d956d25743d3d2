//! Build-time backend configuration.
//!
//! The backend origin is baked in at compile time via `CHROMALENS_API_URL`
//! so a static deployment picks its target when the bundle is built. The
//! value is public; do not store secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_ORIGIN: &str = "http://localhost:8000";

/// Backend origin (scheme + host + optional port), without a trailing slash.
pub fn backend_origin() -> String {
    normalize_origin(option_env!("CHROMALENS_API_URL").unwrap_or(DEFAULT_ORIGIN))
}

/// Strips surrounding whitespace and trailing slashes so path joins stay
/// predictable, falling back to the local default when the value is blank.
fn normalize_origin(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_ORIGIN.to_owned()
    } else {
        trimmed.to_owned()
    }
}
