//! Anti-forgery cookie bootstrap.
//!
//! The backend issues its CSRF cookie from `GET /sanctum/csrf-cookie`,
//! which lives at the origin level, outside the `/api` prefix. The client
//! never reads the cookie value; the browser attaches it automatically
//! because every request includes credentials. Mutating endpoint helpers
//! call [`bootstrap`] immediately before dispatching their own request, so
//! the token is fresh for every mutation and no call site can forget it.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use super::http::{ApiClient, ApiError};

/// Path of the cookie-issuing endpoint, relative to the origin.
pub const CSRF_COOKIE_PATH: &str = "/sanctum/csrf-cookie";

/// Fetches a fresh anti-forgery cookie.
///
/// Idempotent: the backend reissues the cookie on every call, and an extra
/// call costs one round trip and nothing else.
///
/// # Errors
///
/// Returns the transport or status failure of the bootstrap request.
pub async fn fetch_csrf_cookie(client: &ApiClient) -> Result<(), ApiError> {
    client.get_origin(CSRF_COOKIE_PATH).await
}

/// Fetches a fresh anti-forgery cookie ahead of a mutating request,
/// logging and swallowing failure. The dependent request still runs and
/// reports its own outcome.
pub async fn bootstrap(client: &ApiClient) {
    if let Err(error) = fetch_csrf_cookie(client).await {
        leptos::logging::warn!("csrf bootstrap failed: {error}");
    }
}
