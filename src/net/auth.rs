//! Authentication, registration and profile endpoints.
//!
//! Every mutating helper bootstraps a fresh anti-forgery cookie before its
//! own request; callers never sequence CSRF themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::Serialize;
use serde_json::json;

use super::csrf;
use super::http::{ApiClient, ApiError};
use super::types::{Principal, ProfileDetails, extract_object, extract_principal};

/// Fetches the current account from `GET /api/me`.
///
/// # Errors
///
/// `ApiError::Status` with 401 when no session exists; network or decode
/// failures otherwise.
pub async fn fetch_me(client: &ApiClient) -> Result<Principal, ApiError> {
    let value = client.get_value("/me").await?;
    extract_principal(value).map_err(ApiError::Decode)
}

/// Exchanges credentials for a session via `POST /api/login`.
///
/// Bootstraps the anti-forgery cookie first. On success the backend has
/// set the session cookie and the returned principal is ready to install
/// in the session store.
///
/// # Errors
///
/// `ApiError::Status` carrying the backend's message on rejected
/// credentials; network or decode failures otherwise.
pub async fn login(client: &ApiClient, email: &str, password: &str) -> Result<Principal, ApiError> {
    csrf::bootstrap(client).await;
    let body = json!({ "email": email, "password": password });
    let value = client.post_value("/login", &body).await?;
    extract_principal(value).map_err(ApiError::Decode)
}

/// Ends the backend session via `POST /api/logout`.
///
/// # Errors
///
/// Returns the backend failure; callers clear local state regardless.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    csrf::bootstrap(client).await;
    client.post_empty("/logout").await.map(|_| ())
}

/// Fields submitted by the registration form.
#[derive(Clone, Debug, Serialize)]
pub struct RegistrationPayload {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
}

/// Creates an account via `POST /api/register`.
///
/// # Errors
///
/// `ApiError::Status` carrying the backend's validation message (422)
/// when a field is rejected; network failures otherwise.
pub async fn register(client: &ApiClient, payload: &RegistrationPayload) -> Result<(), ApiError> {
    csrf::bootstrap(client).await;
    let body =
        serde_json::to_value(payload).map_err(|error| ApiError::Decode(error.to_string()))?;
    client.post_value("/register", &body).await.map(|_| ())
}

/// Fetches the editable profile via `GET /api/profile`.
///
/// # Errors
///
/// Status, network or decode failures of the profile request.
pub async fn fetch_profile(client: &ApiClient) -> Result<ProfileDetails, ApiError> {
    let value = client.get_value("/profile").await?;
    extract_object(value).map_err(ApiError::Decode)
}

/// Updates name and phone via `PUT /api/profile`.
///
/// # Errors
///
/// Status or network failures of the update request.
pub async fn update_profile(client: &ApiClient, name: &str, phone: &str) -> Result<(), ApiError> {
    csrf::bootstrap(client).await;
    let body = json!({ "name": name, "phone": phone });
    client.put_value("/profile", &body).await.map(|_| ())
}
