//! HTTP client wrapper for the backend API.
//!
//! Every backend call goes through [`ApiClient`]: credentials are always
//! included so the session and anti-forgery cookies travel, `Accept` is
//! always JSON, and non-2xx answers are folded into [`ApiError`] carrying
//! the server's `message` field when one is present.
//!
//! TRANSPORT
//! =========
//! Browser builds (the `web` feature) send real requests via `gloo-net`.
//! Test builds route through a scripted in-memory transport that records
//! the call sequence, which is how bootstrap-before-mutation ordering is
//! asserted. Plain native builds answer with a network error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config;

/// Failure of a backend call, folded into the three cases pages care
/// about: unreachable, rejected, undecodable.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, connection refused, CORS).
    #[error("network failure: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("status {status}")]
    Status { status: u16, message: Option<String> },
    /// The backend answered 2xx with a body that did not decode.
    #[error("decode failure: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status code, when the backend answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 401: the session is gone or never existed.
    pub fn is_unauthenticated(&self) -> bool {
        self.status() == Some(401)
    }

    /// Message suitable for a toast: the server's own words when it sent
    /// any, otherwise a generic line per failure class.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(_) => {
                "Could not reach the server. Please check your connection.".to_owned()
            }
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Status { status, .. } => {
                format!("The server rejected the request (status {status}).")
            }
            ApiError::Decode(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}

/// Folds a non-2xx response into [`ApiError::Status`], lifting the JSON
/// `message` field out of the body when there is one.
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .filter(|message| !message.is_empty());
    ApiError::Status { status, message }
}

/// Percent-encoded query string, without the leading `?`.
pub fn query_string(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// One named part of a multipart form body.
pub enum FormPart {
    /// A plain text field.
    Text { name: String, value: String },
    /// Raw bytes posted as a file part (webcam captures).
    Bytes {
        name: String,
        bytes: Vec<u8>,
        mime: String,
        filename: String,
    },
    /// A browser file picked through an `<input type="file">`.
    #[cfg(feature = "web")]
    File { name: String, file: web_sys::File },
}

/// Multipart form body assembled away from the DOM so upload flows stay
/// testable; browser builds convert it to `FormData` at dispatch and let
/// the browser pick the boundary header.
#[derive(Default)]
pub struct FormPayload {
    parts: Vec<FormPart>,
}

impl FormPayload {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a text field.
    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.to_owned(),
            value: value.into(),
        });
        self
    }

    /// Appends raw bytes as a named file part.
    #[must_use]
    pub fn bytes(mut self, name: &str, bytes: Vec<u8>, mime: &str, filename: &str) -> Self {
        self.parts.push(FormPart::Bytes {
            name: name.to_owned(),
            bytes,
            mime: mime.to_owned(),
            filename: filename.to_owned(),
        });
        self
    }

    /// Appends a picked browser file.
    #[cfg(feature = "web")]
    #[must_use]
    pub fn file(mut self, name: &str, file: web_sys::File) -> Self {
        self.parts.push(FormPart::File {
            name: name.to_owned(),
            file,
        });
        self
    }

    /// Part names in append order.
    pub fn part_names(&self) -> Vec<&str> {
        self.parts
            .iter()
            .map(|part| match part {
                FormPart::Text { name, .. } | FormPart::Bytes { name, .. } => name.as_str(),
                #[cfg(feature = "web")]
                FormPart::File { name, .. } => name.as_str(),
            })
            .collect()
    }

    #[cfg(all(feature = "web", not(test)))]
    fn into_form_data(self) -> Result<web_sys::FormData, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|error| ApiError::Network(format!("form assembly failed: {error:?}")))?;
        for part in self.parts {
            let appended = match part {
                FormPart::Text { name, value } => form.append_with_str(&name, &value),
                FormPart::Bytes {
                    name,
                    bytes,
                    mime,
                    filename,
                } => {
                    let array = js_sys::Uint8Array::from(bytes.as_slice());
                    let sequence = js_sys::Array::of1(array.as_ref());
                    let options = web_sys::BlobPropertyBag::new();
                    options.set_type(&mime);
                    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(
                        sequence.as_ref(),
                        &options,
                    )
                    .map_err(|error| {
                        ApiError::Network(format!("blob assembly failed: {error:?}"))
                    })?;
                    form.append_with_blob_and_filename(&name, &blob, &filename)
                }
                FormPart::File { name, file } => {
                    let filename = file.name();
                    form.append_with_blob_and_filename(&name, &file, &filename)
                }
            };
            appended
                .map_err(|error| ApiError::Network(format!("form assembly failed: {error:?}")))?;
        }
        Ok(form)
    }
}

/// Request body handed to the transport.
enum Payload {
    None,
    Json(Value),
    Form(FormPayload),
}

/// Backend API client. Cheap to construct; every call site makes its own
/// against the compile-time configured origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    origin: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client against the configured backend origin.
    pub fn new() -> Self {
        Self {
            origin: config::backend_origin(),
        }
    }

    /// Client against an explicit origin.
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    /// The backend origin this client targets.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.origin, path)
    }

    fn origin_url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }

    /// GET an API endpoint and decode the body into `T`.
    ///
    /// # Errors
    ///
    /// `ApiError::Status` for non-2xx answers, `ApiError::Network` when the
    /// request never completed, `ApiError::Decode` when the body does not
    /// decode into `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let value = self.get_value(path).await?;
        serde_json::from_value(value).map_err(|error| ApiError::Decode(error.to_string()))
    }

    /// GET an API endpoint as raw JSON.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn get_value(&self, path: &str) -> Result<Value, ApiError> {
        self.dispatch("GET", &self.api_url(path), Payload::None)
            .await
    }

    /// GET an API endpoint with query parameters.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn get_value_with_query(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<Value, ApiError> {
        let url = if params.is_empty() {
            self.api_url(path)
        } else {
            format!("{}?{}", self.api_url(path), query_string(params))
        };
        self.dispatch("GET", &url, Payload::None).await
    }

    /// POST a JSON body to an API endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_value(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.dispatch("POST", &self.api_url(path), Payload::Json(body.clone()))
            .await
    }

    /// POST to an API endpoint with no body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        self.dispatch("POST", &self.api_url(path), Payload::None)
            .await
    }

    /// PUT a JSON body to an API endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn put_value(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.dispatch("PUT", &self.api_url(path), Payload::Json(body.clone()))
            .await
    }

    /// DELETE an API endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.dispatch("DELETE", &self.api_url(path), Payload::None)
            .await
    }

    /// POST a multipart form to an API endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_form(&self, path: &str, form: FormPayload) -> Result<Value, ApiError> {
        self.dispatch("POST", &self.api_url(path), Payload::Form(form))
            .await
    }

    /// POST a multipart form with query parameters (`_method` spoofing).
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_form_with_query(
        &self,
        path: &str,
        params: &[(&str, String)],
        form: FormPayload,
    ) -> Result<Value, ApiError> {
        let url = format!("{}?{}", self.api_url(path), query_string(params));
        self.dispatch("POST", &url, Payload::Form(form)).await
    }

    /// GET an origin-level endpoint (outside the `/api` prefix), ignoring
    /// the body. This is how the anti-forgery cookie is fetched.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn get_origin(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch("GET", &self.origin_url(path), Payload::None)
            .await
            .map(|_| ())
    }

    async fn dispatch(&self, method: &str, url: &str, payload: Payload) -> Result<Value, ApiError> {
        let (status, body) = exchange(method, url, payload).await?;
        if !(200..300).contains(&status) {
            return Err(status_error(status, &body));
        }
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&body).map_err(|error| ApiError::Decode(error.to_string()))
    }
}

#[cfg(test)]
async fn exchange(method: &str, url: &str, payload: Payload) -> Result<(u16, String), ApiError> {
    test_transport::record_and_answer(method, url, &payload)
}

#[cfg(all(feature = "web", not(test)))]
async fn exchange(method: &str, url: &str, payload: Payload) -> Result<(u16, String), ApiError> {
    use gloo_net::http::Request;
    use web_sys::RequestCredentials;

    let builder = match method {
        "POST" => Request::post(url),
        "PUT" => Request::put(url),
        "DELETE" => Request::delete(url),
        _ => Request::get(url),
    }
    .credentials(RequestCredentials::Include)
    .header("Accept", "application/json");

    let request = match payload {
        Payload::None => builder.build().map_err(build_error)?,
        Payload::Json(value) => builder.json(&value).map_err(build_error)?,
        Payload::Form(form) => {
            let form_data = form.into_form_data()?;
            builder.body(form_data).map_err(build_error)?
        }
    };

    let response = request
        .send()
        .await
        .map_err(|error| ApiError::Network(error.to_string()))?;
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Ok((status, body))
}

#[cfg(all(feature = "web", not(test)))]
fn build_error(error: gloo_net::Error) -> ApiError {
    ApiError::Network(error.to_string())
}

#[cfg(all(not(feature = "web"), not(test)))]
async fn exchange(
    _method: &str,
    _url: &str,
    _payload: Payload,
) -> Result<(u16, String), ApiError> {
    Err(ApiError::Network(
        "not available outside the browser".to_owned(),
    ))
}

#[cfg(test)]
pub(crate) mod test_transport {
    //! Scripted transport double for native tests.
    //!
    //! Responses are answered FIFO from a queue; every dispatch is recorded
    //! as `"METHOD url"` so tests can assert the call sequence (the CSRF
    //! bootstrap completing strictly before its dependent mutation).

    use std::cell::RefCell;

    use super::{ApiError, Payload};

    thread_local! {
        static CALLS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        static BODIES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        static SCRIPT: RefCell<Vec<Result<(u16, String), ApiError>>> =
            const { RefCell::new(Vec::new()) };
    }

    /// Clears recorded calls and any unconsumed scripted responses.
    pub fn reset() {
        CALLS.with(|calls| calls.borrow_mut().clear());
        BODIES.with(|bodies| bodies.borrow_mut().clear());
        SCRIPT.with(|script| script.borrow_mut().clear());
    }

    /// Queues the next response. Unscripted calls answer `200` with an
    /// empty body.
    pub fn respond(status: u16, body: &str) {
        SCRIPT.with(|script| script.borrow_mut().push(Ok((status, body.to_owned()))));
    }

    /// Queues a transport failure.
    pub fn fail_next() {
        SCRIPT.with(|script| {
            script
                .borrow_mut()
                .push(Err(ApiError::Network("scripted failure".to_owned())));
        });
    }

    /// Recorded calls, `"METHOD url"`, oldest first.
    pub fn calls() -> Vec<String> {
        CALLS.with(|calls| calls.borrow().clone())
    }

    /// Recorded request bodies, aligned with [`calls`]. JSON bodies record
    /// their serialisation, multipart bodies their part names.
    pub fn bodies() -> Vec<String> {
        BODIES.with(|bodies| bodies.borrow().clone())
    }

    pub(super) fn record_and_answer(
        method: &str,
        url: &str,
        payload: &Payload,
    ) -> Result<(u16, String), ApiError> {
        CALLS.with(|calls| calls.borrow_mut().push(format!("{method} {url}")));
        BODIES.with(|bodies| bodies.borrow_mut().push(describe(payload)));
        SCRIPT.with(|script| {
            let mut script = script.borrow_mut();
            if script.is_empty() {
                Ok((200, String::new()))
            } else {
                script.remove(0)
            }
        })
    }

    fn describe(payload: &Payload) -> String {
        match payload {
            Payload::None => String::new(),
            Payload::Json(value) => value.to_string(),
            Payload::Form(form) => format!("multipart[{}]", form.part_names().join(",")),
        }
    }
}
