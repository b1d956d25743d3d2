//! Colour analysis, recommendations, history and the admin report.
//!
//! ANALYSIS FLOW
//! =============
//!
//! Analysing a photo is a two-step exchange. The photo first travels to
//! `/api/uploads/image` as multipart form data; the backend stores it and
//! answers with its location. That location then goes to `/api/analysis`,
//! which runs the actual colour assessment and answers with the assigned
//! palette. [`upload_and_analyze`] strings the two together so pages deal
//! with a single await.

use serde_json::{Value, json};

use super::csrf;
use super::http::{ApiClient, ApiError, FormPayload};
use super::types::{
    self, AdminAnalysis, AdminStatistics, AnalysisOutcome, HistoryEntry, Product, UploadedImage,
};
use crate::util::images;

#[cfg(test)]
#[path = "analysis_test.rs"]
mod analysis_test;

/// Multipart field name the upload endpoint expects.
pub const UPLOAD_FIELD: &str = "image";

/// Filename attached to webcam captures, which have no file of their own.
pub const CAPTURE_FILENAME: &str = "photo.jpg";

/// Builds the upload form for a captured frame, carried as a base64 data
/// URL. Answers `None` when the data URL does not decode.
pub fn photo_form_from_data_url(data_url: &str) -> Option<FormPayload> {
    let (mime, bytes) = images::decode_data_url(data_url)?;
    Some(FormPayload::new().bytes(UPLOAD_FIELD, bytes, &mime, CAPTURE_FILENAME))
}

/// Builds the upload form for a picked file.
#[cfg(feature = "web")]
pub fn photo_form_from_file(file: web_sys::File) -> FormPayload {
    FormPayload::new().file(UPLOAD_FIELD, file)
}

/// Uploads a photo and answers its stored location.
///
/// # Errors
///
/// [`ApiError::Network`] or [`ApiError::Status`] on transport or backend
/// failure; [`ApiError::Decode`] when the answer carries neither a `url`
/// nor a `path`.
pub async fn upload_image(client: &ApiClient, form: FormPayload) -> Result<String, ApiError> {
    csrf::bootstrap(client).await;
    let value = client.post_form("/uploads/image", form).await?;
    let uploaded: UploadedImage = types::extract_object(value).map_err(ApiError::Decode)?;
    uploaded
        .location()
        .map(str::to_owned)
        .ok_or_else(|| ApiError::Decode("upload answer carried no url or path".to_owned()))
}

/// Runs the colour analysis against an already-uploaded photo.
///
/// # Errors
///
/// [`ApiError::Network`], [`ApiError::Status`] or [`ApiError::Decode`]
/// when the backend fails or answers with no palette.
pub async fn run_analysis(
    client: &ApiClient,
    image_url: &str,
) -> Result<AnalysisOutcome, ApiError> {
    csrf::bootstrap(client).await;
    let value = client
        .post_value("/analysis", &json!({ "image_url": image_url }))
        .await?;
    types::extract_object(value).map_err(ApiError::Decode)
}

/// Uploads a photo and analyses it in one go. Answers the stored image
/// location together with the analysis outcome.
///
/// # Errors
///
/// Whatever [`upload_image`] or [`run_analysis`] surface; the analysis
/// step never starts when the upload fails.
pub async fn upload_and_analyze(
    client: &ApiClient,
    form: FormPayload,
) -> Result<(String, AnalysisOutcome), ApiError> {
    let image_url = upload_image(client, form).await?;
    let outcome = run_analysis(client, &image_url).await?;
    Ok((image_url, outcome))
}

/// Peels the recommendation list out of the endpoint's
/// `{palette, total, recommendations}` answer, enveloped or not.
fn decode_recommendations(value: Value) -> Result<Vec<Product>, String> {
    let inner = match types::peel_data(value) {
        Value::Object(mut map) if map.contains_key("recommendations") => {
            map.remove("recommendations").unwrap_or(Value::Null)
        }
        other => other,
    };
    types::extract_list(inner)
}

/// Fetches product recommendations for a palette.
///
/// # Errors
///
/// [`ApiError::Network`], [`ApiError::Status`] or [`ApiError::Decode`]
/// when no recommendation list comes back.
pub async fn fetch_recommendations(
    client: &ApiClient,
    palette: &str,
    limit: usize,
) -> Result<Vec<Product>, ApiError> {
    let params = [("palette", palette.to_owned()), ("limit", limit.to_string())];
    let value = client
        .get_value_with_query("/recommendations", &params)
        .await?;
    decode_recommendations(value).map_err(ApiError::Decode)
}

/// Fetches the signed-in account's analysis history, newest first as the
/// backend orders it.
///
/// # Errors
///
/// [`ApiError::Network`], [`ApiError::Status`] or [`ApiError::Decode`].
pub async fn fetch_history(client: &ApiClient) -> Result<Vec<HistoryEntry>, ApiError> {
    let value = client.get_value("/history").await?;
    types::extract_list(value).map_err(ApiError::Decode)
}

/// Deletes one history entry.
///
/// # Errors
///
/// [`ApiError::Network`] or [`ApiError::Status`] when the backend refuses.
pub async fn delete_history_entry(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    csrf::bootstrap(client).await;
    client.delete(&format!("/history/{id}")).await?;
    Ok(())
}

/// Builds the admin report query. The report is unpaginated client-side,
/// so `per_page` always rides along wide open.
fn analyses_query(palette: Option<&str>, search: &str) -> Vec<(&'static str, String)> {
    let mut params = vec![("per_page", "1000".to_owned())];
    if let Some(palette) = palette {
        let palette = palette.trim();
        if !palette.is_empty() {
            params.push(("palette", palette.to_owned()));
        }
    }
    let search = search.trim();
    if !search.is_empty() {
        params.push(("search", search.to_owned()));
    }
    params
}

/// Fetches the admin analysis report, filtered by palette and free-text
/// search when either is non-blank.
///
/// # Errors
///
/// [`ApiError::Network`], [`ApiError::Status`] or [`ApiError::Decode`].
pub async fn fetch_admin_analyses(
    client: &ApiClient,
    palette: Option<&str>,
    search: &str,
) -> Result<Vec<AdminAnalysis>, ApiError> {
    let params = analyses_query(palette, search);
    let value = client
        .get_value_with_query("/admin/analyses", &params)
        .await?;
    types::extract_list(value).map_err(ApiError::Decode)
}

/// Fetches the aggregate counters for the admin dashboard.
///
/// # Errors
///
/// [`ApiError::Network`], [`ApiError::Status`] or [`ApiError::Decode`].
pub async fn fetch_admin_statistics(client: &ApiClient) -> Result<AdminStatistics, ApiError> {
    let value = client.get_value("/admin/statistics").await?;
    types::extract_object(value).map_err(ApiError::Decode)
}
