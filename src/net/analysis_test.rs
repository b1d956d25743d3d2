use super::*;
use crate::net::http::test_transport;
use futures::executor::block_on;
use serde_json::json;

const ORIGIN: &str = "http://testhost";

fn client() -> ApiClient {
    test_transport::reset();
    ApiClient::with_origin(ORIGIN)
}

// A 1x1 JPEG stand-in; the transport double never inspects the bytes.
const DATA_URL: &str = "data:image/jpeg;base64,aGVsbG8=";

// ============================================================
// Upload forms
// ============================================================

#[test]
fn photo_form_from_data_url_carries_the_image_field() {
    let form = photo_form_from_data_url(DATA_URL).expect("data URL should decode");
    assert_eq!(form.part_names(), vec![UPLOAD_FIELD]);
}

#[test]
fn photo_form_from_data_url_rejects_garbage() {
    assert!(photo_form_from_data_url("not a data url").is_none());
}

// ============================================================
// Upload and analysis
// ============================================================

#[test]
fn upload_image_bootstraps_then_posts_multipart() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, r#"{"url":"/storage/analyses/abc.jpg"}"#);

    let form = photo_form_from_data_url(DATA_URL).expect("data URL should decode");
    let location = block_on(upload_image(&client, form)).expect("upload should succeed");

    assert_eq!(location, "/storage/analyses/abc.jpg");
    assert_eq!(
        test_transport::calls(),
        vec![
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("POST {ORIGIN}/api/uploads/image"),
        ]
    );
    assert_eq!(test_transport::bodies()[1], "multipart[image]");
}

#[test]
fn upload_image_falls_back_to_the_path_field() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, r#"{"path":"storage/analyses/abc.jpg"}"#);

    let form = photo_form_from_data_url(DATA_URL).expect("data URL should decode");
    let location = block_on(upload_image(&client, form)).expect("upload should succeed");

    assert_eq!(location, "storage/analyses/abc.jpg");
}

#[test]
fn upload_image_rejects_an_answer_with_no_location() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, "{}");

    let form = photo_form_from_data_url(DATA_URL).expect("data URL should decode");
    let error = block_on(upload_image(&client, form)).expect_err("no location should fail");

    assert!(matches!(error, ApiError::Decode(_)));
}

#[test]
fn run_analysis_unwraps_the_data_envelope() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(
        200,
        r##"{"success":true,"data":{"palette_name":"winter clear","colors":["#112233"],"undertone":"cool"}}"##,
    );

    let outcome = block_on(run_analysis(&client, "/storage/analyses/abc.jpg"))
        .expect("analysis should decode");

    assert_eq!(outcome.palette_name, "winter clear");
    assert_eq!(outcome.colors, vec!["#112233".to_owned()]);
    assert!(test_transport::bodies()[1].contains("/storage/analyses/abc.jpg"));
}

#[test]
fn run_analysis_keeps_inline_product_picks() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(
        200,
        r#"{"data":{"palette_name":"summer cool","recommendations":[{"id":3,"name":"Icy Gloss"},{"id":9,"name":"Frost Tint"}]}}"#,
    );

    let outcome = block_on(run_analysis(&client, "/storage/analyses/abc.jpg"))
        .expect("analysis should decode");

    let names: Vec<&str> = outcome
        .recommendations
        .iter()
        .map(|product| product.name.as_str())
        .collect();
    assert_eq!(names, ["Icy Gloss", "Frost Tint"]);
}

#[test]
fn upload_and_analyze_runs_the_full_sequence() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, r#"{"url":"/storage/analyses/abc.jpg"}"#);
    test_transport::respond(204, "");
    test_transport::respond(200, r#"{"data":{"palette_name":"autumn warm"}}"#);

    let form = photo_form_from_data_url(DATA_URL).expect("data URL should decode");
    let (image_url, outcome) =
        block_on(upload_and_analyze(&client, form)).expect("the flow should succeed");

    assert_eq!(image_url, "/storage/analyses/abc.jpg");
    assert_eq!(outcome.palette_name, "autumn warm");
    assert_eq!(
        test_transport::calls(),
        vec![
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("POST {ORIGIN}/api/uploads/image"),
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("POST {ORIGIN}/api/analysis"),
        ]
    );
}

#[test]
fn upload_and_analyze_stops_when_the_upload_fails() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(500, r#"{"message":"Storage is full."}"#);

    let form = photo_form_from_data_url(DATA_URL).expect("data URL should decode");
    let error = block_on(upload_and_analyze(&client, form)).expect_err("the upload failed");

    assert_eq!(error.user_message(), "Storage is full.");
    assert_eq!(test_transport::calls().len(), 2, "analysis must not start");
}

// ============================================================
// Recommendations
// ============================================================

#[test]
fn decode_recommendations_peels_the_wrapper() {
    let value = json!({
        "palette": "winter clear",
        "total": 1,
        "recommendations": [{"id": 3, "name": "Icy Gloss"}],
    });

    let products = decode_recommendations(value).expect("wrapper should peel");

    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Icy Gloss");
}

#[test]
fn decode_recommendations_accepts_a_bare_list() {
    let value = json!([{"id": 3, "name": "Icy Gloss"}]);
    let products = decode_recommendations(value).expect("a bare list is fine");
    assert_eq!(products.len(), 1);
}

#[test]
fn fetch_recommendations_encodes_the_palette() {
    let client = client();
    test_transport::respond(200, r#"{"recommendations":[]}"#);

    let products = block_on(fetch_recommendations(&client, "winter clear", 8))
        .expect("an empty list should decode");

    assert!(products.is_empty());
    assert_eq!(
        test_transport::calls(),
        vec![format!(
            "GET {ORIGIN}/api/recommendations?palette=winter%20clear&limit=8"
        )]
    );
}

// ============================================================
// History
// ============================================================

#[test]
fn fetch_history_decodes_paginated_answers() {
    let client = client();
    test_transport::respond(
        200,
        r#"{"data":{"data":[{"id":11,"palette_name":"summer cool"}],"total":1}}"#,
    );

    let entries = block_on(fetch_history(&client)).expect("history should decode");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].palette_name, "summer cool");
}

#[test]
fn delete_history_entry_bootstraps_then_deletes() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, "{}");

    block_on(delete_history_entry(&client, 11)).expect("deletion should succeed");

    assert_eq!(
        test_transport::calls(),
        vec![
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("DELETE {ORIGIN}/api/history/11"),
        ]
    );
}

// ============================================================
// Admin report
// ============================================================

#[test]
fn analyses_query_always_opens_the_page_size() {
    assert_eq!(
        analyses_query(None, ""),
        vec![("per_page", "1000".to_owned())]
    );
}

#[test]
fn analyses_query_appends_palette_and_search() {
    assert_eq!(
        analyses_query(Some("spring bright"), " ana "),
        vec![
            ("per_page", "1000".to_owned()),
            ("palette", "spring bright".to_owned()),
            ("search", "ana".to_owned()),
        ]
    );
}

#[test]
fn fetch_admin_analyses_decodes_rows_with_users() {
    let client = client();
    test_transport::respond(
        200,
        r#"{"data":[{"id":5,"result_palette":"winter clear","user":{"id":7,"name":"Ana","email":"ana@example.com"}}]}"#,
    );

    let rows = block_on(fetch_admin_analyses(&client, None, "")).expect("rows should decode");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].user.as_ref().map(|user| user.name.as_str()), Some("Ana"));
    assert_eq!(
        test_transport::calls(),
        vec![format!("GET {ORIGIN}/api/admin/analyses?per_page=1000")]
    );
}

#[test]
fn fetch_admin_statistics_tolerates_partial_answers() {
    let client = client();
    test_transport::respond(200, r#"{"data":{"total_users":"42"}}"#);

    let stats = block_on(fetch_admin_statistics(&client)).expect("stats should decode");

    assert_eq!(stats.total_users, 42);
    assert_eq!(stats.total_analyses, 0);
    assert!(stats.recent_analyses.is_empty());
}
