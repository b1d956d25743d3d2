use super::*;

const ORIGIN: &str = "http://localhost:8000";

#[test]
fn absolute_urls_pass_through() {
    assert_eq!(
        resolve_image_url(ORIGIN, "https://cdn.example.com/a.jpg"),
        "https://cdn.example.com/a.jpg"
    );
    assert_eq!(
        resolve_image_url(ORIGIN, "http://cdn.example.com/a.jpg"),
        "http://cdn.example.com/a.jpg"
    );
}

#[test]
fn relative_paths_resolve_against_origin() {
    assert_eq!(
        resolve_image_url(ORIGIN, "/storage/products/1.jpg"),
        "http://localhost:8000/storage/products/1.jpg"
    );
    assert_eq!(
        resolve_image_url(ORIGIN, "storage/products/1.jpg"),
        "http://localhost:8000/storage/products/1.jpg"
    );
}

#[test]
fn decode_data_url_extracts_mime_and_bytes() {
    let (mime, bytes) = decode_data_url("data:image/jpeg;base64,aGVsbG8=")
        .expect("valid data URL should decode");
    assert_eq!(mime, "image/jpeg");
    assert_eq!(bytes, b"hello");
}

#[test]
fn decode_data_url_defaults_missing_mime() {
    let (mime, bytes) =
        decode_data_url("data:;base64,aGVsbG8=").expect("data URL without MIME should decode");
    assert_eq!(mime, "application/octet-stream");
    assert_eq!(bytes, b"hello");
}

#[test]
fn decode_data_url_rejects_non_data_urls() {
    assert!(decode_data_url("https://example.com/a.jpg").is_none());
    assert!(decode_data_url("data:image/jpeg,not-base64-marker").is_none());
    assert!(decode_data_url("data:image/jpeg;base64,@@@").is_none());
}
