use super::*;
use crate::net::http::test_transport;
use futures::executor::block_on;

const ORIGIN: &str = "http://testhost";

fn client() -> ApiClient {
    test_transport::reset();
    ApiClient::with_origin(ORIGIN)
}

#[test]
fn cookie_is_fetched_from_the_origin_not_the_api_prefix() {
    let client = client();
    test_transport::respond(204, "");

    block_on(fetch_csrf_cookie(&client)).expect("scripted 204 should succeed");

    assert_eq!(
        test_transport::calls(),
        vec![format!("GET {ORIGIN}/sanctum/csrf-cookie")]
    );
}

#[test]
fn bootstrap_swallows_failures() {
    let client = client();
    test_transport::fail_next();

    block_on(bootstrap(&client));

    assert_eq!(test_transport::calls().len(), 1);
}

#[test]
fn repeated_bootstrap_leaves_later_requests_working() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(204, "");
    test_transport::respond(200, "{}");

    block_on(async {
        fetch_csrf_cookie(&client).await.expect("first bootstrap");
        fetch_csrf_cookie(&client).await.expect("second bootstrap");
        client
            .post_empty("/logout")
            .await
            .expect("mutation after repeated bootstraps");
    });

    assert_eq!(
        test_transport::calls(),
        vec![
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("POST {ORIGIN}/api/logout"),
        ]
    );
}
