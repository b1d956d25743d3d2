use super::*;
use crate::net::http::test_transport;
use futures::executor::block_on;

const ORIGIN: &str = "http://testhost";

fn client() -> ApiClient {
    test_transport::reset();
    ApiClient::with_origin(ORIGIN)
}

const USER_BODY: &str = r#"{"user":{"id":7,"name":"Ana Larasati","email":"ana@example.com","role":"customer"}}"#;

// ============================================================
// Login
// ============================================================

#[test]
fn login_bootstraps_csrf_before_posting() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, USER_BODY);

    let principal =
        block_on(login(&client, "ana@example.com", "secret")).expect("login should succeed");

    assert_eq!(principal.name, "Ana Larasati");
    assert_eq!(
        test_transport::calls(),
        vec![
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("POST {ORIGIN}/api/login"),
        ]
    );
    assert!(test_transport::bodies()[1].contains("ana@example.com"));
}

#[test]
fn login_surfaces_the_backend_message_verbatim() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(
        422,
        r#"{"message":"These credentials do not match our records."}"#,
    );

    let error = block_on(login(&client, "ana@example.com", "wrong")).expect_err("422 should fail");

    assert_eq!(
        error.user_message(),
        "These credentials do not match our records."
    );
}

#[test]
fn login_proceeds_when_the_bootstrap_fails() {
    let client = client();
    test_transport::fail_next();
    test_transport::respond(200, USER_BODY);

    let principal = block_on(login(&client, "ana@example.com", "secret"))
        .expect("login should proceed past a failed bootstrap");

    assert_eq!(principal.id, 7);
    assert_eq!(test_transport::calls().len(), 2);
}

// ============================================================
// Session probe
// ============================================================

#[test]
fn fetch_me_decodes_wrapped_and_bare_answers() {
    let client = client();
    test_transport::respond(200, USER_BODY);
    let wrapped = block_on(fetch_me(&client)).expect("wrapped answer should decode");
    assert_eq!(wrapped.email, "ana@example.com");

    test_transport::respond(
        200,
        r#"{"id":7,"name":"Ana Larasati","email":"ana@example.com","role":"admin"}"#,
    );
    let bare = block_on(fetch_me(&client)).expect("bare answer should decode");
    assert!(bare.role.is_admin());
}

#[test]
fn fetch_me_maps_401_to_unauthenticated() {
    let client = client();
    test_transport::respond(401, r#"{"message":"Unauthenticated."}"#);

    let error = block_on(fetch_me(&client)).expect_err("401 should fail");

    assert!(error.is_unauthenticated());
}

#[test]
fn fetch_me_rejects_unknown_roles() {
    let client = client();
    test_transport::respond(
        200,
        r#"{"id":7,"name":"Ana","email":"ana@example.com","role":"owner"}"#,
    );

    let error = block_on(fetch_me(&client)).expect_err("unknown role should fail to decode");

    assert!(matches!(error, ApiError::Decode(_)));
}

// ============================================================
// Logout, registration, profile
// ============================================================

#[test]
fn logout_posts_after_a_fresh_bootstrap() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, "");

    block_on(logout(&client)).expect("logout should succeed");

    assert_eq!(
        test_transport::calls(),
        vec![
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("POST {ORIGIN}/api/logout"),
        ]
    );
}

#[test]
fn register_bootstraps_and_sends_every_field() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(201, "{}");

    let payload = RegistrationPayload {
        full_name: "Ana Larasati".to_owned(),
        email: "ana@example.com".to_owned(),
        phone: "+62 812 0000 0000".to_owned(),
        password: "correcthorse".to_owned(),
        password_confirmation: "correcthorse".to_owned(),
    };
    block_on(register(&client, &payload)).expect("registration should succeed");

    assert_eq!(
        test_transport::calls(),
        vec![
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("POST {ORIGIN}/api/register"),
        ]
    );
    let body = &test_transport::bodies()[1];
    for field in [
        "full_name",
        "email",
        "phone",
        "password",
        "password_confirmation",
    ] {
        assert!(body.contains(field), "register body missing {field}");
    }
}

#[test]
fn update_profile_uses_put_behind_a_bootstrap() {
    let client = client();
    test_transport::respond(204, "");
    test_transport::respond(200, "{}");

    block_on(update_profile(&client, "Ana L.", "+62 813 1111 1111"))
        .expect("profile update should succeed");

    assert_eq!(
        test_transport::calls(),
        vec![
            format!("GET {ORIGIN}/sanctum/csrf-cookie"),
            format!("PUT {ORIGIN}/api/profile"),
        ]
    );
}

#[test]
fn fetch_profile_decodes_enveloped_answers() {
    let client = client();
    test_transport::respond(
        200,
        r#"{"data":{"name":"Ana Larasati","phone":"+62 812 0000 0000","email":"ana@example.com"}}"#,
    );

    let profile = block_on(fetch_profile(&client)).expect("profile should decode");

    assert_eq!(profile.name, "Ana Larasati");
    assert_eq!(profile.phone.as_deref(), Some("+62 812 0000 0000"));
}
