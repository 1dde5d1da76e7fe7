use std::env;

use axum::body::to_bytes;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use rental_backend::middleware::auth::{authorize, require_admin};

const ADMIN_PASSWORD: &str = "correct-horse-battery-staple";

fn init() {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("DATABASE_URL", "postgres://localhost/unused");
    env::set_var("ADMIN_PASSWORD", ADMIN_PASSWORD);
    // First caller wins; later calls see the same values.
    let _ = rental_backend::config::init_config();
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        HeaderValue::from_str(value).expect("header value"),
    );
    headers
}

#[test]
fn missing_header_is_rejected() {
    init();
    assert!(!authorize(&HeaderMap::new()));
}

#[test]
fn non_bearer_scheme_is_rejected() {
    init();
    assert!(!authorize(&headers_with(&format!(
        "Basic {}",
        ADMIN_PASSWORD
    ))));
}

#[test]
fn wrong_secret_is_rejected() {
    init();
    assert!(!authorize(&headers_with("Bearer admin123")));
    assert!(!authorize(&headers_with("Bearer ")));
    assert!(!authorize(&headers_with(&format!(
        "Bearer {}x",
        ADMIN_PASSWORD
    ))));
}

#[test]
fn exact_secret_is_accepted() {
    init();
    assert!(authorize(&headers_with(&format!(
        "Bearer {}",
        ADMIN_PASSWORD
    ))));
}

#[test]
fn non_bearer_scheme_prompts_for_authorization() {
    init();

    let err = require_admin(&headers_with(&format!("Basic {}", ADMIN_PASSWORD)))
        .expect_err("non-bearer scheme must fail");
    match err {
        rental_backend::error::Error::Unauthorized(msg) => {
            assert_eq!(msg, "Admin access required - please provide authorization");
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let err = require_admin(&headers_with("Bearer admin123"))
        .expect_err("wrong secret must fail");
    match err {
        rental_backend::error::Error::Unauthorized(msg) => {
            assert_eq!(msg, "Invalid admin credentials");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn unauthorized_response_shape() {
    init();

    let err = require_admin(&HeaderMap::new()).expect_err("missing header must fail");
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
    assert_eq!(body["success"], serde_json::json!(false));
    assert!(body["error"].as_str().expect("error").contains("authorization"));

    let err = require_admin(&headers_with("Bearer nope")).expect_err("bad secret must fail");
    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn valid_credential_passes_gate() {
    init();
    assert!(require_admin(&headers_with(&format!("Bearer {}", ADMIN_PASSWORD))).is_ok());
}
