//! Web API Conversion Tests
//!
//! Integration tests for the token-gated mask/CIDR conversion endpoints.

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::StatusCode;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{json, Value};

use common::{create_test_server, login_token, BOB_PASSWORD, TEST_SECRET};

// ============================================================================
// Conversion Tests (authenticated)
// ============================================================================

#[tokio::test]
async fn test_mask_to_cidr() {
    let server = create_test_server().await;
    let token = login_token(&server, "bob", BOB_PASSWORD).await;

    let response = server
        .get("/mask-to-cidr")
        .add_query_param("value", "255.255.0.0")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "function": "maskToCidr",
        "input": "255.255.0.0",
        "output": "16"
    }));
}

#[tokio::test]
async fn test_cidr_to_mask() {
    let server = create_test_server().await;
    let token = login_token(&server, "bob", BOB_PASSWORD).await;

    let response = server
        .get("/cidr-to-mask")
        .add_query_param("value", "24")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "function": "cidrToMask",
        "input": "24",
        "output": "255.255.255.0"
    }));
}

#[tokio::test]
async fn test_cidr_to_mask_slash_form() {
    let server = create_test_server().await;
    let token = login_token(&server, "bob", BOB_PASSWORD).await;

    let response = server
        .get("/cidr-to-mask")
        .add_query_param("value", "/16")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["output"], "255.255.0.0");
}

#[tokio::test]
async fn test_mask_to_cidr_non_contiguous_mask() {
    // Bit counting only: a mask with gaps still "converts".
    let server = create_test_server().await;
    let token = login_token(&server, "bob", BOB_PASSWORD).await;

    let response = server
        .get("/mask-to-cidr")
        .add_query_param("value", "255.0.255.0")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["output"], "16");
}

#[tokio::test]
async fn test_mask_to_cidr_invalid_value() {
    let server = create_test_server().await;
    let token = login_token(&server, "bob", BOB_PASSWORD).await;

    let response = server
        .get("/mask-to-cidr")
        .add_query_param("value", "not-an-ip")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "UNPROCESSABLE_ENTITY");
}

#[tokio::test]
async fn test_cidr_to_mask_out_of_range() {
    let server = create_test_server().await;
    let token = login_token(&server, "bob", BOB_PASSWORD).await;

    let response = server
        .get("/cidr-to-mask")
        .add_query_param("value", "33")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_conversion_missing_value_param() {
    let server = create_test_server().await;
    let token = login_token(&server, "bob", BOB_PASSWORD).await;

    let response = server
        .get("/cidr-to-mask")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

// ============================================================================
// Gate Tests (unauthenticated / invalid tokens)
// ============================================================================

#[tokio::test]
async fn test_conversion_without_header() {
    let server = create_test_server().await;

    let response = server
        .get("/mask-to-cidr")
        .add_query_param("value", "255.255.0.0")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_conversion_with_garbage_token() {
    let server = create_test_server().await;

    let response = server
        .get("/cidr-to-mask")
        .add_query_param("value", "24")
        .add_header(AUTHORIZATION, "Bearer invalid-token")
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_conversion_with_foreign_secret() {
    let server = create_test_server().await;
    let token = maskcalc::TokenAuthority::new("some-other-secret")
        .issue("viewer")
        .unwrap();

    let response = server
        .get("/cidr-to-mask")
        .add_query_param("value", "24")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_conversion_with_foreign_algorithm() {
    // A token whose header claims a non-HMAC algorithm must be rejected
    // even if it is otherwise well-formed.
    let server = create_test_server().await;

    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(br#"{"role":"admin"}"#);
    let token = format!("{header}.{payload}.c2lnbmF0dXJl");

    let response = server
        .get("/mask-to-cidr")
        .add_query_param("value", "255.255.0.0")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.text().is_empty());
}

#[tokio::test]
async fn test_hmac_family_token_accepted() {
    // HS384 is a different algorithm within the accepted HMAC family.
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

    let server = create_test_server().await;

    let claims = json!({"role": "viewer"});
    let token = encode(
        &Header::new(Algorithm::HS384),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = server
        .get("/cidr-to-mask")
        .add_query_param("value", "8")
        .add_header(AUTHORIZATION, format!("Bearer {token}"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["output"], "255.0.0.0");
}
