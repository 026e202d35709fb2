/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderValue, StatusCode};
use chrono::Utc;
use common::*;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use pixis_core::types::*;
use serde_json::json;
use web::authorization::{Claims, encode_jwt};
use web::endpoints::auth::LoginResponse;

#[tokio::test]
async fn test_login_returns_usable_token() {
    let server = create_test_server().await;
    let department = seed_department(&server, &test_token(), "Signals").await;
    let conscript = seed_conscript(&server, &test_token(), "aberg", "secret", department.id).await;

    let response = server
        .post("/auth/login")
        .json(&json!({ "username": "aberg", "password": "secret" }))
        .await;

    response.assert_status_ok();
    let login = response.json::<LoginResponse>();
    assert_eq!(login.conscript.id, conscript.id);
    assert_eq!(login.conscript.username, "aberg");
    assert!(!login.token.is_empty());

    server
        .get("/departments")
        .authorization_bearer(&login.token)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let server = create_test_server().await;
    let department = seed_department(&server, &test_token(), "Signals").await;
    seed_conscript(&server, &test_token(), "aberg", "secret", department.id).await;

    let wrong_password = server
        .post("/auth/login")
        .json(&json!({ "username": "aberg", "password": "nope" }))
        .await;
    wrong_password.assert_status(StatusCode::UNAUTHORIZED);

    let unknown_user = server
        .post("/auth/login")
        .json(&json!({ "username": "ghost", "password": "secret" }))
        .await;
    unknown_user.assert_status(StatusCode::UNAUTHORIZED);

    assert_eq!(
        wrong_password.json::<ErrorResponse>(),
        unknown_user.json::<ErrorResponse>()
    );
}

#[tokio::test]
async fn test_login_rejects_malformed_body() {
    let server = create_test_server().await;

    server
        .post("/auth/login")
        .json(&json!({ "username": "aberg" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/auth/login")
        .json(&json!({ "username": "", "password": "" }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_gate_rejects_missing_header() {
    let server = create_test_server().await;

    let response = server.get("/departments").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(!response.json::<ErrorResponse>().error.is_empty());
}

#[tokio::test]
async fn test_gate_rejects_non_bearer_header() {
    let server = create_test_server().await;

    server
        .get("/departments")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Basic {}", test_token())).unwrap(),
        )
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .get("/departments")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer"))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_rejects_tampered_token() {
    let server = create_test_server().await;
    let token = test_token();
    let (head, signature) = token.rsplit_once('.').unwrap();
    let flipped = if signature.starts_with('A') { 'B' } else { 'A' };
    let token = format!("{}.{}{}", head, flipped, &signature[1..]);

    server
        .get("/departments")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    let foreign = encode_jwt("some-other-secret", 1).unwrap();
    server
        .get("/departments")
        .authorization_bearer(&foreign)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_rejects_expired_token() {
    let server = create_test_server().await;
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: "1".to_string(),
        exp: now - 3600,
        iat: now - 90000,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_ref()),
    )
    .unwrap();

    server
        .get("/conscripts")
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_gate_covers_every_resource() {
    let server = create_test_server().await;

    for path in [
        "/departments",
        "/departments/1",
        "/services",
        "/services/1",
        "/duties",
        "/duties/1",
        "/conscripts",
        "/conscripts/1",
        "/conscript_duties",
    ] {
        server
            .get(path)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_health_and_fallback_are_public() {
    let server = create_test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<StatusResponse>().status, "ok");

    server
        .get("/does-not-exist")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
