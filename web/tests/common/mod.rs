/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use pixis_core::database::open_db;
use pixis_core::types::*;
use sea_orm::ConnectOptions;
use serde_json::json;
use std::sync::Arc;
use web::authorization::encode_jwt;
use web::create_router;

pub const JWT_SECRET: &str = "pixis-test-secret";

pub fn create_test_cli() -> Cli {
    Cli {
        log_level: "info".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        serve_url: None,
        database_url: "sqlite::memory:".to_string(),
        database_url_file: None,
        max_connections: 1,
        jwt_secret_file: None,
        jwt_secret: Some(JWT_SECRET.to_string()),
    }
}

pub async fn create_test_state() -> Arc<ServerState> {
    create_test_state_with(create_test_cli()).await
}

pub async fn create_test_state_with(cli: Cli) -> Arc<ServerState> {

    // A single pooled connection keeps the in-memory database alive.
    let mut opt = ConnectOptions::new(cli.database_url.clone());
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = open_db(opt).await.unwrap();

    Arc::new(ServerState {
        db,
        cli,
        jwt_secret: JWT_SECRET.to_string(),
    })
}

pub async fn create_test_server() -> TestServer {
    let state = create_test_state().await;
    TestServer::new(create_router(state)).unwrap()
}

/// Token for conscript id 1. Verification does not touch the store, so the
/// conscript does not need to exist.
pub fn test_token() -> String {
    encode_jwt(JWT_SECRET, 1).unwrap()
}

pub async fn seed_department(server: &TestServer, token: &str, label: &str) -> MDepartment {
    server
        .post("/departments")
        .authorization_bearer(token)
        .json(&json!({ "label": label }))
        .await
        .json::<MDepartment>()
}

pub async fn seed_service(
    server: &TestServer,
    token: &str,
    label: &str,
    department_id: i32,
) -> MService {
    server
        .post("/services")
        .authorization_bearer(token)
        .json(&json!({ "label": label, "department_id": department_id }))
        .await
        .json::<MService>()
}

pub async fn seed_duty(server: &TestServer, token: &str, label: &str, service_id: i32) -> MDuty {
    server
        .post("/duties")
        .authorization_bearer(token)
        .json(&json!({ "label": label, "service_id": service_id }))
        .await
        .json::<MDuty>()
}

pub async fn seed_conscript(
    server: &TestServer,
    token: &str,
    username: &str,
    password: &str,
    department_id: i32,
) -> MConscript {
    server
        .post("/conscripts")
        .authorization_bearer(token)
        .json(&json!({
            "first_name": "Test",
            "last_name": username,
            "registry_number": format!("R-{}", username),
            "username": username,
            "password": password,
            "department_id": department_id,
        }))
        .await
        .json::<MConscript>()
}
