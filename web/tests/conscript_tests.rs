/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use axum::http::StatusCode;
use common::*;
use pixis_core::types::*;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_conscript_hides_password() {
    let server = create_test_server().await;
    let token = test_token();
    let department = seed_department(&server, &token, "Signals").await;

    let response = server
        .post("/conscripts")
        .authorization_bearer(&token)
        .json(&json!({
            "firstName": "Anna",
            "lastName": "Berg",
            "registryNumber": "R1",
            "username": "aberg",
            "password": "secret",
            "departmentId": department.id,
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert!(body.get("password").is_none());
    assert_eq!(body["first_name"], "Anna");
    assert_eq!(body["registry_number"], "R1");
    assert_eq!(body["department_id"], department.id);
}

#[tokio::test]
async fn test_create_conscript_duplicate_username() {
    let server = create_test_server().await;
    let token = test_token();
    let department = seed_department(&server, &token, "Signals").await;
    seed_conscript(&server, &token, "aberg", "secret", department.id).await;

    let response = server
        .post("/conscripts")
        .authorization_bearer(&token)
        .json(&json!({
            "first_name": "Other",
            "last_name": "Person",
            "registry_number": "R-other",
            "username": "aberg",
            "password": "secret",
            "department_id": department.id,
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_conscript_rejects_bad_username() {
    let server = create_test_server().await;
    let token = test_token();
    let department = seed_department(&server, &token, "Signals").await;

    let response = server
        .post("/conscripts")
        .authorization_bearer(&token)
        .json(&json!({
            "first_name": "Anna",
            "last_name": "Berg",
            "registry_number": "R1",
            "username": "a berg",
            "password": "secret",
            "department_id": department.id,
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_conscript_partial() {
    let server = create_test_server().await;
    let token = test_token();
    let department = seed_department(&server, &token, "Signals").await;
    let created = seed_conscript(&server, &token, "aberg", "secret", department.id).await;

    let response = server
        .put(&format!("/conscripts/{}", created.id))
        .authorization_bearer(&token)
        .json(&json!({ "lastName": "Lind" }))
        .await;

    response.assert_status_ok();
    let updated = response.json::<MConscript>();
    assert_eq!(updated.last_name, "Lind");
    assert_eq!(updated.first_name, created.first_name);
    assert_eq!(updated.username, created.username);
    assert_eq!(updated.registry_number, created.registry_number);
}

#[tokio::test]
async fn test_update_conscript_password_changes_login() {
    let server = create_test_server().await;
    let token = test_token();
    let department = seed_department(&server, &token, "Signals").await;
    let created = seed_conscript(&server, &token, "aberg", "secret", department.id).await;

    server
        .put(&format!("/conscripts/{}", created.id))
        .authorization_bearer(&token)
        .json(&json!({ "password": "changed" }))
        .await
        .assert_status_ok();

    server
        .post("/auth/login")
        .json(&json!({ "username": "aberg", "password": "secret" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    server
        .post("/auth/login")
        .json(&json!({ "username": "aberg", "password": "changed" }))
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_delete_conscript_removes_assignments() {
    let server = create_test_server().await;
    let token = test_token();
    let department = seed_department(&server, &token, "Signals").await;
    let service = seed_service(&server, &token, "Radio", department.id).await;
    let duty = seed_duty(&server, &token, "Night watch", service.id).await;
    let conscript = seed_conscript(&server, &token, "aberg", "secret", department.id).await;

    server
        .post("/conscript_duties")
        .authorization_bearer(&token)
        .json(&json!({ "conscript_id": conscript.id, "duty_id": duty.id }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete(&format!("/conscripts/{}", conscript.id))
        .authorization_bearer(&token)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get("/conscript_duties")
        .authorization_bearer(&token)
        .await;
    response.assert_status_ok();
    assert!(response.json::<Vec<MConscriptDuty>>().is_empty());
}
