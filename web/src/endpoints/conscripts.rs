/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use password_auth::generate_hash;
use pixis_core::database::{create, delete_by_id, find_all, find_by_id, update};
use pixis_core::input::{parse_id, validate_required, validate_username};
use pixis_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{Condition, IntoActiveModel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeConscriptRequest {
    #[serde(alias = "firstName")]
    pub first_name: String,
    #[serde(alias = "lastName")]
    pub last_name: String,
    #[serde(alias = "registryNumber")]
    pub registry_number: String,
    pub username: String,
    pub password: String,
    #[serde(alias = "departmentId")]
    pub department_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchConscriptRequest {
    #[serde(alias = "firstName")]
    pub first_name: Option<String>,
    #[serde(alias = "lastName")]
    pub last_name: Option<String>,
    #[serde(alias = "registryNumber")]
    pub registry_number: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(alias = "departmentId")]
    pub department_id: Option<i32>,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MConscript>>> {
    let conscripts = find_all::<EConscript>(&state.db, Condition::all()).await?;
    Ok(Json(conscripts))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeConscriptRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MConscript>)> {
    let Json(body) = payload?;

    validate_required("first_name", &body.first_name)?;
    validate_required("last_name", &body.last_name)?;
    validate_required("registry_number", &body.registry_number)?;
    validate_username(&body.username)?;
    validate_required("password", &body.password)?;

    let aconscript = AConscript {
        first_name: Set(body.first_name),
        last_name: Set(body.last_name),
        registry_number: Set(body.registry_number),
        username: Set(body.username),
        password: Set(generate_hash(body.password)),
        department_id: Set(body.department_id),
        ..Default::default()
    };

    let conscript = create(&state.db, aconscript).await?;
    tracing::debug!(id = conscript.id, "Created conscript");

    Ok((StatusCode::CREATED, Json(conscript)))
}

pub async fn get_conscript(
    state: State<Arc<ServerState>>,
    Path(conscript_id): Path<String>,
) -> WebResult<Json<MConscript>> {
    let conscript_id = parse_id(&conscript_id)?;
    let conscript = find_by_id::<EConscript>(&state.db, conscript_id, "Conscript").await?;

    Ok(Json(conscript))
}

pub async fn put_conscript(
    state: State<Arc<ServerState>>,
    Path(conscript_id): Path<String>,
    payload: Result<Json<PatchConscriptRequest>, JsonRejection>,
) -> WebResult<Json<MConscript>> {
    let conscript_id = parse_id(&conscript_id)?;
    let Json(body) = payload?;

    let conscript = find_by_id::<EConscript>(&state.db, conscript_id, "Conscript").await?;
    let mut aconscript = conscript.into_active_model();

    if let Some(first_name) = body.first_name {
        validate_required("first_name", &first_name)?;
        aconscript.first_name = Set(first_name);
    }

    if let Some(last_name) = body.last_name {
        validate_required("last_name", &last_name)?;
        aconscript.last_name = Set(last_name);
    }

    if let Some(registry_number) = body.registry_number {
        validate_required("registry_number", &registry_number)?;
        aconscript.registry_number = Set(registry_number);
    }

    if let Some(username) = body.username {
        validate_username(&username)?;
        aconscript.username = Set(username);
    }

    if let Some(password) = body.password {
        validate_required("password", &password)?;
        aconscript.password = Set(generate_hash(password));
    }

    if let Some(department_id) = body.department_id {
        aconscript.department_id = Set(department_id);
    }

    let conscript = update(&state.db, aconscript).await?;

    Ok(Json(conscript))
}

pub async fn delete_conscript(
    state: State<Arc<ServerState>>,
    Path(conscript_id): Path<String>,
) -> WebResult<StatusCode> {
    let conscript_id = parse_id(&conscript_id)?;
    delete_by_id::<EConscript>(&state.db, conscript_id, "Conscript").await?;

    Ok(StatusCode::NO_CONTENT)
}
