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
use pixis_core::database::{create, delete_by_id, find_all, find_by_id, update};
use pixis_core::input::{parse_id, validate_label};
use pixis_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{Condition, IntoActiveModel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeServiceRequest {
    pub label: String,
    #[serde(alias = "departmentId")]
    pub department_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchServiceRequest {
    pub label: Option<String>,
    #[serde(alias = "departmentId")]
    pub department_id: Option<i32>,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MService>>> {
    let services = find_all::<EService>(&state.db, Condition::all()).await?;
    Ok(Json(services))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeServiceRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MService>)> {
    let Json(body) = payload?;

    validate_label(&body.label)?;

    let aservice = AService {
        label: Set(body.label),
        department_id: Set(body.department_id),
        ..Default::default()
    };

    let service = create(&state.db, aservice).await?;
    tracing::debug!(id = service.id, "Created service");

    Ok((StatusCode::CREATED, Json(service)))
}

pub async fn get_service(
    state: State<Arc<ServerState>>,
    Path(service_id): Path<String>,
) -> WebResult<Json<MService>> {
    let service_id = parse_id(&service_id)?;
    let service = find_by_id::<EService>(&state.db, service_id, "Service").await?;

    Ok(Json(service))
}

pub async fn put_service(
    state: State<Arc<ServerState>>,
    Path(service_id): Path<String>,
    payload: Result<Json<PatchServiceRequest>, JsonRejection>,
) -> WebResult<Json<MService>> {
    let service_id = parse_id(&service_id)?;
    let Json(body) = payload?;

    let service = find_by_id::<EService>(&state.db, service_id, "Service").await?;
    let mut aservice = service.into_active_model();

    if let Some(label) = body.label {
        validate_label(&label)?;
        aservice.label = Set(label);
    }

    if let Some(department_id) = body.department_id {
        aservice.department_id = Set(department_id);
    }

    let service = update(&state.db, aservice).await?;

    Ok(Json(service))
}

pub async fn delete_service(
    state: State<Arc<ServerState>>,
    Path(service_id): Path<String>,
) -> WebResult<StatusCode> {
    let service_id = parse_id(&service_id)?;
    delete_by_id::<EService>(&state.db, service_id, "Service").await?;

    Ok(StatusCode::NO_CONTENT)
}
