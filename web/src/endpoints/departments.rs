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
pub struct MakeDepartmentRequest {
    pub label: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchDepartmentRequest {
    pub label: Option<String>,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MDepartment>>> {
    let departments = find_all::<EDepartment>(&state.db, Condition::all()).await?;
    Ok(Json(departments))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeDepartmentRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MDepartment>)> {
    let Json(body) = payload?;

    validate_label(&body.label)?;

    let adepartment = ADepartment {
        label: Set(body.label),
        ..Default::default()
    };

    let department = create(&state.db, adepartment).await?;
    tracing::debug!(id = department.id, "Created department");

    Ok((StatusCode::CREATED, Json(department)))
}

pub async fn get_department(
    state: State<Arc<ServerState>>,
    Path(department_id): Path<String>,
) -> WebResult<Json<MDepartment>> {
    let department_id = parse_id(&department_id)?;
    let department = find_by_id::<EDepartment>(&state.db, department_id, "Department").await?;

    Ok(Json(department))
}

pub async fn put_department(
    state: State<Arc<ServerState>>,
    Path(department_id): Path<String>,
    payload: Result<Json<PatchDepartmentRequest>, JsonRejection>,
) -> WebResult<Json<MDepartment>> {
    let department_id = parse_id(&department_id)?;
    let Json(body) = payload?;

    let department = find_by_id::<EDepartment>(&state.db, department_id, "Department").await?;
    let mut adepartment = department.into_active_model();

    if let Some(label) = body.label {
        validate_label(&label)?;
        adepartment.label = Set(label);
    }

    let department = update(&state.db, adepartment).await?;

    Ok(Json(department))
}

pub async fn delete_department(
    state: State<Arc<ServerState>>,
    Path(department_id): Path<String>,
) -> WebResult<StatusCode> {
    let department_id = parse_id(&department_id)?;
    delete_by_id::<EDepartment>(&state.db, department_id, "Department").await?;

    Ok(StatusCode::NO_CONTENT)
}
