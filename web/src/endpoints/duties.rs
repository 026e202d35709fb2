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
pub struct MakeDutyRequest {
    pub label: String,
    #[serde(alias = "serviceId")]
    pub service_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct PatchDutyRequest {
    pub label: Option<String>,
    #[serde(alias = "serviceId")]
    pub service_id: Option<i32>,
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<Vec<MDuty>>> {
    let duties = find_all::<EDuty>(&state.db, Condition::all()).await?;
    Ok(Json(duties))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeDutyRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MDuty>)> {
    let Json(body) = payload?;

    validate_label(&body.label)?;

    let aduty = ADuty {
        label: Set(body.label),
        service_id: Set(body.service_id),
        ..Default::default()
    };

    let duty = create(&state.db, aduty).await?;
    tracing::debug!(id = duty.id, "Created duty");

    Ok((StatusCode::CREATED, Json(duty)))
}

pub async fn get_duty(
    state: State<Arc<ServerState>>,
    Path(duty_id): Path<String>,
) -> WebResult<Json<MDuty>> {
    let duty_id = parse_id(&duty_id)?;
    let duty = find_by_id::<EDuty>(&state.db, duty_id, "Duty").await?;

    Ok(Json(duty))
}

pub async fn put_duty(
    state: State<Arc<ServerState>>,
    Path(duty_id): Path<String>,
    payload: Result<Json<PatchDutyRequest>, JsonRejection>,
) -> WebResult<Json<MDuty>> {
    let duty_id = parse_id(&duty_id)?;
    let Json(body) = payload?;

    let duty = find_by_id::<EDuty>(&state.db, duty_id, "Duty").await?;
    let mut aduty = duty.into_active_model();

    if let Some(label) = body.label {
        validate_label(&label)?;
        aduty.label = Set(label);
    }

    if let Some(service_id) = body.service_id {
        aduty.service_id = Set(service_id);
    }

    let duty = update(&state.db, aduty).await?;

    Ok(Json(duty))
}

pub async fn delete_duty(
    state: State<Arc<ServerState>>,
    Path(duty_id): Path<String>,
) -> WebResult<StatusCode> {
    let duty_id = parse_id(&duty_id)?;
    delete_by_id::<EDuty>(&state.db, duty_id, "Duty").await?;

    Ok(StatusCode::NO_CONTENT)
}
