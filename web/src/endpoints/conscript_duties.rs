/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Assignments are addressed by the `(conscript_id, duty_id)` pair carried
//! in the request body rather than by a path id.

use crate::error::WebResult;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use pixis_core::database::{create, delete_by_id, find_all, find_by_id, update};
use pixis_core::input::{parse_id, validate_window};
use pixis_core::types::*;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, Condition, IntoActiveModel};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeConscriptDutyRequest {
    #[serde(alias = "conscriptId")]
    pub conscript_id: i32,
    #[serde(alias = "dutyId")]
    pub duty_id: i32,
    #[serde(alias = "startTime")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(alias = "endTime")]
    pub end_time: Option<DateTime<Utc>>,
}

/// `start_time`/`end_time`: absent leaves the value untouched, `null`
/// clears it.
#[derive(Serialize, Deserialize, Debug)]
pub struct PatchConscriptDutyRequest {
    #[serde(alias = "conscriptId")]
    pub conscript_id: i32,
    #[serde(alias = "dutyId")]
    pub duty_id: i32,
    #[serde(
        default,
        alias = "startTime",
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<Option<DateTime<Utc>>>,
    #[serde(
        default,
        alias = "endTime",
        with = "::serde_with::rust::double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<Option<DateTime<Utc>>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ConscriptDutyKey {
    #[serde(alias = "conscriptId")]
    pub conscript_id: i32,
    #[serde(alias = "dutyId")]
    pub duty_id: i32,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ConscriptDutyQuery {
    pub conscript_id: Option<String>,
    pub duty_id: Option<String>,
}

impl ConscriptDutyQuery {
    /// Malformed values are dropped instead of rejected.
    fn to_condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(conscript_id) = self.conscript_id.as_deref().and_then(|s| parse_id(s).ok()) {
            condition = condition.add(CConscriptDuty::ConscriptId.eq(conscript_id));
        }

        if let Some(duty_id) = self.duty_id.as_deref().and_then(|s| parse_id(s).ok()) {
            condition = condition.add(CConscriptDuty::DutyId.eq(duty_id));
        }

        condition
    }
}

pub async fn get(
    state: State<Arc<ServerState>>,
    Query(query): Query<ConscriptDutyQuery>,
) -> WebResult<Json<Vec<MConscriptDuty>>> {
    let conscript_duties = find_all::<EConscriptDuty>(&state.db, query.to_condition()).await?;
    Ok(Json(conscript_duties))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeConscriptDutyRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<MConscriptDuty>)> {
    let Json(body) = payload?;

    validate_window(body.start_time, body.end_time)?;

    let aconscript_duty = AConscriptDuty {
        conscript_id: Set(body.conscript_id),
        duty_id: Set(body.duty_id),
        start_time: Set(body.start_time),
        end_time: Set(body.end_time),
        ..Default::default()
    };

    let conscript_duty = create(&state.db, aconscript_duty).await?;
    tracing::debug!(
        conscript_id = conscript_duty.conscript_id,
        duty_id = conscript_duty.duty_id,
        "Assigned duty"
    );

    Ok((StatusCode::CREATED, Json(conscript_duty)))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    payload: Result<Json<PatchConscriptDutyRequest>, JsonRejection>,
) -> WebResult<Json<MConscriptDuty>> {
    let Json(body) = payload?;

    let conscript_duty = find_by_id::<EConscriptDuty>(
        &state.db,
        (body.conscript_id, body.duty_id),
        "ConscriptDuty",
    )
    .await?;

    let start_time = body.start_time.unwrap_or(conscript_duty.start_time);
    let end_time = body.end_time.unwrap_or(conscript_duty.end_time);

    validate_window(start_time, end_time)?;

    let mut aconscript_duty = conscript_duty.into_active_model();
    aconscript_duty.start_time = Set(start_time);
    aconscript_duty.end_time = Set(end_time);

    let conscript_duty = update(&state.db, aconscript_duty).await?;

    Ok(Json(conscript_duty))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    payload: Result<Json<ConscriptDutyKey>, JsonRejection>,
) -> WebResult<StatusCode> {
    let Json(key) = payload?;

    delete_by_id::<EConscriptDuty>(
        &state.db,
        (key.conscript_id, key.duty_id),
        "ConscriptDuty",
    )
    .await?;

    Ok(StatusCode::NO_CONTENT)
}
