/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::authorization::login;
use crate::error::WebResult;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use pixis_core::input::validate_required;
use pixis_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct MakeLoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub conscript: MConscript,
}

pub async fn post_login(
    state: State<Arc<ServerState>>,
    payload: Result<Json<MakeLoginRequest>, JsonRejection>,
) -> WebResult<Json<LoginResponse>> {
    let Json(body) = payload?;

    validate_required("username", &body.username)?;
    validate_required("password", &body.password)?;

    let (token, conscript) = login(&state, &body.username, &body.password).await?;

    Ok(Json(LoginResponse { token, conscript }))
}
