/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod auth;
pub mod conscript_duties;
pub mod conscripts;
pub mod departments;
pub mod duties;
pub mod services;

use crate::error::{WebError, WebResult};
use axum::extract::Json;
use pixis_core::types::StatusResponse;

pub async fn handle_404() -> WebError {
    WebError::NotFound("Not Found".to_string())
}

pub async fn get_health() -> WebResult<Json<StatusResponse>> {
    let res = StatusResponse {
        status: "ok".to_string(),
    };

    Ok(Json(res))
}
