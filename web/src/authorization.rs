/*
 * SPDX-FileCopyrightText: 2026 Pixis Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebError;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation, decode, encode,
};
use password_auth::verify_password;
use pixis_core::consts::TOKEN_LIFETIME_HOURS;
use pixis_core::database::{StoreError, find_one};
use pixis_core::types::*;
use sea_orm::{ColumnTrait, Condition};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Token payload. `sub` carries the conscript id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn conscript_id(&self) -> Option<i32> {
        self.sub.parse().ok()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
    #[error("Missing or malformed Authorization header")]
    MissingHeader,
    #[error("Invalid or expired token")]
    InvalidOrExpired,
    #[error("Failed to generate token: {0}")]
    TokenGeneration(#[source] jsonwebtoken::errors::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub async fn authorize(
    state: State<Arc<ServerState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, WebError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or(AuthError::MissingHeader)?;

    let mut header = auth_header.split_whitespace();

    let token = match (header.next(), header.next(), header.next()) {
        (Some("Bearer"), Some(token), None) => token.to_string(),
        _ => return Err(AuthError::MissingHeader.into()),
    };

    let token_data = decode_jwt(&state.jwt_secret, &token).map_err(|e| {
        tracing::debug!("Rejected token: {}", e);
        e
    })?;

    req.extensions_mut().insert(token_data.claims);
    Ok(next.run(req).await)
}

pub fn encode_jwt(secret: &str, id: i32) -> Result<String, AuthError> {
    let now = Utc::now();
    let expire = Duration::hours(TOKEN_LIFETIME_HOURS);

    let claims = Claims {
        sub: id.to_string(),
        exp: (now + expire).timestamp() as usize,
        iat: now.timestamp() as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(AuthError::TokenGeneration)
}

/// Verifies signature and expiry. Only the HMAC family is accepted.
pub fn decode_jwt(secret: &str, jwt: &str) -> Result<TokenData<Claims>, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

    decode::<Claims>(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )
    .map_err(|_| AuthError::InvalidOrExpired)
}

/// Checks a username/password pair and issues a token for the matching
/// conscript. Unknown usernames and wrong passwords fail the same way.
pub async fn login(
    state: &ServerState,
    username: &str,
    password: &str,
) -> Result<(String, MConscript), AuthError> {
    let conscript = match find_one::<EConscript>(
        &state.db,
        Condition::all().add(CConscript::Username.eq(username)),
        "Conscript",
    )
    .await
    {
        Ok(conscript) => conscript,
        Err(StoreError::NotFound(_)) => return Err(AuthError::InvalidCredentials),
        Err(e) => return Err(e.into()),
    };

    if verify_password(password, &conscript.password).is_err() {
        return Err(AuthError::InvalidCredentials);
    }

    let token = encode_jwt(&state.jwt_secret, conscript.id)?;
    tracing::info!(conscript_id = conscript.id, "Conscript logged in");

    Ok((token, conscript))
}
