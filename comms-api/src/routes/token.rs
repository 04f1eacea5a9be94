/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Handlers that issue access tokens.

use axum::{
    extract::{Path, State},
    Json,
};
use comms_api_types::{requests::TokenRequest, responses::TokenResponse};

use crate::error::AppError;
use crate::extract::JsonOrForm;
use crate::state::AppState;
use crate::token::TokenIssuer;

/// GET /token
///
/// Issues a token for a freshly generated username.
pub async fn random_identity(
    State(state): State<AppState>,
) -> Result<Json<TokenResponse>, AppError> {
    let issuer = TokenIssuer::from_config(&state.config)?;
    let identity = state.identities.generate();
    Ok(Json(issuer.issue(&identity)?))
}

/// POST /token
///
/// Uses the `identity` field of a JSON or form body, falling back to a
/// generated username when it is absent or blank.
pub async fn identity_from_body(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let issuer = TokenIssuer::from_config(&state.config)?;
    let identity = match body.identity() {
        Some(identity) => identity.to_string(),
        None => state.identities.generate(),
    };
    Ok(Json(issuer.issue(&identity)?))
}

/// GET|POST /token/{identity}
pub async fn explicit_identity(
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> Result<Json<TokenResponse>, AppError> {
    let issuer = TokenIssuer::from_config(&state.config)?;
    Ok(Json(issuer.issue(&identity)?))
}
