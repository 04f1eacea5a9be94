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

//! Handlers that forward device registrations and notifications to Notify.

use axum::{extract::State, Json};
use comms_api_types::{
    requests::{RegisterBindingRequest, SendNotificationRequest},
    responses::MessageResponse,
};

use crate::error::AppError;
use crate::extract::JsonOrForm;
use crate::notify::NotifyClient;
use crate::state::AppState;

/// POST /register
///
/// Creates a device binding so the identity can receive push or SMS notifications.
pub async fn register(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<RegisterBindingRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let client = NotifyClient::from_config(&state.config, state.http.clone())?;
    if body.identity.trim().is_empty() {
        return Err(AppError::bad_request("identity must not be empty"));
    }

    client.create_binding(&body).await?;
    Ok(Json(MessageResponse::new("Binding created!")))
}

/// POST /send-notification
///
/// Sends `"Hello {identity}!"` to every binding registered for the identity.
pub async fn send_notification(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<SendNotificationRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let client = NotifyClient::from_config(&state.config, state.http.clone())?;
    let identity = body.identity.trim();
    if identity.is_empty() {
        return Err(AppError::bad_request("identity must not be empty"));
    }

    client
        .send_notification(identity, &format!("Hello {identity}!"))
        .await?;
    Ok(Json(MessageResponse::new("Notification created!")))
}
