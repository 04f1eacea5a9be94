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

//! Configuration health check.

use axum::{extract::State, Json};
use comms_api_types::responses::ConfigResponse;

use crate::state::AppState;

/// GET /config
///
/// Reports which platform settings are present. The API secret is reported
/// only as a boolean.
pub async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let config = &state.config;
    Json(ConfigResponse {
        twilio_account_sid: config.account_sid.clone(),
        twilio_notification_service_sid: config.notification_service_sid.clone(),
        twilio_api_key: config.api_key.clone(),
        twilio_api_secret: config.api_secret.is_some(),
        twilio_chat_service_sid: config.chat_service_sid.clone(),
        twilio_sync_service_sid: config.sync_service_sid.clone(),
        twilio_configuration_sid: config.configuration_sid.clone(),
    })
}
