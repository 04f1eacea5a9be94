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

//! Response types for the token server REST API.
//!
//! Successful token, acknowledgement and configuration payloads are returned
//! bare, since the quickstart pages read them directly. Failures use the
//! [`APIResponse`] envelope: `{ "success": false, "result": <APIError> }`.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Generic envelope
// ---------------------------------------------------------------------------

/// Top-level API response envelope.
///
/// # Error example
///
/// ```json
/// { "success": false, "result": { "code": "CONFIGURATION_ERROR", "message": "..." } }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIResponse<A: Serialize> {
    pub success: bool,
    pub result: A,
}

impl APIResponse<crate::error::APIError> {
    /// Wrap an error result.
    pub fn error(err: crate::error::APIError) -> Self {
        Self {
            success: false,
            result: err,
        }
    }
}

// ---------------------------------------------------------------------------
// Endpoint-specific response payloads
// ---------------------------------------------------------------------------

/// Response payload for every `/token` route.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub identity: String,
    /// Signed access token (compact JWT).
    pub token: String,
}

/// Fixed acknowledgement returned by `/register` and `/send-notification`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response payload for `GET /config`.
///
/// Reports the configured service SIDs so a deployer can check the
/// environment. The API secret is only ever reported as present or absent.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ConfigResponse {
    pub twilio_account_sid: Option<String>,
    pub twilio_notification_service_sid: Option<String>,
    pub twilio_api_key: Option<String>,
    pub twilio_api_secret: bool,
    pub twilio_chat_service_sid: Option<String>,
    pub twilio_sync_service_sid: Option<String>,
    pub twilio_configuration_sid: Option<String>,
}
