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

//! Request types for the token server REST API.
//!
//! These types define the shape of request bodies. They are used by both
//! the server (for deserialization) and clients (for serialization).

use serde::{Deserialize, Serialize};

/// Request body for `POST /token`, accepted as JSON or as a form.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct TokenRequest {
    /// Requested identity. A random username is generated if omitted or empty.
    #[serde(default)]
    pub identity: Option<String>,
}

impl TokenRequest {
    /// The requested identity, with empty and whitespace-only values treated as absent.
    pub fn identity(&self) -> Option<&str> {
        self.identity
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Request body for `POST /register`.
///
/// The quickstart frontend posts `identity`, `BindingType`, `Address` and
/// `endpoint`; snake_case spellings are accepted as well.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegisterBindingRequest {
    pub identity: String,

    /// Binding transport, e.g. `"apn"`, `"fcm"` or `"sms"`.
    #[serde(rename = "BindingType", alias = "binding_type")]
    pub binding_type: String,

    /// Device token or phone number the platform delivers to.
    #[serde(rename = "Address", alias = "address")]
    pub address: String,

    /// Optional per-device endpoint identifier.
    #[serde(default, alias = "Endpoint", skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Request body for `POST /send-notification`, accepted as JSON or as a form.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SendNotificationRequest {
    /// Identity whose bindings receive the notification.
    pub identity: String,
}
