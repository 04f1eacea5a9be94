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

//! API error types.
//!
//! Every failed API response is returned as `APIResponse<APIError>` with `success: false`.

use serde::{Deserialize, Serialize};

/// Structured error returned in the `result` field of a failed [`super::APIResponse`].
///
/// The `code` field is a machine-readable identifier (e.g. `"CONFIGURATION_ERROR"`).
/// The `message` field is a human-readable description suitable for display.
/// The `engineering_error` field carries debug-level detail (upstream status codes,
/// transport errors) that is useful during development.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIError {
    /// Machine-readable error code (e.g. `"INVALID_REQUEST"`, `"UPSTREAM_ERROR"`).
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    /// Optional engineering-level detail for debugging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engineering_error: Option<String>,
}

impl APIError {
    /// A mandatory configuration value (named by its environment variable) is missing.
    pub fn configuration(var: &str) -> Self {
        Self {
            code: "CONFIGURATION_ERROR".to_string(),
            message: "Server is not configured to issue this resource.".to_string(),
            engineering_error: Some(format!("{var} is not set")),
        }
    }

    pub fn invalid_identity() -> Self {
        Self {
            code: "INVALID_IDENTITY".to_string(),
            message: "Identity must be a non-empty string.".to_string(),
            engineering_error: None,
        }
    }

    pub fn bad_request(detail: &str) -> Self {
        Self {
            code: "INVALID_REQUEST".to_string(),
            message: format!("Invalid request: {detail}"),
            engineering_error: None,
        }
    }

    pub fn upstream(detail: &str) -> Self {
        Self {
            code: "UPSTREAM_ERROR".to_string(),
            message: "The communications platform rejected the request.".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }

    pub fn internal_error(detail: &str) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "Internal server error".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }
}

impl std::fmt::Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for APIError {}
