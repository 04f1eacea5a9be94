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

//! Application configuration loaded from environment variables.
//!
//! All variables are read once at startup. Empty values are treated exactly
//! like unset ones, so an optional service SID is either a real SID or absent.

use std::env;

/// Default token lifetime (one hour).
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

/// Longest lifetime the platform accepts for an access token (24 hours).
pub const MAX_TOKEN_TTL_SECS: i64 = 86_400;

/// Room the video grant is restricted to unless `TWILIO_VIDEO_ROOM` overrides it.
pub const DEFAULT_VIDEO_ROOM: &str = "default_room";

pub const DEFAULT_NOTIFY_BASE_URL: &str = "https://notify.twilio.com";

pub const ACCOUNT_SID_VAR: &str = "TWILIO_ACCOUNT_SID";
pub const API_KEY_VAR: &str = "TWILIO_API_KEY";
pub const API_SECRET_VAR: &str = "TWILIO_API_SECRET";
pub const NOTIFICATION_SERVICE_SID_VAR: &str = "TWILIO_NOTIFICATION_SERVICE_SID";

/// Configuration for the token server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server (e.g. "0.0.0.0:3000").
    pub listen_addr: String,
    /// Directory holding the quickstart HTML pages.
    pub static_dir: String,
    /// Account SID tokens are attributed to.
    pub account_sid: Option<String>,
    /// API key SID used as the signing key id.
    pub api_key: Option<String>,
    /// API key secret used to sign tokens (HMAC-SHA256).
    pub api_secret: Option<String>,
    /// Sync service SID. `None` disables the sync grant.
    pub sync_service_sid: Option<String>,
    /// Chat service SID. `None` disables the chat grant.
    pub chat_service_sid: Option<String>,
    /// Notify service SID. Only required by `/register` and `/send-notification`.
    pub notification_service_sid: Option<String>,
    /// Client configuration profile SID. Only reported by `/config`.
    pub configuration_sid: Option<String>,
    /// Room the video grant is restricted to. `None` allows any room.
    pub video_room: Option<String>,
    /// Token time-to-live in seconds (default: 3600).
    pub token_ttl_secs: i64,
    /// Base URL of the Notify REST API.
    pub notify_base_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Required for token issuance
    /// - `TWILIO_ACCOUNT_SID`, `TWILIO_API_KEY`, `TWILIO_API_SECRET`
    ///
    /// Missing credentials do not fail startup; they are reported as
    /// configuration errors by the endpoints that need them.
    ///
    /// # Optional
    /// - `LISTEN_ADDR` (default: `"0.0.0.0:3000"`)
    /// - `STATIC_DIR` (default: `"static"`)
    /// - `TWILIO_SYNC_SERVICE_SID`, `TWILIO_CHAT_SERVICE_SID`
    /// - `TWILIO_NOTIFICATION_SERVICE_SID`, `TWILIO_CONFIGURATION_SID`
    /// - `TWILIO_VIDEO_ROOM` (default: `"default_room"`, set empty for any room)
    /// - `TOKEN_TTL_SECS` (default: `"3600"`, at most `"86400"`)
    /// - `TWILIO_NOTIFY_BASE_URL` (default: `"https://notify.twilio.com"`)
    pub fn from_env() -> Result<Self, String> {
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string());

        let token_ttl_secs = env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_TTL_SECS.to_string())
            .parse::<i64>()
            .map_err(|_| "TOKEN_TTL_SECS must be a valid integer")?;
        if token_ttl_secs <= 0 {
            return Err("TOKEN_TTL_SECS must be positive".to_string());
        }
        if token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(format!(
                "TOKEN_TTL_SECS must not exceed {MAX_TOKEN_TTL_SECS} (24 hours)"
            ));
        }

        let video_room = match env::var("TWILIO_VIDEO_ROOM") {
            Ok(room) => Some(room).filter(|s| !s.is_empty()),
            Err(_) => Some(DEFAULT_VIDEO_ROOM.to_string()),
        };

        let notify_base_url = non_empty_var("TWILIO_NOTIFY_BASE_URL")
            .unwrap_or_else(|| DEFAULT_NOTIFY_BASE_URL.to_string());
        url::Url::parse(&notify_base_url)
            .map_err(|e| format!("TWILIO_NOTIFY_BASE_URL is not a valid URL: {e}"))?;

        Ok(Self {
            listen_addr,
            static_dir,
            account_sid: non_empty_var(ACCOUNT_SID_VAR),
            api_key: non_empty_var(API_KEY_VAR),
            api_secret: non_empty_var(API_SECRET_VAR),
            sync_service_sid: non_empty_var("TWILIO_SYNC_SERVICE_SID"),
            chat_service_sid: non_empty_var("TWILIO_CHAT_SERVICE_SID"),
            notification_service_sid: non_empty_var(NOTIFICATION_SERVICE_SID_VAR),
            configuration_sid: non_empty_var("TWILIO_CONFIGURATION_SID"),
            video_room,
            token_ttl_secs,
            notify_base_url,
        })
    }

    /// Names of the credential variables that are missing, in declaration order.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        [
            (ACCOUNT_SID_VAR, &self.account_sid),
            (API_KEY_VAR, &self.api_key),
            (API_SECRET_VAR, &self.api_secret),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.is_empty())
}
