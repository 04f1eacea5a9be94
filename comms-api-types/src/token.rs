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

//! Access token (JWT) claims.
//!
//! The access token is a signed JWT (HMAC-SHA256) that grants one identity
//! scoped access to the platform's real-time services. The token server signs
//! it with an API key secret; the platform validates the signature and reads
//! the grants.

use serde::{Deserialize, Serialize};

/// JWT payload for an access token.
///
/// # Example payload
///
/// ```json
/// {
///   "jti": "SK123-1707001200",
///   "iss": "SK123",
///   "sub": "AC123",
///   "iat": 1707001200,
///   "nbf": 1707001200,
///   "exp": 1707004800,
///   "grants": {
///     "identity": "alice",
///     "video": { "room": "default_room" },
///     "data_sync": { "service_sid": "default" }
///   }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AccessTokenClaims {
    /// Unique token id: `"{api_key}-{iat}"`.
    pub jti: String,

    /// API key SID the token was signed with.
    pub iss: String,

    /// Account SID the token is attributed to.
    pub sub: String,

    /// Issued-at timestamp (Unix seconds).
    pub iat: i64,

    /// Not-before timestamp (Unix seconds). Equal to `iat`.
    pub nbf: i64,

    /// Expiration timestamp (Unix seconds).
    pub exp: i64,

    pub grants: Grants,
}

impl AccessTokenClaims {
    /// JWT `cty` header value the platform expects on access tokens.
    pub const CONTENT_TYPE: &'static str = "twilio-fpa;v=1";

    pub fn identity(&self) -> &str {
        &self.grants.identity
    }

    /// Lifetime of the token in seconds.
    pub fn ttl_secs(&self) -> i64 {
        self.exp - self.iat
    }
}

/// The `grants` object of an access token.
///
/// Each grant kind appears at most once; absent grants are omitted from the
/// serialized JSON. A token without any grant is valid but authorizes nothing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Grants {
    pub identity: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<VideoGrant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_sync: Option<SyncGrant>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<ChatGrant>,
}

impl Grants {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            video: None,
            data_sync: None,
            chat: None,
        }
    }

    /// Add a grant, replacing any existing grant of the same kind.
    pub fn add(&mut self, grant: Grant) {
        match grant {
            Grant::Video(g) => self.video = Some(g),
            Grant::Sync(g) => self.data_sync = Some(g),
            Grant::Chat(g) => self.chat = Some(g),
        }
    }

    /// The grants in canonical order: video, sync, chat.
    pub fn to_vec(&self) -> Vec<Grant> {
        let mut out = Vec::with_capacity(3);
        if let Some(g) = &self.video {
            out.push(Grant::Video(g.clone()));
        }
        if let Some(g) = &self.data_sync {
            out.push(Grant::Sync(g.clone()));
        }
        if let Some(g) = &self.chat {
            out.push(Grant::Chat(g.clone()));
        }
        out
    }

    /// Short labels for the grants, e.g. `["video", "sync:default"]`.
    pub fn labels(&self) -> Vec<String> {
        self.to_vec().iter().map(Grant::label).collect()
    }
}

/// Access to Video rooms. `room: None` allows any room.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct VideoGrant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

/// Access to one Sync service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SyncGrant {
    pub service_sid: String,
}

/// Access to one Chat service.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ChatGrant {
    pub service_sid: String,
}

/// A single scoped capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grant {
    Video(VideoGrant),
    Sync(SyncGrant),
    Chat(ChatGrant),
}

impl Grant {
    pub fn label(&self) -> String {
        match self {
            Grant::Video(_) => "video".to_string(),
            Grant::Sync(g) => format!("sync:{}", g.service_sid),
            Grant::Chat(g) => format!("chat:{}", g.service_sid),
        }
    }
}
