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

//! Access token issuance.
//!
//! The server signs tokens with the API key secret; the platform validates
//! the signature and reads the grants. Issuance is pure: it performs no I/O
//! and reads only the configuration captured at startup.

use std::fmt;

use chrono::Utc;
use comms_api_types::responses::TokenResponse;
use comms_api_types::token::{ChatGrant, Grant, Grants, SyncGrant, VideoGrant};
use comms_api_types::AccessTokenClaims;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::config::{Config, ACCOUNT_SID_VAR, API_KEY_VAR, API_SECRET_VAR};
use crate::error::AppError;

/// Signs access tokens for one account and API key.
#[derive(Clone)]
pub struct TokenIssuer {
    account_sid: String,
    api_key: String,
    api_secret: String,
    sync_service_sid: Option<String>,
    chat_service_sid: Option<String>,
    video_room: Option<String>,
    ttl_secs: i64,
}

impl TokenIssuer {
    /// Build an issuer from the process configuration.
    ///
    /// Fails with a configuration error naming the first missing credential.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let account_sid = required(config.account_sid.as_deref(), ACCOUNT_SID_VAR)?;
        let api_key = required(config.api_key.as_deref(), API_KEY_VAR)?;
        let api_secret = required(config.api_secret.as_deref(), API_SECRET_VAR)?;

        Ok(Self {
            account_sid,
            api_key,
            api_secret,
            sync_service_sid: config.sync_service_sid.clone().filter(|s| !s.is_empty()),
            chat_service_sid: config.chat_service_sid.clone().filter(|s| !s.is_empty()),
            video_room: config.video_room.clone().filter(|s| !s.is_empty()),
            ttl_secs: config.token_ttl_secs,
        })
    }

    /// Issue a token for `identity`, valid from now.
    pub fn issue(&self, identity: &str) -> Result<TokenResponse, AppError> {
        self.issue_at(identity, Utc::now().timestamp())
    }

    /// Issue a token for `identity` as if the current time were `now` (Unix seconds).
    ///
    /// The output is fully determined by the issuer, `identity` and `now`.
    pub fn issue_at(&self, identity: &str, now: i64) -> Result<TokenResponse, AppError> {
        if identity.is_empty() {
            return Err(AppError::invalid_identity());
        }

        let exp = now.checked_add(self.ttl_secs).ok_or_else(|| {
            tracing::error!("Token expiry overflows for ttl {}s", self.ttl_secs);
            AppError::internal("token expiry out of range")
        })?;

        let claims = AccessTokenClaims {
            jti: format!("{}-{}", self.api_key, now),
            iss: self.api_key.clone(),
            sub: self.account_sid.clone(),
            iat: now,
            nbf: now,
            exp,
            grants: self.grants_for(identity),
        };

        let mut header = Header::new(Algorithm::HS256);
        header.cty = Some(AccessTokenClaims::CONTENT_TYPE.to_string());
        header.kid = Some(self.api_key.clone());

        let token = encode(
            &header,
            &claims,
            &EncodingKey::from_secret(self.api_secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!("Failed to sign access token: {e}");
            AppError::internal("failed to generate access token")
        })?;

        tracing::debug!(
            identity,
            grants = ?claims.grants.labels(),
            exp = claims.exp,
            "Issued access token"
        );

        Ok(TokenResponse {
            identity: identity.to_string(),
            token,
        })
    }

    fn grants_for(&self, identity: &str) -> Grants {
        let mut grants = Grants::new(identity);
        grants.add(Grant::Video(VideoGrant {
            room: self.video_room.clone(),
        }));
        if let Some(service_sid) = &self.sync_service_sid {
            grants.add(Grant::Sync(SyncGrant {
                service_sid: service_sid.clone(),
            }));
        }
        if let Some(service_sid) = &self.chat_service_sid {
            grants.add(Grant::Chat(ChatGrant {
                service_sid: service_sid.clone(),
            }));
        }
        grants
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("account_sid", &self.account_sid)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("sync_service_sid", &self.sync_service_sid)
            .field("chat_service_sid", &self.chat_service_sid)
            .field("video_room", &self.video_room)
            .field("ttl_secs", &self.ttl_secs)
            .finish()
    }
}

fn required(value: Option<&str>, var: &str) -> Result<String, AppError> {
    value
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            tracing::error!("{var} is not configured; refusing to issue tokens");
            AppError::configuration(var)
        })
}

/// Verify a token's signature and expiry and return its claims.
pub fn verify_token(
    token: &str,
    secret: &str,
) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    decode::<AccessTokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
}
