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

//! Axum router configuration for the token server.

pub mod health;
pub mod notify;
pub mod token;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the full application router.
///
/// Paths that match no API route are served from `static_dir`, which holds
/// the quickstart pages (`/`, `/video/`, `/sync/`, `/notify/`, `/chat/`).
pub fn router(static_dir: impl AsRef<Path>) -> Router<AppState> {
    Router::new()
        // Access tokens
        .route(
            "/token",
            get(token::random_identity).post(token::identity_from_body),
        )
        .route(
            "/token/{identity}",
            get(token::explicit_identity).post(token::explicit_identity),
        )
        // Notify
        .route("/register", post(notify::register))
        .route("/send-notification", post(notify::send_notification))
        // Health check
        .route("/config", get(health::config))
        .fallback_service(ServeDir::new(static_dir))
}
