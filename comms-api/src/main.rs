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

//! Token server entry point.
//!
//! A standalone Axum service that issues short-lived access tokens for the
//! Video, Sync and Chat quickstart pages and forwards Notify requests.

use std::time::Duration;

use comms_api::config::Config;
use comms_api::routes;
use comms_api::state::AppState;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("failed to load configuration");

    let missing = config.missing_credentials();
    if !missing.is_empty() {
        tracing::warn!(
            "Missing {}; token and notification endpoints will answer with configuration errors",
            missing.join(", ")
        );
    }
    if config.sync_service_sid.is_none() {
        tracing::info!("TWILIO_SYNC_SERVICE_SID unset; tokens will not carry a sync grant");
    }
    if config.chat_service_sid.is_none() {
        tracing::info!("TWILIO_CHAT_SERVICE_SID unset; tokens will not carry a chat grant");
    }

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("failed to build HTTP client");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let listen_addr = config.listen_addr.clone();
    let static_dir = config.static_dir.clone();
    let state = AppState::new(config, http);
    let app = routes::router(&static_dir).layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind listener");

    tracing::info!("Token server listening on {listen_addr}");

    axum::serve(listener, app).await.expect("server error");
}
