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

//! Shared application state passed to every Axum handler via `State`.

use std::sync::Arc;

use crate::config::Config;
use crate::identity::{IdentityGenerator, RandomUsername};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Configuration loaded once at startup.
    pub config: Arc<Config>,
    /// Source of identities for token requests that do not name one.
    pub identities: Arc<dyn IdentityGenerator>,
    /// HTTP client used for Notify API calls.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            identities: Arc::new(RandomUsername),
            http,
        }
    }

    /// Replace the identity generator (tests use a fixed one).
    pub fn with_identity_generator(mut self, generator: impl IdentityGenerator + 'static) -> Self {
        self.identities = Arc::new(generator);
        self
    }
}
