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

//! Shared API types for the comms token server.
//!
//! This crate defines the API contract between the token server and its
//! consumers (browser quickstart pages, integration tests, services that
//! inspect issued tokens). It has no web framework or crypto dependencies.

pub mod error;
pub mod requests;
pub mod responses;
pub mod token;

pub use error::APIError;
pub use responses::APIResponse;
pub use token::{AccessTokenClaims, Grant, Grants};
