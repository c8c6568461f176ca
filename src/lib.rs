// SPDX-License-Identifier: MIT

//! Tune-Hub: a small HTTP façade over the Spotify Web API.
//!
//! This crate drives the OAuth2 authorization-code flow against Spotify,
//! relays a handful of listening-data endpoints, and keeps an in-memory
//! collection of user records with musical preferences.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use models::TokenState;
use services::{SpotifyClient, UserStore};
use tokio::sync::Mutex;

/// Shared application state.
///
/// The user store and token state are mutex-guarded; axum serves requests
/// concurrently. Locks are never held across an await.
pub struct AppState {
    pub config: Config,
    pub spotify: SpotifyClient,
    pub users: Mutex<UserStore>,
    pub tokens: Mutex<TokenState>,
}
