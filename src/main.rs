// SPDX-License-Identifier: MIT

//! Tune-Hub API Server
//!
//! Serves the Spotify OAuth flow, relays top-listening data, and manages
//! an in-memory collection of users and their musical preferences.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tune_hub::{
    config::Config,
    models::TokenState,
    services::{SpotifyClient, UserStore},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Tune-Hub API");

    let spotify = SpotifyClient::new(&config);
    tracing::info!(
        client_id = %config.spotify_client_id,
        redirect_uri = %config.redirect_uri,
        "Spotify client initialized"
    );

    // Build shared state
    let state = Arc::new(AppState {
        spotify,
        users: Mutex::new(UserStore::new()),
        tokens: Mutex::new(TokenState::default()),
        config,
    });

    // Build router
    let app = tune_hub::routes::create_router(state.clone());

    // Start server
    let addr = format!("0.0.0.0:{}", state.config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured logging with an env-filter override.
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tune_hub=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
