// SPDX-License-Identifier: MIT

//! Spotify OAuth flow routes.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Redirect,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::TokenData;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/login", get(login))
        .route("/callback", get(callback))
}

/// Redirect the user to Spotify's authorization page.
async fn login(State(state): State<Arc<AppState>>) -> Redirect {
    let auth_url = state.spotify.authorize_url();

    tracing::info!(
        client_id = %state.config.spotify_client_id,
        "Starting OAuth flow, redirecting to Spotify"
    );

    Redirect::temporary(&auth_url)
}

#[derive(Deserialize)]
pub struct CallbackParams {
    code: String,
}

#[derive(Serialize)]
pub struct CallbackResponse {
    message: &'static str,
    token_data: TokenData,
}

/// OAuth callback - exchange the authorization code and store the tokens.
async fn callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> Result<Json<CallbackResponse>> {
    tracing::info!("Exchanging authorization code for tokens");

    let token_data = state.spotify.exchange_code(&params.code).await?;

    state.tokens.lock().await.store(&token_data);
    tracing::info!("Spotify tokens obtained and stored");

    Ok(Json(CallbackResponse {
        message: "Token obtenido y almacenado correctamente",
        token_data,
    }))
}
