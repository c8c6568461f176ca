// SPDX-License-Identifier: MIT

//! Listening-data routes backed by the Spotify API.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::AppState;

const NO_TOKEN_DETAIL: &str =
    "No se encontró Access Token. Inicia sesión en /login y autoriza la app.";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/me/top", get(top_data))
        .route("/artist/{artist_id}", get(artist))
}

/// Read the stored access token, or fail before any upstream call is made.
async fn stored_access_token(state: &AppState) -> Result<String> {
    state
        .tokens
        .lock()
        .await
        .access_token
        .clone()
        .ok_or_else(|| AppError::BadRequest(NO_TOKEN_DETAIL.to_string()))
}

#[derive(Serialize)]
pub struct TopDataResponse {
    pub top_artists: Value,
    pub top_tracks: Value,
}

/// Top artists and tracks for the stored token, fetched sequentially.
async fn top_data(State(state): State<Arc<AppState>>) -> Result<Json<TopDataResponse>> {
    let token = stored_access_token(&state).await?;

    let top_artists = state.spotify.get_top_artists(&token).await?;
    let top_tracks = state.spotify.get_top_tracks(&token).await?;

    Ok(Json(TopDataResponse {
        top_artists,
        top_tracks,
    }))
}

/// Artist details for the stored token, relayed verbatim.
async fn artist(
    State(state): State<Arc<AppState>>,
    Path(artist_id): Path<String>,
) -> Result<Json<Value>> {
    let token = stored_access_token(&state).await?;
    let payload = state.spotify.get_artist(&artist_id, &token).await?;
    Ok(Json(payload))
}
