// SPDX-License-Identifier: MIT

//! User CRUD routes and the preferences sub-resource.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{User, UserPayload};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", post(create_user))
        .route(
            "/api/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/api/users/{id}/preferences",
            post(add_preference).delete(remove_preference),
        )
}

/// Response envelope matching the public API: an optional message plus the
/// affected record under `usuario`.
#[derive(Serialize)]
pub struct UserEnvelope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub usuario: User,
}

// ─── CRUD ────────────────────────────────────────────────────

async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UserPayload>,
) -> Result<(StatusCode, Json<UserEnvelope>)> {
    let user = state.users.lock().await.create(payload)?;
    tracing::info!(id = user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            message: Some("Usuario creado"),
            usuario: user,
        }),
    ))
}

async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<UserEnvelope>> {
    let user = state.users.lock().await.get(id)?;

    Ok(Json(UserEnvelope {
        message: None,
        usuario: user,
    }))
}

async fn update_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Json(payload): Json<UserPayload>,
) -> Result<Json<UserEnvelope>> {
    let user = state.users.lock().await.update(id, payload)?;
    tracing::info!(id, "User updated");

    Ok(Json(UserEnvelope {
        message: Some("Usuario actualizado"),
        usuario: user,
    }))
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<UserEnvelope>> {
    let user = state.users.lock().await.delete(id)?;
    tracing::info!(id, "User deleted");

    Ok(Json(UserEnvelope {
        message: Some("Usuario eliminado"),
        usuario: user,
    }))
}

// ─── Preferences ─────────────────────────────────────────────

#[derive(Deserialize)]
struct PreferenceParams {
    preference: String,
}

async fn add_preference(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(params): Query<PreferenceParams>,
) -> Result<Json<UserEnvelope>> {
    let user = state
        .users
        .lock()
        .await
        .add_preference(id, &params.preference)?;

    Ok(Json(UserEnvelope {
        message: Some("Preferencia añadida"),
        usuario: user,
    }))
}

async fn remove_preference(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    Query(params): Query<PreferenceParams>,
) -> Result<Json<UserEnvelope>> {
    let user = state
        .users
        .lock()
        .await
        .remove_preference(id, &params.preference)?;

    Ok(Json(UserEnvelope {
        message: Some("Preferencia eliminada"),
        usuario: user,
    }))
}
