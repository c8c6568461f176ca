// SPDX-License-Identifier: MIT

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tokio::sync::Mutex;
use tower::ServiceExt;
use tune_hub::config::Config;
use tune_hub::models::TokenState;
use tune_hub::routes::create_router;
use tune_hub::services::{SpotifyClient, UserStore};
use tune_hub::AppState;

/// Create a test app wired against the real Spotify endpoints.
/// Suitable for tests that never reach the upstream API.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let spotify = SpotifyClient::new(&config);
    build_app(config, spotify)
}

/// Create a test app whose Spotify client points at a mock server.
#[allow(dead_code)]
pub fn create_test_app_with_endpoints(
    accounts_url: &str,
    api_url: &str,
) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let spotify = SpotifyClient::with_endpoints(&config, accounts_url, api_url);
    build_app(config, spotify)
}

fn build_app(config: Config, spotify: SpotifyClient) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState {
        config,
        spotify,
        users: Mutex::new(UserStore::new()),
        tokens: Mutex::new(TokenState::default()),
    });

    (create_router(state.clone()), state)
}

/// Drive one request through the router.
#[allow(dead_code)]
pub async fn send(app: &axum::Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Build a JSON request with the given method, URI and body.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodyless request.
#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
