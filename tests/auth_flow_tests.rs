// SPDX-License-Identifier: MIT

//! OAuth flow surface: login redirect and the missing-token guard.

use axum::http::{header, StatusCode};

mod common;

use common::{body_json, create_test_app, empty_request, send};

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = create_test_app();

    let response = send(&app, empty_request("GET", "/health")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_login_redirects_to_spotify_authorization() {
    let (app, _state) = create_test_app();

    let response = send(&app, empty_request("GET", "/login")).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|h| h.to_str().ok())
        .expect("Location header");

    assert!(location.starts_with("https://accounts.spotify.com/authorize?"));
    assert!(location.contains("client_id=test_client_id"));
    assert!(location.contains("response_type=code"));
    assert!(location.contains("user-library-read%20user-top-read%20playlist-read-private"));
}

#[tokio::test]
async fn test_top_data_without_token_is_rejected() {
    let (app, _state) = create_test_app();

    let response = send(&app, empty_request("GET", "/me/top")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert_eq!(
        body["details"],
        "No se encontró Access Token. Inicia sesión en /login y autoriza la app."
    );
}

#[tokio::test]
async fn test_artist_without_token_is_rejected() {
    let (app, _state) = create_test_app();

    let response = send(&app, empty_request("GET", "/artist/4Z8W4fKeB5YxbusRsdQVPb")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn test_callback_without_code_is_bad_request() {
    let (app, _state) = create_test_app();

    // Missing required `code` query parameter fails extraction.
    let response = send(&app, empty_request("GET", "/callback")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
