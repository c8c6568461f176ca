// SPDX-License-Identifier: MIT

//! Spotify API client.
//!
//! Handles:
//! - OAuth2 authorization-code exchange and refresh-token grants
//! - Top artists / top tracks / artist detail lookups
//!
//! Every call is a single attempt; there is no retry or backoff.

use std::time::Duration;

use serde_json::Value;

use crate::config::Config;
use crate::error::AppError;
use crate::models::TokenData;

const ACCOUNTS_BASE_URL: &str = "https://accounts.spotify.com";
const API_BASE_URL: &str = "https://api.spotify.com/v1";

/// Scopes requested during authorization.
const AUTH_SCOPES: &str = "user-library-read user-top-read playlist-read-private";

/// Outbound request timeout, so a hung upstream call cannot block a
/// request indefinitely.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Spotify API client with OAuth credentials.
#[derive(Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    accounts_url: String,
    api_url: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl SpotifyClient {
    /// Create a client against the real Spotify endpoints.
    pub fn new(config: &Config) -> Self {
        Self::with_endpoints(config, ACCOUNTS_BASE_URL, API_BASE_URL)
    }

    /// Create a client against custom endpoints. Tests point this at a
    /// local mock server.
    pub fn with_endpoints(
        config: &Config,
        accounts_url: impl Into<String>,
        api_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(HTTP_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            accounts_url: accounts_url.into(),
            api_url: api_url.into(),
            client_id: config.spotify_client_id.clone(),
            client_secret: config.spotify_client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
        }
    }

    // ─── OAuth ───────────────────────────────────────────────────────────

    /// Build the user-consent URL for the authorization-code flow.
    pub fn authorize_url(&self) -> String {
        format!(
            "{}/authorize?client_id={}&response_type=code&redirect_uri={}&scope={}",
            self.accounts_url,
            self.client_id,
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(AUTH_SCOPES),
        )
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenData, AppError> {
        self.token_request(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ])
        .await
    }

    /// Obtain a fresh access token from a refresh token.
    ///
    /// No route triggers this today; it is kept as an internal capability.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenData, AppError> {
        self.token_request(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ])
        .await
    }

    /// POST a grant to the token endpoint and parse the token payload.
    async fn token_request(&self, form: &[(&str, &str)]) -> Result<TokenData, AppError> {
        let url = format!("{}/api/token", self.accounts_url);
        let response = self.http.post(&url).form(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Spotify token request failed");
            return Err(AppError::SpotifyAuth(format!(
                "Token request failed with status {}",
                status
            )));
        }

        Ok(response.json().await?)
    }

    // ─── Data API ────────────────────────────────────────────────────────

    /// Get the authenticated user's top artists.
    pub async fn get_top_artists(&self, access_token: &str) -> Result<Value, AppError> {
        let url = format!("{}/me/top/artists", self.api_url);
        self.get_json(&url, access_token).await
    }

    /// Get the authenticated user's top tracks.
    pub async fn get_top_tracks(&self, access_token: &str) -> Result<Value, AppError> {
        let url = format!("{}/me/top/tracks", self.api_url);
        self.get_json(&url, access_token).await
    }

    /// Get details for a single artist.
    pub async fn get_artist(&self, artist_id: &str, access_token: &str) -> Result<Value, AppError> {
        let url = format!("{}/artists/{}", self.api_url, artist_id);
        self.get_json(&url, access_token).await
    }

    /// Bearer-authenticated GET returning the raw JSON payload.
    async fn get_json(&self, url: &str, access_token: &str) -> Result<Value, AppError> {
        let response = self.http.get(url).bearer_auth(access_token).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            tracing::warn!(status, url, "Spotify API call failed");
            return Err(AppError::SpotifyApi { status, message });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorize_url_embeds_credentials_and_scopes() {
        let config = Config::default();
        let client = SpotifyClient::new(&config);
        let url = client.authorize_url();

        assert!(url.starts_with("https://accounts.spotify.com/authorize?"));
        assert!(url.contains("client_id=test_client_id"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains(&format!(
            "redirect_uri={}",
            urlencoding::encode("http://localhost:8000/callback")
        )));
        assert!(url.contains("scope=user-library-read%20user-top-read%20playlist-read-private"));
    }
}
