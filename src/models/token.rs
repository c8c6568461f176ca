// SPDX-License-Identifier: MIT

//! Spotify token types.

use serde::{Deserialize, Serialize};

/// Token payload returned by Spotify's token endpoint.
///
/// Fields beyond the two tokens (`token_type`, `expires_in`, `scope`, ...)
/// are captured in `extra` so the payload can be relayed verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenData {
    pub access_token: String,
    /// Absent on refresh-grant responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Process-wide token state, written by the OAuth callback and read by
/// handlers that call the Spotify data API. No expiry tracking.
#[derive(Debug, Default)]
pub struct TokenState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl TokenState {
    /// Store both tokens from a token-endpoint response.
    pub fn store(&mut self, data: &TokenData) {
        self.access_token = Some(data.access_token.clone());
        self.refresh_token = data.refresh_token.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_data_roundtrips_extra_fields() {
        let payload = serde_json::json!({
            "access_token": "acc",
            "refresh_token": "ref",
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "user-top-read"
        });

        let data: TokenData = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(data.access_token, "acc");
        assert_eq!(data.refresh_token.as_deref(), Some("ref"));

        let back = serde_json::to_value(&data).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_store_sets_both_tokens() {
        let data: TokenData = serde_json::from_value(serde_json::json!({
            "access_token": "acc",
            "refresh_token": "ref"
        }))
        .unwrap();

        let mut state = TokenState::default();
        assert!(state.access_token.is_none());

        state.store(&data);
        assert_eq!(state.access_token.as_deref(), Some("acc"));
        assert_eq!(state.refresh_token.as_deref(), Some("ref"));
    }
}
