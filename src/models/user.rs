//! User model for the in-memory store and API.

use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// The wire field name for `name` is `nombre`, matching the public API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Sequential ID, assigned at creation and never reused
    pub id: u64,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Email address, unique across records at creation time
    pub email: String,
    /// Ordered list of musical preferences, no duplicates
    pub preferences: Vec<String>,
}

/// Request body for creating or replacing a user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub preferences: Vec<String>,
}
