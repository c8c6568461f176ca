// SPDX-License-Identifier: MIT

//! In-memory user store.
//!
//! Records live for the lifetime of the process. Lookups are linear scans;
//! the store targets demo-scale collections.

use crate::error::AppError;
use crate::models::{User, UserPayload};

const USER_NOT_FOUND: &str = "Usuario no encontrado";

/// In-memory collection of user records with a monotonic ID counter.
#[derive(Debug)]
pub struct UserStore {
    users: Vec<User>,
    next_id: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a user. Fails if the email is already taken.
    pub fn create(&mut self, payload: UserPayload) -> Result<User, AppError> {
        if self.users.iter().any(|u| u.email == payload.email) {
            return Err(AppError::DuplicateEmail);
        }

        let user = User {
            id: self.next_id,
            name: payload.name,
            email: payload.email,
            preferences: dedup_preferences(payload.preferences),
        };
        // IDs are never reused, even after deletions.
        self.next_id += 1;
        self.users.push(user.clone());
        Ok(user)
    }

    /// Fetch a user by ID.
    pub fn get(&self, id: u64) -> Result<User, AppError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Replace a user's mutable fields.
    ///
    /// Email uniqueness is only enforced at creation; a replacement email
    /// is not checked against other records.
    pub fn update(&mut self, id: u64, payload: UserPayload) -> Result<User, AppError> {
        let user = self.find_mut(id)?;
        user.name = payload.name;
        user.email = payload.email;
        user.preferences = dedup_preferences(payload.preferences);
        Ok(user.clone())
    }

    /// Remove a user and return the removed record.
    pub fn delete(&mut self, id: u64) -> Result<User, AppError> {
        let index = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;
        Ok(self.users.remove(index))
    }

    /// Append a preference unless it is already present.
    pub fn add_preference(&mut self, id: u64, preference: &str) -> Result<User, AppError> {
        let user = self.find_mut(id)?;
        if !user.preferences.iter().any(|p| p == preference) {
            user.preferences.push(preference.to_string());
        }
        Ok(user.clone())
    }

    /// Remove a preference if present; succeeds either way.
    pub fn remove_preference(&mut self, id: u64, preference: &str) -> Result<User, AppError> {
        let user = self.find_mut(id)?;
        user.preferences.retain(|p| p != preference);
        Ok(user.clone())
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut User, AppError> {
        self.users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop duplicate preferences, keeping first occurrences in order.
fn dedup_preferences(preferences: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(preferences.len());
    for preference in preferences {
        if !out.contains(&preference) {
            out.push(preference);
        }
    }
    out
}
