// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod token;
pub mod user;

pub use token::{TokenData, TokenState};
pub use user::{User, UserPayload};
