// SPDX-License-Identifier: MIT

//! Services module - business logic layer.

pub mod spotify;
pub mod users;

pub use spotify::SpotifyClient;
pub use users::UserStore;
