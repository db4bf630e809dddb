//! # API Module
//!
//! HTTP handlers of the relay. Together they run a cookie-carried state
//! machine per browser:
//!
//! ```text
//! Anonymous --/auth/login--> Pending-Auth --/auth/callback--> Authenticated
//!                             (sc_oauth_state)                 (sc_session)
//! ```
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, fixed liveness payload
//! - [`login`] - `GET /auth/login`, sets the state cookie and redirects to
//!   the Spotify consent screen
//! - [`callback`] - `GET /auth/callback`, validates the state cookie,
//!   exchanges the code and opens a session
//! - [`me`] - `GET /me`, relays the profile of the session's user
//!
//! ## Errors
//!
//! Rejections are rendered by [`ApiError`]: 400 for bad callback input or a
//! state mismatch, 401 without a usable session, 502 when Spotify fails.
//! Bodies are plain text.

use std::sync::Arc;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{management::TokenStore, spotify::SpotifyClient};

mod callback;
pub mod cookies;
mod error;
mod health;
mod login;
mod me;

pub use callback::{CallbackParams, callback};
pub use error::ApiError;
pub use health::health;
pub use login::login;
pub use me::me;

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub spotify: Arc<SpotifyClient>,
    pub store: Arc<dyn TokenStore>,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(spotify: SpotifyClient, store: Arc<dyn TokenStore>, secure_cookies: bool) -> Self {
        AppState {
            spotify: Arc::new(spotify),
            store,
            secure_cookies,
        }
    }
}

/// `302 Found` pointing at `location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
