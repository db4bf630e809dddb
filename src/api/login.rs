use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use super::{AppState, cookies, found};
use crate::{info, utils};

/// Starts the login flow.
///
/// Issues a fresh state token in the `sc_oauth_state` cookie and redirects
/// to the Spotify consent screen carrying the same value. Any previous
/// state cookie is simply replaced.
pub async fn login(State(app): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let state = utils::generate_state();
    let location = app.spotify.authorize_url(&state);

    info!("Redirecting browser to Spotify consent screen");

    (
        jar.add(cookies::state_cookie(&state, app.secure_cookies)),
        found(&location),
    )
}
