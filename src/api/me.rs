use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;

use super::{ApiError, AppState, cookies};
use crate::{types::Profile, warning};

const LOGIN_HINT: &str = "not authenticated; visit /auth/login";

/// Relays the profile of the session's user.
///
/// A missing cookie, an unknown session and a stored token without an
/// access token are all reported as 401 without contacting Spotify. The
/// stored `expires_in` is not checked; an expired token surfaces as a 502
/// from Spotify.
pub async fn me(
    State(app): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Profile>, ApiError> {
    let unauthorized = || ApiError::Unauthorized(LOGIN_HINT.to_string());

    let session_id = cookies::read(&jar, cookies::SESSION_COOKIE).ok_or_else(unauthorized)?;
    let token = app
        .store
        .get(&session_id)
        .filter(|token| token.is_valid())
        .ok_or_else(unauthorized)?;

    let profile = app.spotify.get_me(&token.access_token).await.map_err(|e| {
        warning!("Profile fetch failed: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(profile))
}
