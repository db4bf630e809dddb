use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use subtle::ConstantTimeEq;

use super::{ApiError, AppState, cookies, found};
use crate::{success, utils, warning};

/// Query string Spotify appends to the redirect URI.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CallbackParams {
    pub code: String,
    pub state: String,
    /// Set instead of `code` when the user declines, e.g. `access_denied`.
    pub error: Option<String>,
}

/// Completes the login flow.
///
/// The `state` query parameter must equal the `sc_oauth_state` cookie; this
/// is the only proof that the callback belongs to a login started here.
/// Spotify is only contacted once that check passes. On success a new
/// session is stored, `sc_session` is set and the browser is sent to `/me`.
///
/// The state cookie is expired whatever the outcome, so a failed callback
/// leaves the browser anonymous and the state cannot be replayed.
pub async fn callback(
    State(app): State<AppState>,
    jar: CookieJar,
    Query(params): Query<CallbackParams>,
) -> Response {
    let outcome = establish_session(&app, &jar, &params).await;
    let jar = jar.add(cookies::clear_state_cookie(app.secure_cookies));

    match outcome {
        Ok(session_id) => {
            success!("Session established");
            let jar = jar.add(cookies::session_cookie(&session_id, app.secure_cookies));
            (jar, found("/me")).into_response()
        }
        Err(err) => (jar, err).into_response(),
    }
}

/// Validates the callback, exchanges the code and stores the token.
/// Returns the new session id.
async fn establish_session(
    app: &AppState,
    jar: &CookieJar,
    params: &CallbackParams,
) -> Result<String, ApiError> {
    if let Some(reason) = params.error.as_deref().filter(|e| !e.is_empty()) {
        warning!("Spotify authorization denied: {}", reason);
        return Err(ApiError::BadRequest(format!(
            "authorization denied: {}",
            reason
        )));
    }

    if params.code.is_empty() || params.state.is_empty() {
        warning!("Callback rejected: missing code or state");
        return Err(ApiError::BadRequest("missing code or state".to_string()));
    }

    let expected = cookies::read(jar, cookies::STATE_COOKIE);
    if !expected.is_some_and(|cookie| states_match(&cookie, &params.state)) {
        warning!("Callback rejected: oauth state mismatch");
        return Err(ApiError::BadRequest("invalid oauth state".to_string()));
    }

    let token = app.spotify.exchange_code(&params.code).await.map_err(|e| {
        warning!("Token exchange failed: {}", e);
        ApiError::from(e)
    })?;

    let session_id = utils::generate_session_id();
    app.store.put(&session_id, token);

    Ok(session_id)
}

fn states_match(cookie: &str, query: &str) -> bool {
    cookie.len() == query.len() && bool::from(cookie.as_bytes().ct_eq(query.as_bytes()))
}
