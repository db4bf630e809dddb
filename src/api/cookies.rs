//! Cookies of the login protocol.
//!
//! Both cookies are `HttpOnly`, `SameSite=Lax` and scoped to `/`. The
//! `Secure` flag follows the relay's public URL scheme.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

pub const STATE_COOKIE: &str = "sc_oauth_state";
pub const SESSION_COOKIE: &str = "sc_session";

pub const STATE_TTL: Duration = Duration::minutes(10);
pub const SESSION_TTL: Duration = Duration::hours(24);

/// Anti-CSRF state cookie set on login.
pub fn state_cookie(state: &str, secure: bool) -> Cookie<'static> {
    build(STATE_COOKIE, state, STATE_TTL, secure)
}

/// Expired, empty state cookie. Makes the state single-use.
pub fn clear_state_cookie(secure: bool) -> Cookie<'static> {
    build(STATE_COOKIE, "", Duration::ZERO, secure)
}

/// Session cookie set after a successful code exchange.
pub fn session_cookie(session_id: &str, secure: bool) -> Cookie<'static> {
    build(SESSION_COOKIE, session_id, SESSION_TTL, secure)
}

/// Value of cookie `name`, ignoring empty values.
pub fn read(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

fn build(name: &'static str, value: &str, ttl: Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(ttl)
        .build()
}
