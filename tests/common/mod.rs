#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use sporlrelay::{
    api::AppState, config::Config, management::MemoryTokenStore, server, spotify::SpotifyClient,
    types::Token,
};
use tower::ServiceExt;

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const REDIRECT_URI: &str = "http://localhost:5001/auth/callback";

// Config whose Spotify endpoints all point at `base` (a mock server)
pub fn test_config(base: &str) -> Config {
    let vars: HashMap<&str, String> = HashMap::from([
        ("SPOTIFY_CLIENT_ID", CLIENT_ID.to_string()),
        ("SPOTIFY_CLIENT_SECRET", CLIENT_SECRET.to_string()),
        ("SPOTIFY_REDIRECT_URI", REDIRECT_URI.to_string()),
        ("SPOTIFY_API_AUTH_URL", format!("{}/authorize", base)),
        ("SPOTIFY_API_TOKEN_URL", format!("{}/api/token", base)),
        ("SPOTIFY_API_URL", format!("{}/v1", base)),
    ]);
    Config::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

pub fn test_client(base: &str) -> SpotifyClient {
    SpotifyClient::new(&test_config(base)).unwrap()
}

pub fn test_app(base: &str) -> (Router, Arc<MemoryTokenStore>) {
    test_app_with_secure_cookies(base, false)
}

pub fn test_app_with_secure_cookies(base: &str, secure: bool) -> (Router, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::new());
    let state = AppState::new(test_client(base), store.clone(), secure);
    (server::router(state), store)
}

pub fn sample_token() -> Token {
    Token {
        access_token: "BQD-access".to_string(),
        refresh_token: "AQC-refresh".to_string(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
        scope: "user-read-email user-read-private".to_string(),
    }
}

pub const SAMPLE_TOKEN_BODY: &str = r#"{
    "access_token": "BQD-access",
    "token_type": "Bearer",
    "scope": "user-read-email user-read-private",
    "expires_in": 3600,
    "refresh_token": "AQC-refresh"
}"#;

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut req = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        req = req.header(header::COOKIE, cookie);
    }
    app.clone()
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub fn set_cookies(res: &Response<Body>) -> Vec<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

// Raw Set-Cookie header for `name`, if the response sets it
pub fn set_cookie(res: &Response<Body>, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    set_cookies(res).into_iter().find(|c| c.starts_with(&prefix))
}

pub fn cookie_value(res: &Response<Body>, name: &str) -> Option<String> {
    set_cookie(res, name).map(|c| {
        c.split(';').next().unwrap()[name.len() + 1..].to_string()
    })
}

pub fn location(res: &Response<Body>) -> String {
    res.headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn body_string(res: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn is_hex(s: &str) -> bool {
    s.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
}
