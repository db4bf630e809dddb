//! Configuration management for the Spotify OAuth relay.
//!
//! Configuration is read from environment variables, optionally seeded from
//! `.env` files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the current working directory
//! 3. `.env` in the local data directory
//! 4. Application defaults (where applicable)
//!
//! Startup fails when the Spotify client id, client secret or redirect URI
//! is missing.

use std::{env, fmt, path::PathBuf};

use thiserror::Error;
use url::Url;

use crate::utils;

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_SCOPES: &str = "user-read-email user-read-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

const REQUIRED_KEYS: [&str; 3] = [
    "SPOTIFY_CLIENT_ID",
    "SPOTIFY_CLIENT_SECRET",
    "SPOTIFY_REDIRECT_URI",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env vars: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Runtime configuration of the relay.
///
/// Read-only after startup; handlers only see it through the
/// [`SpotifyClient`](crate::spotify::SpotifyClient) built from it.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub scopes: String,
    /// Empty when unset; see [`Config::public_base_url`].
    pub public_base_url: String,
    pub auth_url: Url,
    pub token_url: Url,
    pub api_url: Url,
}

impl Config {
    /// Builds the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset. Every missing required key is
    /// reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .into_iter()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let url = |key: &'static str, default: &str| parse_url(key, get(key), default);

        Ok(Config {
            port,
            client_id: get("SPOTIFY_CLIENT_ID").unwrap_or_default(),
            client_secret: get("SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
            redirect_uri: get("SPOTIFY_REDIRECT_URI").unwrap_or_default(),
            scopes: get("SPOTIFY_SCOPES").unwrap_or_else(|| DEFAULT_SCOPES.to_string()),
            public_base_url: get("PUBLIC_BASE_URL").unwrap_or_default(),
            auth_url: url("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)?,
            token_url: url("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)?,
            api_url: url("SPOTIFY_API_URL", DEFAULT_API_URL)?,
        })
    }

    /// Public URL of the relay, falling back to `http://localhost:<port>`.
    pub fn public_base_url(&self) -> String {
        if self.public_base_url.is_empty() {
            format!("http://localhost:{}", self.port)
        } else {
            self.public_base_url.trim_end_matches('/').to_string()
        }
    }

    /// URL a browser should open to start the login flow.
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.public_base_url())
    }

    /// Cookies get the `Secure` attribute when the relay is served over https.
    pub fn secure_cookies(&self) -> bool {
        self.public_base_url().starts_with("https://")
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("client_id", &self.client_id)
            .field("client_secret", &utils::mask_secret(&self.client_secret))
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .field("public_base_url", &self.public_base_url)
            .field("auth_url", &self.auth_url.as_str())
            .field("token_url", &self.token_url.as_str())
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

fn parse_url(key: &'static str, value: Option<String>, default: &str) -> Result<Url, ConfigError> {
    let raw = value.unwrap_or_else(|| default.to_string());
    match Url::parse(&raw) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        _ => Err(ConfigError::Invalid { key, value: raw }),
    }
}

/// Loads environment variables from `.env` files.
///
/// Reads `.env` from the current working directory first and then
/// `sporlrelay/.env` from the platform-specific local data directory:
/// - Linux: `~/.local/share/sporlrelay/.env`
/// - macOS: `~/Library/Application Support/sporlrelay/.env`
/// - Windows: `%LOCALAPPDATA%/sporlrelay/.env`
///
/// Variables already present in the environment are never overridden, and
/// missing files are skipped.
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or one
/// of the files exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| format!("{}: {}", local.display(), e))?;
    }

    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))?;
    }

    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlrelay/.env");
    path
}
