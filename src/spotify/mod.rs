//! # Spotify Integration Module
//!
//! Outbound side of the relay: everything that talks to Spotify's accounts
//! service or the Web API goes through [`SpotifyClient`].
//!
//! ## Operations
//!
//! - [`SpotifyClient::authorize_url`] - builds the consent-screen URL for a
//!   given anti-CSRF state value. Pure, no network call.
//! - [`SpotifyClient::exchange_code`] - `POST` to the token endpoint with the
//!   authorization code, authenticated with HTTP Basic
//!   (`base64(client_id:client_secret)`).
//! - [`SpotifyClient::get_me`] - `GET /me` with the bearer access token,
//!   returning the profile object untouched.
//!
//! ## Failure Model
//!
//! Every outbound call is bounded by [`REQUEST_TIMEOUT`]. A non-2xx status or
//! a body that does not decode yields a [`ProviderError`] carrying the status
//! code and the raw body. Nothing is retried; callers surface the error
//! immediately.
//!
//! Dropping the future returned by an operation aborts the underlying HTTP
//! request, so an aborted inbound request cancels its outbound call.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;
use url::Url;

use crate::config::Config;

mod auth;
mod profile;

/// Upper bound for a single outbound request, connect to last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{operation} failed: status={status} body={body}")]
    Status {
        operation: &'static str,
        status: u16,
        body: String,
    },

    #[error("{operation} returned an unexpected body ({source}): status={status} body={body}")]
    Decode {
        operation: &'static str,
        status: u16,
        body: String,
        source: serde_json::Error,
    },

    #[error("{operation} request failed: {source}")]
    Transport {
        operation: &'static str,
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ProviderError {
    /// Upstream HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProviderError::Status { status, .. } | ProviderError::Decode { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

/// Client for the Spotify accounts service and Web API.
///
/// Holds one pooled [`reqwest::Client`]; cheap to share behind an `Arc`.
pub struct SpotifyClient {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: String,
    auth_url: Url,
    token_url: Url,
    profile_url: Url,
    http: Client,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Result<Self, ProviderError> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    /// Like [`SpotifyClient::new`] with a custom per-request timeout.
    pub fn with_timeout(config: &Config, timeout: Duration) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ProviderError::Client)?;

        let mut profile_url = config.api_url.clone();
        if let Ok(mut segments) = profile_url.path_segments_mut() {
            segments.pop_if_empty().push("me");
        }

        Ok(SpotifyClient {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scopes: config.scopes.clone(),
            auth_url: config.auth_url.clone(),
            token_url: config.token_url.clone(),
            profile_url,
            http,
        })
    }
}
