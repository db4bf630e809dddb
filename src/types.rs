use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils;

/// Token pair obtained from a successful authorization-code exchange.
///
/// `expires_in` is relative to the moment of the exchange and is never
/// compared against wall-clock time. A token with an empty access token is
/// treated as absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub scope: String,
}

impl Token {
    pub fn is_valid(&self) -> bool {
        !self.access_token.is_empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("access_token", &utils::mask_secret(&self.access_token))
            .field("refresh_token", &utils::mask_secret(&self.refresh_token))
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

/// Body of the accounts service token endpoint.
///
/// Absent fields fall back to empty strings and zero.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub scope: String,
    pub expires_in: u64,
    pub refresh_token: String,
}

impl From<TokenResponse> for Token {
    fn from(res: TokenResponse) -> Self {
        Token {
            access_token: res.access_token,
            refresh_token: res.refresh_token,
            token_type: res.token_type,
            expires_in: res.expires_in,
            scope: res.scope,
        }
    }
}

/// User profile as returned by `GET /me`, relayed without validation.
pub type Profile = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}
