use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::header::AUTHORIZATION;

use super::{ProviderError, SpotifyClient};
use crate::types::{Token, TokenResponse};

const EXCHANGE: &str = "token exchange";

impl SpotifyClient {
    /// Builds the consent-screen URL carrying `state`.
    ///
    /// Query parameters: `response_type=code`, `client_id`, `redirect_uri`,
    /// `scope`, `state` and `show_dialog=false`. Parameters already present
    /// on the configured authorize URL are kept.
    pub fn authorize_url(&self, state: &str) -> String {
        let mut url = self.auth_url.clone();
        url.query_pairs_mut()
            .append_pair("response_type", "code")
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("scope", &self.scopes)
            .append_pair("state", state)
            .append_pair("show_dialog", "false");
        url.into()
    }

    /// Exchanges an authorization code for a token pair.
    ///
    /// Sends `grant_type=authorization_code`, `code` and `redirect_uri` as a
    /// form body, authenticated with the client credentials over HTTP Basic.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Transport`] on network failure or timeout
    /// - [`ProviderError::Status`] when the status is outside 200..300
    /// - [`ProviderError::Decode`] when the body is not a token response
    pub async fn exchange_code(&self, code: &str) -> Result<Token, ProviderError> {
        let transport = |source: reqwest::Error| ProviderError::Transport {
            operation: EXCHANGE,
            source,
        };

        let res = self
            .http
            .post(self.token_url.clone())
            .header(AUTHORIZATION, self.basic_auth())
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        let body = res.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                operation: EXCHANGE,
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str::<TokenResponse>(&body) {
            Ok(token) => Ok(token.into()),
            Err(source) => Err(ProviderError::Decode {
                operation: EXCHANGE,
                status: status.as_u16(),
                body,
                source,
            }),
        }
    }

    fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}
