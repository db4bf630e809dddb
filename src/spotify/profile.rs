use super::{ProviderError, SpotifyClient};
use crate::types::Profile;

const PROFILE: &str = "profile fetch";

impl SpotifyClient {
    /// Fetches the current user's profile with a bearer access token.
    ///
    /// The decoded JSON object is returned as-is. Fails like
    /// [`SpotifyClient::exchange_code`] on transport errors, non-2xx statuses
    /// and bodies that are not a JSON object.
    pub async fn get_me(&self, access_token: &str) -> Result<Profile, ProviderError> {
        let transport = |source: reqwest::Error| ProviderError::Transport {
            operation: PROFILE,
            source,
        };

        let res = self
            .http
            .get(self.profile_url.clone())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport)?;

        let status = res.status();
        let body = res.text().await.map_err(transport)?;

        if !status.is_success() {
            return Err(ProviderError::Status {
                operation: PROFILE,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<Profile>(&body).map_err(|source| ProviderError::Decode {
            operation: PROFILE,
            status: status.as_u16(),
            body,
            source,
        })
    }
}
