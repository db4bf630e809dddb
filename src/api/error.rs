use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::spotify::ProviderError;

/// Request-level failures and their HTTP mapping.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or invalid callback parameters, or a state mismatch.
    #[error("{0}")]
    BadRequest(String),

    /// No session cookie, or no usable token behind it.
    #[error("{0}")]
    Unauthorized(String),

    /// Spotify rejected the call or answered with something unreadable.
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
