//! `AccessToken` extractor — pulls the raw token from the `access_token` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use gatehouse_core::error::AppError;

/// The raw access token string supplied with a request.
///
/// Presence is checked here; validity is not. A missing header is
/// forbidden (the caller supplied no credentials at all), while an
/// invalid token is an unauthorized outcome decided by the token
/// authority.
#[derive(Debug, Clone)]
pub struct AccessToken(pub String);

impl AccessToken {
    /// Returns the raw token string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AccessToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get("access_token")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::forbidden("Provide a valid auth token"))?;

        Ok(AccessToken(token.to_string()))
    }
}
