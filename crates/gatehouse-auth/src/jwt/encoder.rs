//! JWT token creation with configurable signing and TTL.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use gatehouse_core::config::auth::AuthConfig;
use gatehouse_core::error::AppError;

use super::claims::Claims;

/// Creates signed HS256 access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Access token TTL in minutes.
    token_ttl_minutes: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The signed token, opaque to the client.
    pub access_token: String,
    /// Token expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Generates a fresh access token for the given public user id.
    ///
    /// Every call issues a new token; previously issued tokens for the
    /// same user stay valid until expiry or individual revocation.
    pub fn issue(&self, public_id: Uuid) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::minutes(self.token_ttl_minutes);

        let claims = Claims {
            sub: public_id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            token_ttl_minutes: 30,
        }
    }

    #[test]
    fn validity_window_matches_configured_ttl() {
        let encoder = JwtEncoder::new(&test_config());
        let before = Utc::now();
        let issued = encoder.issue(Uuid::new_v4()).unwrap();
        let window = issued.expires_at - before;

        assert!(window <= chrono::Duration::minutes(30));
        assert!(window > chrono::Duration::minutes(29));
    }

    #[test]
    fn consecutive_issues_produce_distinct_tokens() {
        let encoder = JwtEncoder::new(&test_config());
        let public_id = Uuid::new_v4();

        let first = encoder.issue(public_id).unwrap();
        let second = encoder.issue(public_id).unwrap();

        assert_ne!(first.access_token, second.access_token);
    }
}
