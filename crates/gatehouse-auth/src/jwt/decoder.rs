//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use gatehouse_core::config::auth::AuthConfig;

use super::claims::Claims;
use crate::error::TokenError;

/// Validates token signatures and expiry.
///
/// Revocation is not checked here; the decoder is a pure function of
/// the token string and the signing secret. The token authority layers
/// the revocation-store lookup on top.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes a token string, checking signature and expiry.
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::InvalidSignature,
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "unit-test-secret".to_string(),
            token_ttl_minutes: 30,
        }
    }

    #[test]
    fn fresh_token_decodes_with_original_subject() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);
        let public_id = Uuid::new_v4();

        let issued = encoder.issue(public_id).unwrap();
        let claims = decoder.decode(&issued.access_token).unwrap();

        assert_eq!(claims.sub, public_id);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let decoder = JwtDecoder::new(&test_config());

        let forged = JwtEncoder::new(&AuthConfig {
            jwt_secret: "some-other-secret".to_string(),
            token_ttl_minutes: 30,
        })
        .issue(Uuid::new_v4())
        .unwrap();

        assert!(matches!(
            decoder.decode(&forged.access_token),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn garbage_string_is_invalid() {
        let decoder = JwtDecoder::new(&test_config());

        assert!(matches!(
            decoder.decode("not-a-token"),
            Err(TokenError::InvalidSignature)
        ));
    }

    #[test]
    fn token_past_expiry_is_expired() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            iat: now - 3600,
            exp: now - 1800,
            jti: Uuid::new_v4(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
        )
        .unwrap();

        assert!(matches!(decoder.decode(&token), Err(TokenError::Expired)));
    }
}
