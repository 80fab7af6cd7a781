//! The token authority — login, verify, and logout flows.

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use gatehouse_core::error::AppError;
use gatehouse_core::result::AppResult;
use gatehouse_database::repositories::revoked_token::RevokedTokenRepository;
use gatehouse_database::repositories::user::UserRepository;

use crate::error::TokenError;
use crate::jwt::encoder::IssuedToken;
use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// Issues, verifies, and revokes access tokens.
///
/// Each token moves through at most three states: issued at login,
/// then either expired (detected lazily when verified) or revoked
/// (recorded at logout). Neither of the terminal states can be left.
#[derive(Debug, Clone)]
pub struct TokenAuthority {
    /// Token creation.
    encoder: JwtEncoder,
    /// Signature and expiry validation.
    decoder: JwtDecoder,
    /// Password hashing.
    password_hasher: Arc<PasswordHasher>,
    /// User directory.
    users: Arc<UserRepository>,
    /// Revocation list.
    revoked_tokens: Arc<RevokedTokenRepository>,
}

impl TokenAuthority {
    /// Creates a new token authority with all required dependencies.
    pub fn new(
        encoder: JwtEncoder,
        decoder: JwtDecoder,
        password_hasher: Arc<PasswordHasher>,
        users: Arc<UserRepository>,
        revoked_tokens: Arc<RevokedTokenRepository>,
    ) -> Self {
        Self {
            encoder,
            decoder,
            password_hasher,
            users,
            revoked_tokens,
        }
    }

    /// Authenticates credentials and issues a fresh access token.
    ///
    /// An unknown email is not-found; a wrong password is unauthorized.
    /// Previously issued tokens for the user are unaffected, so
    /// concurrent sessions are implicitly allowed.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<IssuedToken> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User does not exist"))?;

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            debug!(user = %user.public_id, "login rejected: password mismatch");
            return Err(AppError::unauthorized("Incorrect credentials"));
        }

        let issued = self.encoder.issue(user.public_id)?;
        info!(user = %user.public_id, expires_at = %issued.expires_at, "issued access token");
        Ok(issued)
    }

    /// Verifies a token and resolves its subject to the internal user id.
    ///
    /// Checks run in order: signature, expiry, revocation list, subject
    /// resolution. The revocation store is re-queried on every call.
    pub async fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let claims = self.decoder.decode(token)?;

        if self.revoked_tokens.is_revoked(token).await? {
            debug!(subject = %claims.sub, "token rejected: revoked");
            return Err(TokenError::Revoked);
        }

        let user = self
            .users
            .find_by_public_id(claims.sub)
            .await?
            .ok_or(TokenError::UnknownSubject)?;

        Ok(user.id)
    }

    /// Verifies a token and records it in the revocation list.
    ///
    /// A token that fails verification is never recorded; re-revoking an
    /// already revoked token fails verification at the revocation check.
    pub async fn logout(&self, token: &str) -> Result<(), TokenError> {
        self.verify(token).await?;
        self.revoked_tokens.revoke(token).await?;
        info!("access token revoked");
        Ok(())
    }
}
