//! Revoked token repository implementation.

use sqlx::PgPool;

use gatehouse_core::error::{AppError, ErrorKind};
use gatehouse_core::result::AppResult;
use gatehouse_entity::revocation::RevokedToken;

/// Repository for the token revocation list.
///
/// The store is append-only: rows are inserted on logout and consulted
/// by exact string match on every verification. Re-revoking an already
/// revoked token is a no-op rather than an error.
#[derive(Debug, Clone)]
pub struct RevokedTokenRepository {
    pool: PgPool,
}

impl RevokedTokenRepository {
    /// Create a new revoked token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a token string as revoked.
    pub async fn revoke(&self, token: &str) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO revoked_tokens (token) VALUES ($1) \
             ON CONFLICT (token) DO NOTHING",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke token", e))?;

        Ok(())
    }

    /// Check whether the exact token string has been revoked.
    pub async fn is_revoked(&self, token: &str) -> AppResult<bool> {
        let found: Option<RevokedToken> =
            sqlx::query_as("SELECT * FROM revoked_tokens WHERE token = $1")
                .bind(token)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check revocation", e)
                })?;

        Ok(found.is_some())
    }
}
