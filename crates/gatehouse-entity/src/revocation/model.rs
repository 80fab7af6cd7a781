//! Revoked token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A token string that has been explicitly invalidated.
///
/// Rows are written on logout and never updated. Verification consults
/// this table by exact string match; a matching row rejects the token
/// even while its signature and expiry are individually valid.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RevokedToken {
    /// The exact token string that was invalidated.
    pub token: String,
    /// When the revocation was recorded.
    pub revoked_at: DateTime<Utc>,
}
