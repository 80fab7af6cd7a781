//! JWT claims structure carried in every issued token.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims payload embedded in every access token.
///
/// The token carries no revocation state; revocation is external, via
/// the revoked-token store consulted at verification time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the user's public id.
    pub sub: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Random JWT ID, so two tokens issued within the same second are
    /// still distinct strings.
    pub jti: Uuid,
}
