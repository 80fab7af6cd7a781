//! Verification-failure taxonomy for the token authority.

use thiserror::Error;

use gatehouse_core::error::AppError;

/// The reasons a token can fail verification.
///
/// The first four variants correspond to the checks verification runs,
/// in order: signature, expiry, revocation list, subject resolution.
/// `Storage` carries failures of the underlying lookups themselves and
/// is not a verdict about the token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is malformed or its signature does not verify.
    #[error("Invalid token. Please log in again.")]
    InvalidSignature,
    /// The token's expiry time has passed.
    #[error("Signature expired. Please log in again.")]
    Expired,
    /// The exact token string is present in the revocation list.
    #[error("Token revoked. Please log in again.")]
    Revoked,
    /// The token's subject no longer matches a known user.
    #[error("Unknown token subject. Please log in again.")]
    UnknownSubject,
    /// A storage-layer failure occurred while verifying.
    #[error(transparent)]
    Storage(#[from] AppError),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Storage(inner) => inner,
            other => AppError::unauthorized(other.to_string()),
        }
    }
}
