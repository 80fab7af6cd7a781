//! Concrete repository implementations.

pub mod revoked_token;
pub mod user;

pub use revoked_token::RevokedTokenRepository;
pub use user::UserRepository;
