//! # gatehouse-auth
//!
//! Token issuance, verification, and revocation for Gatehouse.
//!
//! ## Modules
//!
//! - `jwt` — JWT claims, HS256 token creation and validation
//! - `password` — Argon2id password hashing and verification
//! - `authority` — the token authority orchestrating login, verify, and
//!   logout over the user and revocation repositories
//! - `error` — the verification-failure taxonomy

pub mod authority;
pub mod error;
pub mod jwt;
pub mod password;

pub use authority::TokenAuthority;
pub use error::TokenError;
pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
