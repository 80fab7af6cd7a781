//! Token revocation domain entities.

pub mod model;

pub use model::RevokedToken;
