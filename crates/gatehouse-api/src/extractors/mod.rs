//! Custom Axum extractors.

pub mod token;

pub use token::AccessToken;
