//! Application state shared across all handlers.

use std::sync::Arc;

use gatehouse_auth::authority::TokenAuthority;
use gatehouse_auth::password::PasswordHasher;
use gatehouse_core::config::AppConfig;
use gatehouse_database::repositories::user::UserRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User repository.
    pub user_repo: Arc<UserRepository>,
    /// Password hasher (Argon2id).
    pub password_hasher: Arc<PasswordHasher>,
    /// Token issuance, verification, and revocation.
    pub token_authority: Arc<TokenAuthority>,
}
