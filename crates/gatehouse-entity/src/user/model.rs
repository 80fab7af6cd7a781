//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user account.
///
/// The internal `id` is the storage primary key and never leaves the
/// service; `public_id` is the identifier exposed to clients and carried
/// in token subjects.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Internal identifier.
    pub id: Uuid,
    /// Externally visible, stable identifier.
    pub public_id: Uuid,
    /// Email address. The uniqueness key for registration.
    pub email: String,
    /// Display/login name.
    pub username: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Email address.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
}
