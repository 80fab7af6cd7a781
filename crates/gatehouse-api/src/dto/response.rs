//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gatehouse_entity::user::User;

/// User summary for directory responses.
///
/// Mirrors the directory's stored record, including the password hash
/// (never the plaintext).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Externally visible identifier.
    pub public_id: Uuid,
    /// Email address.
    pub email: String,
    /// Username.
    pub username: String,
    /// Stored Argon2id hash.
    pub password_hash: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            public_id: user.public_id,
            email: user.email,
            username: user.username,
            password_hash: user.password_hash,
        }
    }
}

/// Directory listing response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    /// All users; empty when the directory holds none.
    pub users: Vec<UserResponse>,
}

/// Single-user envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEnvelope {
    /// The requested user.
    pub user: UserResponse,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The issued token, opaque to the client.
    pub access_token: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
