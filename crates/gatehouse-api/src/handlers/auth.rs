//! Auth handlers — register, login, logout.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;
use validator::Validate;

use gatehouse_core::error::AppError;
use gatehouse_entity::user::CreateUser;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{LoginResponse, MessageResponse};
use crate::extractors::AccessToken;
use crate::state::AppState;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // The unique constraint on email catches registrations that race
    // past this check.
    if state.user_repo.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::conflict(
            "User already exists. Please log in instead.",
        ));
    }

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let user = state
        .user_repo
        .create(&CreateUser {
            email: req.email,
            username: req.username,
            password_hash,
        })
        .await?;

    info!(user = %user.public_id, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registered successfully".to_string(),
        }),
    ))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let issued = state.token_authority.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        message: "Logged in successfully".to_string(),
        access_token: issued.access_token,
    }))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    token: AccessToken,
) -> Result<Json<MessageResponse>, AppError> {
    state.token_authority.logout(token.as_str()).await?;

    Ok(Json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}
