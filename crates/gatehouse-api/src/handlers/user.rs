//! User directory handlers — list, fetch, delete.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use gatehouse_core::error::AppError;

use crate::dto::response::{MessageResponse, UserEnvelope, UserListResponse, UserResponse};
use crate::state::AppState;

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse>, AppError> {
    let users = state.user_repo.find_all().await?;

    // An empty directory is a normal outcome, not an error; the empty
    // list keeps "no data" distinguishable from a failure.
    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}

/// GET /users/{public_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> Result<Json<UserEnvelope>, AppError> {
    let user = state
        .user_repo
        .find_by_public_id(public_id)
        .await?
        .ok_or_else(|| AppError::not_found("No user found"))?;

    Ok(Json(UserEnvelope {
        user: UserResponse::from(user),
    }))
}

/// DELETE /users/{public_id}
///
/// Removal is permanent. Outstanding tokens for the deleted user are
/// not revoked; they fail verification at subject resolution instead.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(public_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = state.user_repo.delete_by_public_id(public_id).await?;

    if !deleted {
        return Err(AppError::not_found("No user found"));
    }

    Ok(Json(MessageResponse {
        message: "User was deleted".to_string(),
    }))
}
