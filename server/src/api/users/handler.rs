//! User Account Handlers (admin only)

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{User, UserCreate, UserUpdate};
use crate::db::repository::user;
use crate::utils::AppResult;
use crate::utils::validation::validate_required_text;

/// List all accounts
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<User>>> {
    let users = user::find_all(state.pool()).await?;
    Ok(Json(users))
}

/// Get one account
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<User>> {
    let account = user::get(state.pool(), id).await?;
    Ok(Json(account))
}

/// Create an account
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    validate_required_text(&payload.username, "username", 100)?;
    let account = user::create(state.pool(), payload).await?;
    tracing::info!(user_id = account.id, "User account created");
    Ok(Json(account))
}

/// Update an account (password only rehashed when provided)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<UserUpdate>,
) -> AppResult<Json<User>> {
    if let Some(username) = &payload.username {
        validate_required_text(username, "username", 100)?;
    }
    let account = user::update(state.pool(), id, payload).await?;
    Ok(Json(account))
}

/// Delete an account
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    user::delete(state.pool(), id).await?;
    Ok(Json(serde_json::json!({ "message": "Deleted successfully" })))
}
