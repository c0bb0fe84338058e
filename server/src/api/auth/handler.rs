//! Auth API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{User, UserCreate};
use crate::db::repository::user;
use crate::utils::validation::{MAX_PASSWORD_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Register a new account
///
/// 公共接口: 第一次部署时用来创建账户。用户名重复返回 400。
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<UserCreate>,
) -> AppResult<Json<User>> {
    validate_required_text(&payload.username, "username", 100)?;
    if payload.password.len() < 6 || payload.password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(
            "Password must be between 6 and 128 characters",
        ));
    }

    let created = user::create(state.pool(), payload).await?;
    Ok(Json(created))
}

/// Exchange username + password for a bearer token
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let Some(account) = user::find_by_username(state.pool(), &payload.username).await? else {
        // 不区分 "用户不存在" 与 "密码错误"
        return Err(AppError::invalid_credentials());
    };

    let verified = account
        .verify_password(&payload.password)
        .map_err(|e| AppError::internal(format!("Password verification error: {e}")))?;
    if !verified {
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(
            account.id,
            &account.username,
            account.role,
            account.employee_id,
        )
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(username = %account.username, "User logged in");

    Ok(Json(TokenResponse {
        access_token: token,
        token_type: "bearer",
    }))
}

/// Current authenticated user
pub async fn me(State(state): State<ServerState>, user: CurrentUser) -> AppResult<Json<User>> {
    let account = user::get(state.pool(), user.id).await?;
    Ok(Json(account))
}
