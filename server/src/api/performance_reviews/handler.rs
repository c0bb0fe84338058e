//! Performance Review API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{PerformanceReview, PerformanceReviewCreate, PerformanceReviewUpdate};
use crate::db::repository::{employee, performance_review};
use crate::utils::validation::{MAX_SHORT_TEXT_LEN, validate_required_text, validate_score};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    pub employee_id: Option<i64>,
}

/// List reviews
///
/// 管理员可按 employee_id 过滤; 员工只看自己的 (忽略 query 参数)。
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<ReviewQuery>,
) -> AppResult<Json<Vec<PerformanceReview>>> {
    let employee_id = if user.is_admin() {
        query.employee_id
    } else {
        Some(user.require_linked_employee()?)
    };

    let reviews = performance_review::find_all(state.pool(), employee_id).await?;
    Ok(Json(reviews))
}

/// Get one review
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<PerformanceReview>> {
    let review = performance_review::get(state.pool(), id).await?;
    user.require_self_or_admin(review.employee_id)?;
    Ok(Json(review))
}

/// Create a review (admin), reviewer is the caller
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<PerformanceReviewCreate>,
) -> AppResult<Json<PerformanceReview>> {
    validate_required_text(&payload.period, "period", MAX_SHORT_TEXT_LEN)?;
    validate_score(payload.score)?;

    if employee::find_by_id(state.pool(), payload.employee_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found(format!(
            "Employee {} not found",
            payload.employee_id
        )));
    }

    let review = performance_review::create(state.pool(), user.id, payload).await?;
    tracing::info!(review_id = review.id, reviewer_id = user.id, "Performance review created");
    Ok(Json(review))
}

/// Update a review (admin, partial)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PerformanceReviewUpdate>,
) -> AppResult<Json<PerformanceReview>> {
    if let Some(score) = payload.score {
        validate_score(score)?;
    }
    if let Some(period) = &payload.period {
        validate_required_text(period, "period", MAX_SHORT_TEXT_LEN)?;
    }
    let review = performance_review::update(state.pool(), id, payload).await?;
    Ok(Json(review))
}

/// Delete a review (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    performance_review::delete(state.pool(), id).await?;
    Ok(Json(serde_json::json!({ "deleted": true, "id": id })))
}
