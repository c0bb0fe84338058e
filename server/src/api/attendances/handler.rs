//! Attendance API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Attendance, AttendanceCreate, AttendanceUpdate};
use crate::db::repository::{attendance, employee};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    pub employee_id: Option<i64>,
    pub work_date: Option<NaiveDate>,
}

/// List attendance records
///
/// 管理员可按 employee_id / work_date 过滤; 员工强制只看自己的记录。
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<AttendanceQuery>,
) -> AppResult<Json<Vec<Attendance>>> {
    let employee_id = if user.is_admin() {
        query.employee_id
    } else {
        Some(user.require_linked_employee()?)
    };

    let records = attendance::find_all(state.pool(), employee_id, query.work_date).await?;
    Ok(Json(records))
}

/// Get one attendance record
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Attendance>> {
    let record = attendance::get(state.pool(), id).await?;
    user.require_self_or_admin(record.employee_id)?;
    Ok(Json(record))
}

/// Record a check-in (optionally with check-out)
///
/// 同一员工同一日期只能有一条记录, 重复创建返回 400。
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<AttendanceCreate>,
) -> AppResult<Json<Attendance>> {
    user.require_self_or_admin(payload.employee_id)?;

    // 员工必须存在 (404 而非悬空外键错误)
    if employee::find_by_id(state.pool(), payload.employee_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found(format!(
            "Employee {} not found",
            payload.employee_id
        )));
    }

    if let (Some(check_in), Some(check_out)) = (payload.check_in, payload.check_out)
        && check_out < check_in
    {
        return Err(AppError::validation("check_out must not precede check_in"));
    }

    let record = attendance::create(state.pool(), payload).await?;
    Ok(Json(record))
}

/// Update check-in / check-out times
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<AttendanceUpdate>,
) -> AppResult<Json<Attendance>> {
    let existing = attendance::get(state.pool(), id).await?;
    user.require_self_or_admin(existing.employee_id)?;

    let check_in = payload.check_in.or(existing.check_in);
    let check_out = payload.check_out.or(existing.check_out);
    if let (Some(ci), Some(co)) = (check_in, check_out)
        && co < ci
    {
        return Err(AppError::validation("check_out must not precede check_in"));
    }

    let record = attendance::update(state.pool(), id, payload).await?;
    Ok(Json(record))
}

/// Delete an attendance record (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    attendance::delete(state.pool(), id).await?;
    Ok(Json(serde_json::json!({
        "message": "Attendance deleted successfully"
    })))
}
