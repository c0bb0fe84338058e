//! Leave Request API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{LeaveCreate, LeaveFilter, LeaveRequest, LeaveStatus, LeaveUpdate};
use crate::db::repository::{employee, leave_request};
use crate::utils::validation::validate_date_range;
use crate::utils::{AppError, AppResult};

async fn insert_request(
    state: &ServerState,
    payload: LeaveCreate,
) -> AppResult<Json<LeaveRequest>> {
    validate_date_range(payload.start_date, payload.end_date)?;

    if employee::find_by_id(state.pool(), payload.employee_id)
        .await?
        .is_none()
    {
        return Err(AppError::not_found(format!(
            "Employee {} not found",
            payload.employee_id
        )));
    }

    let leave = leave_request::create(state.pool(), payload).await?;
    tracing::info!(leave_id = leave.id, employee_id = leave.employee_id, "Leave request created");
    Ok(Json(leave))
}

/// Submit a leave request (authenticated)
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<LeaveCreate>,
) -> AppResult<Json<LeaveRequest>> {
    user.require_self_or_admin(payload.employee_id)?;
    insert_request(&state, payload).await
}

/// Submit a leave request without authentication
///
/// 匿名通道: 前台终端等场景提交请假, 身份由 payload 中的 employee_id 指定。
pub async fn create_public(
    State(state): State<ServerState>,
    Json(payload): Json<LeaveCreate>,
) -> AppResult<Json<LeaveRequest>> {
    insert_request(&state, payload).await
}

/// List leave requests with optional filters
///
/// 员工强制只看自己的; 管理员可自由过滤。
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(mut filter): Query<LeaveFilter>,
) -> AppResult<Json<Vec<LeaveRequest>>> {
    if !user.is_admin() {
        filter.employee_id = Some(user.require_linked_employee()?);
    }
    let leaves = leave_request::find_all(state.pool(), &filter).await?;
    Ok(Json(leaves))
}

/// Get one leave request
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<LeaveRequest>> {
    let leave = leave_request::get(state.pool(), id).await?;
    user.require_self_or_admin(leave.employee_id)?;
    Ok(Json(leave))
}

/// Edit start/end/reason - only while pending
pub async fn update(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<LeaveUpdate>,
) -> AppResult<Json<LeaveRequest>> {
    let existing = leave_request::get(state.pool(), id).await?;
    user.require_self_or_admin(existing.employee_id)?;

    if existing.status != LeaveStatus::Pending {
        return Err(AppError::business_rule(
            "Only pending requests can be updated",
        ));
    }

    let start = payload.start_date.unwrap_or(existing.start_date);
    let end = payload.end_date.unwrap_or(existing.end_date);
    validate_date_range(start, end)?;

    let leave = leave_request::update_pending(state.pool(), id, payload).await?;
    Ok(Json(leave))
}

async fn transition(
    state: &ServerState,
    id: i64,
    to: LeaveStatus,
) -> AppResult<Json<LeaveRequest>> {
    // 确认存在, 区分 404 与状态冲突
    let existing = leave_request::get(state.pool(), id).await?;

    let Some(leave) = leave_request::transition(state.pool(), id, to).await? else {
        // 守护式 UPDATE 没有命中行: 已经离开 pending
        return Err(AppError::business_rule(format!(
            "Leave request {id} is already {} and cannot transition",
            existing.status.as_str()
        )));
    };

    tracing::info!(leave_id = id, status = leave.status.as_str(), "Leave request transitioned");

    // 异步通知员工, 失败只记日志
    if let Some(mailer) = &state.mailer {
        let emp = employee::find_by_id(state.pool(), leave.employee_id).await?;
        if let Some(emp) = emp {
            mailer.send_leave_status_email(
                emp.email.as_deref(),
                &emp.full_name,
                leave.id,
                leave.status.as_str(),
            );
        }
    }

    Ok(Json(leave))
}

/// Approve a pending request (admin)
pub async fn approve(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LeaveRequest>> {
    transition(&state, id, LeaveStatus::Approved).await
}

/// Reject a pending request (admin)
pub async fn reject(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<LeaveRequest>> {
    transition(&state, id, LeaveStatus::Rejected).await
}

/// Delete a leave request (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    leave_request::delete(state.pool(), id).await?;
    Ok(Json(serde_json::json!({
        "message": "Leave request deleted successfully"
    })))
}
