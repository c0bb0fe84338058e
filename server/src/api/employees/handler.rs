//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::db::repository::employee;
use crate::utils::AppResult;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// List all employees (admin)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(state.pool()).await?;
    Ok(Json(employees))
}

/// Get employee by id
///
/// 员工只能查看自己关联的记录, 管理员不受限。
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    user.require_self_or_admin(id)?;
    let emp = employee::get(state.pool(), id).await?;
    Ok(Json(emp))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    validate_required_text(&payload.full_name, "full_name", MAX_NAME_LEN)?;
    let emp = employee::create(state.pool(), payload).await?;
    tracing::info!(employee_id = emp.id, "Employee created");
    Ok(Json(emp))
}

/// Update an employee (partial)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if let Some(name) = &payload.full_name {
        validate_required_text(name, "full_name", MAX_NAME_LEN)?;
    }
    let emp = employee::update(state.pool(), id, payload).await?;
    Ok(Json(emp))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Value>> {
    employee::delete(state.pool(), id).await?;
    tracing::info!(employee_id = id, "Employee deleted");
    Ok(Json(json!({ "message": "Employee deleted successfully" })))
}
