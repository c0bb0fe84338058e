//! Dashboard API Handlers

use axum::{Json, extract::State};
use chrono::Datelike;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::{attendance, employee, leave_request, payroll};
use crate::utils::{AppResult, time};

/// 管理面板聚合计数
#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub total_employees: i64,
    pub today_attendance: i64,
    pub pending_leaves: i64,
    pub current_month_total_salary: f64,
}

/// Aggregated counters for the admin dashboard
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<DashboardOverview>> {
    let today = time::today();

    let total_employees = employee::count(state.pool()).await?;
    let today_attendance = attendance::checked_in_count_on(state.pool(), today).await?;
    let pending_leaves = leave_request::count_pending(state.pool()).await?;
    let current_month_total_salary =
        payroll::net_total_for_month(state.pool(), today.year() as i64, today.month() as i64)
            .await?;

    Ok(Json(DashboardOverview {
        total_employees,
        today_attendance,
        pending_leaves,
        current_month_total_salary,
    }))
}
