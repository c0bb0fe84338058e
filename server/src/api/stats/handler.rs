//! Statistics API Handlers
//!
//! 月度日历类接口全部走 [`crate::calendar`] 聚合引擎, 保证与工资
//! 计算使用同一套分类规则。

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::calendar::{self, MonthlyAggregate, clamp_to_month, month_bounds};
use crate::core::ServerState;
use crate::db::repository::{attendance, employee, leave_request, payroll};
use crate::utils::{AppError, AppResult, time};

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Deserialize)]
pub struct HeatmapQuery {
    pub employee_id: i64,
    pub year: i32,
    pub month: u32,
}

/// 系统总览
#[derive(Debug, Serialize)]
pub struct OverviewStats {
    pub total_employees: i64,
    pub todays_attendance_count: i64,
    pub pending_leave_requests: i64,
    pub current_month_total_payroll: f64,
}

#[derive(Debug, Serialize)]
pub struct SummaryItem {
    pub employee_id: i64,
    pub days: i64,
}

#[derive(Debug, Serialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub items: Vec<SummaryItem>,
}

/// System-wide overview counters (admin)
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<OverviewStats>> {
    let today = time::today();

    let total_employees = employee::count(state.pool()).await?;
    let todays_attendance_count = attendance::checked_in_count_on(state.pool(), today).await?;
    let pending_leave_requests = leave_request::count_pending(state.pool()).await?;
    let current_month_total_payroll =
        payroll::net_total_for_month(state.pool(), today.year() as i64, today.month() as i64)
            .await?;

    Ok(Json(OverviewStats {
        total_employees,
        todays_attendance_count,
        pending_leave_requests,
        current_month_total_payroll,
    }))
}

/// Per-employee distinct check-in days for one month (admin)
pub async fn attendance_summary(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<MonthlySummary>> {
    let (first, last) = month_bounds(query.year, query.month)
        .ok_or_else(|| AppError::validation("Invalid year/month"))?;

    let rows = attendance::per_employee_day_counts(state.pool(), first, last).await?;
    let items = rows
        .into_iter()
        .map(|(employee_id, days)| SummaryItem { employee_id, days })
        .collect();

    Ok(Json(MonthlySummary {
        year: query.year,
        month: query.month,
        items,
    }))
}

/// Per-employee approved leave days for one month (admin)
///
/// 区间在内存里裁剪到月边界再求和, 与工资计算同一套裁剪规则。
pub async fn leave_summary(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<MonthlySummary>> {
    let (first, last) = month_bounds(query.year, query.month)
        .ok_or_else(|| AppError::validation("Invalid year/month"))?;

    let rows = leave_request::approved_overlapping_all(state.pool(), first, last).await?;

    let mut days_by_emp: BTreeMap<i64, i64> = BTreeMap::new();
    for (employee_id, start, end) in rows {
        if let Some((s, e)) = clamp_to_month(start, end, first, last) {
            *days_by_emp.entry(employee_id).or_insert(0) += (e - s).num_days() + 1;
        }
    }

    let items = days_by_emp
        .into_iter()
        .map(|(employee_id, days)| SummaryItem { employee_id, days })
        .collect();

    Ok(Json(MonthlySummary {
        year: query.year,
        month: query.month,
        items,
    }))
}

#[derive(Debug, Serialize)]
pub struct HeatmapResponse {
    pub employee_id: i64,
    #[serde(flatten)]
    pub aggregate: MonthlyAggregate,
}

/// Month calendar for one employee (admin)
pub async fn attendance_heatmap(
    State(state): State<ServerState>,
    Query(query): Query<HeatmapQuery>,
) -> AppResult<Json<HeatmapResponse>> {
    // employee existence is checked inside the aggregation wrapper
    let aggregate = calendar::monthly_aggregate_for(
        state.pool(),
        query.employee_id,
        query.year,
        query.month,
        time::today(),
    )
    .await?
    .ok_or_else(|| AppError::validation("Invalid year/month"))?;

    Ok(Json(HeatmapResponse {
        employee_id: query.employee_id,
        aggregate,
    }))
}

/// Month calendar for the caller's own employee record
pub async fn my_attendance_calendar(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(query): Query<MonthQuery>,
) -> AppResult<Json<MonthlyAggregate>> {
    let employee_id = user.require_linked_employee()?;

    let aggregate = calendar::monthly_aggregate_for(
        state.pool(),
        employee_id,
        query.year,
        query.month,
        time::today(),
    )
    .await?
    .ok_or_else(|| AppError::validation("Invalid year/month"))?;

    Ok(Json(aggregate))
}
