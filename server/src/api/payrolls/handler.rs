//! Payroll API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::auth::CurrentUser;
use crate::calendar;
use crate::core::ServerState;
use crate::db::models::{Payroll, PayrollCreate, PayrollFilter};
use crate::db::repository::payroll::PayrollRecord;
use crate::db::repository::{employee, payroll};
use crate::utils::validation::{validate_amount, validate_month};
use crate::utils::{AppError, AppResult, time};

/// Calculate and persist a monthly payroll (admin)
///
/// attendance_days 和 paid_leave_days 由日历聚合引擎从同一份
/// 考勤/请假数据推导, gross = daily * (attendance + paid_leave)。
pub async fn calculate(
    State(state): State<ServerState>,
    Json(payload): Json<PayrollCreate>,
) -> AppResult<Json<Payroll>> {
    validate_month(payload.month)?;
    validate_amount(payload.base_daily_salary, "base_daily_salary")?;
    validate_amount(payload.deductions, "deductions")?;

    let emp = employee::find_by_id(state.pool(), payload.employee_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Employee {} not found", payload.employee_id))
        })?;

    if payroll::exists_for_month(
        state.pool(),
        payload.employee_id,
        payload.year as i64,
        payload.month as i64,
    )
    .await?
    {
        return Err(AppError::conflict(
            "Payroll for this employee and month already exists",
        ));
    }

    let aggregate = calendar::monthly_aggregate_for(
        state.pool(),
        payload.employee_id,
        payload.year,
        payload.month,
        time::today(),
    )
    .await?
    .ok_or_else(|| AppError::validation("Invalid year/month"))?;

    let attendance_days = aggregate.attendance_days as i64;
    let paid_leave_days = aggregate.paid_leave_days as i64;

    let gross_salary = payload.base_daily_salary * (attendance_days + paid_leave_days) as f64;
    let net_salary = gross_salary - payload.deductions;

    let record = payroll::create(
        state.pool(),
        PayrollRecord {
            employee_id: payload.employee_id,
            year: payload.year as i64,
            month: payload.month as i64,
            base_daily_salary: payload.base_daily_salary,
            attendance_days,
            paid_leave_days,
            gross_salary,
            deductions: payload.deductions,
            net_salary,
        },
    )
    .await?;

    tracing::info!(
        employee_id = record.employee_id,
        year = record.year,
        month = record.month,
        net_salary = record.net_salary,
        "Payroll calculated"
    );

    // 工资条邮件通知, 后台发送
    if let Some(mailer) = &state.mailer {
        mailer.send_payroll_email(
            emp.email.as_deref(),
            &emp.full_name,
            payload.year,
            payload.month,
            net_salary,
        );
    }

    Ok(Json(record))
}

/// List payrolls with optional filters
///
/// 员工强制只看自己的工资单。
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
    Query(mut filter): Query<PayrollFilter>,
) -> AppResult<Json<Vec<Payroll>>> {
    if !user.is_admin() {
        filter.employee_id = Some(user.require_linked_employee()?);
    }
    let payrolls = payroll::find_all(state.pool(), &filter).await?;
    Ok(Json(payrolls))
}

/// Get one payroll
pub async fn get_by_id(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Payroll>> {
    let record = payroll::get(state.pool(), id).await?;
    user.require_self_or_admin(record.employee_id)?;
    Ok(Json(record))
}
