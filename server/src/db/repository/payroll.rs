//! Payroll Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Payroll, PayrollFilter};
use sqlx::SqlitePool;

const COLS: &str = "id, employee_id, year, month, base_daily_salary, attendance_days, paid_leave_days, gross_salary, deductions, net_salary, created_at";

/// Fully computed payroll row ready to persist
#[derive(Debug, Clone)]
pub struct PayrollRecord {
    pub employee_id: i64,
    pub year: i64,
    pub month: i64,
    pub base_daily_salary: f64,
    pub attendance_days: i64,
    pub paid_leave_days: i64,
    pub gross_salary: f64,
    pub deductions: f64,
    pub net_salary: f64,
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Payroll>> {
    let p = sqlx::query_as::<_, Payroll>(&format!("SELECT {COLS} FROM payroll WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(p)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Payroll> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Payroll {id} not found")))
}

pub async fn find_all(pool: &SqlitePool, filter: &PayrollFilter) -> RepoResult<Vec<Payroll>> {
    let payrolls = sqlx::query_as::<_, Payroll>(&format!(
        r#"SELECT {COLS} FROM payroll
           WHERE (?1 IS NULL OR employee_id = ?1)
             AND (?2 IS NULL OR year = ?2)
             AND (?3 IS NULL OR month = ?3)
           ORDER BY year DESC, month DESC, employee_id"#
    ))
    .bind(filter.employee_id)
    .bind(filter.year)
    .bind(filter.month)
    .fetch_all(pool)
    .await?;
    Ok(payrolls)
}

pub async fn exists_for_month(
    pool: &SqlitePool,
    employee_id: i64,
    year: i64,
    month: i64,
) -> RepoResult<bool> {
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM payroll WHERE employee_id = ? AND year = ? AND month = ?")
            .bind(employee_id)
            .bind(year)
            .bind(month)
            .fetch_optional(pool)
            .await?;
    Ok(existing.is_some())
}

/// Insert a computed payroll row.
///
/// The unique index on (employee_id, year, month) turns a lost
/// check-then-insert race into RepoError::Duplicate instead of a second row.
pub async fn create(pool: &SqlitePool, rec: PayrollRecord) -> RepoResult<Payroll> {
    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO payroll (employee_id, year, month, base_daily_salary, attendance_days, paid_leave_days, gross_salary, deductions, net_salary)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
           RETURNING id"#,
    )
    .bind(rec.employee_id)
    .bind(rec.year)
    .bind(rec.month)
    .bind(rec.base_daily_salary)
    .bind(rec.attendance_days)
    .bind(rec.paid_leave_days)
    .bind(rec.gross_salary)
    .bind(rec.deductions)
    .bind(rec.net_salary)
    .fetch_one(pool)
    .await?;

    get(pool, id).await
}

/// Sum of net salaries for one month - dashboard payroll total
pub async fn net_total_for_month(pool: &SqlitePool, year: i64, month: i64) -> RepoResult<f64> {
    let total: f64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(net_salary), 0.0) FROM payroll WHERE year = ? AND month = ?",
    )
    .bind(year)
    .bind(month)
    .fetch_one(pool)
    .await?;
    Ok(total)
}

/// All payroll rows, oldest first - report export input
pub async fn find_all_for_export(pool: &SqlitePool) -> RepoResult<Vec<Payroll>> {
    let payrolls = sqlx::query_as::<_, Payroll>(&format!(
        "SELECT {COLS} FROM payroll ORDER BY year, month, employee_id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(payrolls)
}
