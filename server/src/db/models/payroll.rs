//! Payroll Model (工资单)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payroll record - at most one per (employee, year, month)
///
/// Invariants: `gross_salary = base_daily_salary * (attendance_days +
/// paid_leave_days)` and `net_salary = gross_salary - deductions`.
/// Amounts are plain f64 in a single currency unit; this mirrors the
/// rest of the system and is not exact-money-safe.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    pub year: i64,
    pub month: i64,
    pub base_daily_salary: f64,
    /// Distinct dates with a recorded check-in in the month
    pub attendance_days: i64,
    /// Sum of clamped approved-leave lengths; overlapping requests are
    /// NOT deduplicated (see calendar module docs)
    pub paid_leave_days: i64,
    pub gross_salary: f64,
    pub deductions: f64,
    pub net_salary: f64,
    pub created_at: DateTime<Utc>,
}

/// Calculate payroll payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollCreate {
    pub employee_id: i64,
    pub year: i32,
    pub month: u32,
    pub base_daily_salary: f64,
    #[serde(default)]
    pub deductions: f64,
}

/// List filter for payroll records
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollFilter {
    pub employee_id: Option<i64>,
    pub year: Option<i64>,
    pub month: Option<i64>,
}
