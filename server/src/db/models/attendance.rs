//! Attendance Model (考勤打卡)

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Attendance record - at most one per (employee, date)
///
/// A recorded `check_in` is the sole presence signal; a `check_out`
/// without a `check_in` never counts as a worked day.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}

/// Create attendance payload (check-in and check-out together, or check-in only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCreate {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}

/// Update attendance payload - adjust check-in / check-out times
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendanceUpdate {
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}
