//! Leave Request Model (请假单)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Leave request status
///
/// `pending` is the only non-terminal state: edits are allowed while
/// pending, and approve/reject transitions are valid from pending only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for LeaveStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Leave request record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct LeaveRequest {
    pub id: i64,
    pub employee_id: i64,
    pub start_date: NaiveDate,
    /// Inclusive end date, >= start_date
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create leave request payload (status always starts at pending)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveCreate {
    pub employee_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
}

/// Update leave request payload - only valid while pending
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveUpdate {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub reason: Option<String>,
}

/// List filter for leave requests
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeaveFilter {
    pub employee_id: Option<i64>,
    pub status: Option<LeaveStatus>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
}
