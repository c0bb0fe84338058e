//! Compliance Policy Models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Compliance policy record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CompliancePolicy {
    pub id: i64,
    pub title: String,
    /// Optional short code, unique when present
    pub code: Option<String>,
    pub description: Option<String>,
    pub effective_date: NaiveDate,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee acknowledgement of a policy - unique per (employee, policy)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeCompliance {
    pub id: i64,
    pub employee_id: i64,
    pub policy_id: i64,
    pub acknowledged_at: DateTime<Utc>,
}

/// Create policy payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompliancePolicyCreate {
    pub title: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub effective_date: NaiveDate,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Update policy payload - absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompliancePolicyUpdate {
    pub title: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub effective_date: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// Policy as seen by an employee: active policy plus their own ack state
#[derive(Debug, Clone, Serialize)]
pub struct CompliancePolicyWithStatus {
    pub id: i64,
    pub title: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub effective_date: NaiveDate,
    pub is_active: bool,
    pub is_acknowledged: bool,
    pub acknowledged_at: Option<DateTime<Utc>>,
}
