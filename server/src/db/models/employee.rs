//! Employee Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Employee record - the person every other HR entity hangs off
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub department: Option<String>,
    /// First day of employment
    pub start_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub start_date: Option<NaiveDate>,
}

/// Update employee payload - absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub start_date: Option<NaiveDate>,
}
