//! Performance Review Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Performance review record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PerformanceReview {
    pub id: i64,
    pub employee_id: i64,
    /// User account of the admin who wrote the review
    pub reviewer_id: i64,
    /// Period label, e.g. "2025-Q1"
    pub period: String,
    /// Bounded 1-5
    pub score: i64,
    pub summary: Option<String>,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create review payload (reviewer comes from the authenticated admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReviewCreate {
    pub employee_id: i64,
    pub period: String,
    pub score: i64,
    pub summary: Option<String>,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
}

/// Update review payload - absent fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerformanceReviewUpdate {
    pub period: Option<String>,
    pub score: Option<i64>,
    pub summary: Option<String>,
    pub strengths: Option<String>,
    pub improvements: Option<String>,
}
