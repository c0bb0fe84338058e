//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - Reasonable UX limits for names, notes, descriptions
//! - SQLite TEXT has no built-in length enforcement

use chrono::NaiveDate;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employee full name, policy title, position, department, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, descriptions, reasons (leave reason, review summary, etc.)
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone, gender, policy code, review period, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

// ── Domain validation ───────────────────────────────────────────────

/// Validate a month number (1-12).
pub fn validate_month(month: u32) -> Result<(), AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::validation(format!(
            "month must be between 1 and 12, got {month}"
        )));
    }
    Ok(())
}

/// Validate a leave interval: end date must not precede start date.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if end < start {
        return Err(AppError::validation(format!(
            "end_date {end} must be greater than or equal to start_date {start}"
        )));
    }
    Ok(())
}

/// Validate a performance review score (1-5).
pub fn validate_score(score: i64) -> Result<(), AppError> {
    if !(1..=5).contains(&score) {
        return Err(AppError::validation(format!(
            "score must be between 1 and 5, got {score}"
        )));
    }
    Ok(())
}

/// Validate a non-negative money amount.
pub fn validate_amount(amount: f64, field: &str) -> Result<(), AppError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(AppError::validation(format!(
            "{field} cannot be negative: {amount}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_range() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        assert!(validate_date_range(start, end).is_ok());
        assert!(validate_date_range(start, start).is_ok());
        assert!(validate_date_range(end, start).is_err());
    }

    #[test]
    fn test_validate_month() {
        assert!(validate_month(1).is_ok());
        assert!(validate_month(12).is_ok());
        assert!(validate_month(0).is_err());
        assert!(validate_month(13).is_err());
    }

    #[test]
    fn test_validate_score() {
        assert!(validate_score(1).is_ok());
        assert!(validate_score(5).is_ok());
        assert!(validate_score(0).is_err());
        assert!(validate_score(6).is_err());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(0.0, "deductions").is_ok());
        assert!(validate_amount(500_000.0, "base_daily_salary").is_ok());
        assert!(validate_amount(-1.0, "deductions").is_err());
        assert!(validate_amount(f64::NAN, "deductions").is_err());
    }
}
