//! Repository Module
//!
//! CRUD operations over the SQLite pool, one file per table. Repositories
//! are free functions taking `&SqlitePool`, matching the thin data-access
//! layer the handlers compose.

pub mod attendance;
pub mod compliance;
pub mod employee;
pub mod leave_request;
pub mod payroll;
pub mod performance_review;
pub mod user;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        // Unique-index violations are the authoritative duplicate signal:
        // two requests racing past an existence pre-check both land here,
        // and exactly one of them gets the row.
        if let sqlx::Error::Database(db_err) = &err
            && db_err.kind() == sqlx::error::ErrorKind::UniqueViolation
        {
            return RepoError::Duplicate(format!("Unique constraint violated: {db_err}"));
        }
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
