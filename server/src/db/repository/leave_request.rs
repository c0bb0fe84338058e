//! Leave Request Repository

use super::{RepoError, RepoResult};
use crate::db::models::{LeaveCreate, LeaveFilter, LeaveRequest, LeaveStatus, LeaveUpdate};
use chrono::NaiveDate;
use sqlx::SqlitePool;

const COLS: &str = "id, employee_id, start_date, end_date, reason, status, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<LeaveRequest>> {
    let leave = sqlx::query_as::<_, LeaveRequest>(&format!(
        "SELECT {COLS} FROM leave_request WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(leave)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<LeaveRequest> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Leave request {id} not found")))
}

pub async fn find_all(pool: &SqlitePool, filter: &LeaveFilter) -> RepoResult<Vec<LeaveRequest>> {
    let leaves = sqlx::query_as::<_, LeaveRequest>(&format!(
        r#"SELECT {COLS} FROM leave_request
           WHERE (?1 IS NULL OR employee_id = ?1)
             AND (?2 IS NULL OR status = ?2)
             AND (?3 IS NULL OR start_date >= ?3)
             AND (?4 IS NULL OR end_date <= ?4)
           ORDER BY created_at DESC"#
    ))
    .bind(filter.employee_id)
    .bind(filter.status)
    .bind(filter.from_date)
    .bind(filter.to_date)
    .fetch_all(pool)
    .await?;
    Ok(leaves)
}

pub async fn create(pool: &SqlitePool, data: LeaveCreate) -> RepoResult<LeaveRequest> {
    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO leave_request (employee_id, start_date, end_date, reason, status)
           VALUES (?1, ?2, ?3, ?4, 'pending')
           RETURNING id"#,
    )
    .bind(data.employee_id)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(&data.reason)
    .fetch_one(pool)
    .await?;

    get(pool, id).await
}

/// Edit start/end/reason - only legal while the request is still pending
pub async fn update_pending(
    pool: &SqlitePool,
    id: i64,
    data: LeaveUpdate,
) -> RepoResult<LeaveRequest> {
    let rows = sqlx::query(
        r#"UPDATE leave_request SET
            start_date = COALESCE(?1, start_date),
            end_date = COALESCE(?2, end_date),
            reason = COALESCE(?3, reason),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ?4 AND status = 'pending'"#,
    )
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(&data.reason)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Leave request {id} not found or no longer pending"
        )));
    }
    get(pool, id).await
}

/// Transition pending -> approved | rejected.
///
/// Guarded in SQL: a request that already left pending is not touched and
/// the caller gets zero rows back, so terminal states are never overwritten
/// even under concurrent approval attempts.
pub async fn transition(
    pool: &SqlitePool,
    id: i64,
    to: LeaveStatus,
) -> RepoResult<Option<LeaveRequest>> {
    let rows = sqlx::query(
        r#"UPDATE leave_request SET
            status = ?1,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ?2 AND status = 'pending'"#,
    )
    .bind(to)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Ok(None);
    }
    Ok(Some(get(pool, id).await?))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM leave_request WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Leave request {id} not found")));
    }
    Ok(())
}

/// Approved leave intervals overlapping [start, end] for one employee
pub async fn approved_overlapping(
    pool: &SqlitePool,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> RepoResult<Vec<(NaiveDate, NaiveDate)>> {
    let rows: Vec<(NaiveDate, NaiveDate)> = sqlx::query_as(
        r#"SELECT start_date, end_date FROM leave_request
           WHERE employee_id = ? AND status = 'approved'
             AND start_date <= ? AND end_date >= ?
           ORDER BY start_date"#,
    )
    .bind(employee_id)
    .bind(end)
    .bind(start)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Approved leave intervals overlapping [start, end] for every employee
pub async fn approved_overlapping_all(
    pool: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
) -> RepoResult<Vec<(i64, NaiveDate, NaiveDate)>> {
    let rows: Vec<(i64, NaiveDate, NaiveDate)> = sqlx::query_as(
        r#"SELECT employee_id, start_date, end_date FROM leave_request
           WHERE status = 'approved' AND start_date <= ? AND end_date >= ?
           ORDER BY employee_id, start_date"#,
    )
    .bind(end)
    .bind(start)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn count_pending(pool: &SqlitePool) -> RepoResult<i64> {
    let n: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM leave_request WHERE status = 'pending'")
            .fetch_one(pool)
            .await?;
    Ok(n)
}
