//! Performance Review Repository

use super::{RepoError, RepoResult};
use crate::db::models::{PerformanceReview, PerformanceReviewCreate, PerformanceReviewUpdate};
use sqlx::SqlitePool;

const COLS: &str = "id, employee_id, reviewer_id, period, score, summary, strengths, improvements, created_at, updated_at";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<PerformanceReview>> {
    let review = sqlx::query_as::<_, PerformanceReview>(&format!(
        "SELECT {COLS} FROM performance_review WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(review)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<PerformanceReview> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Performance review {id} not found")))
}

pub async fn find_all(
    pool: &SqlitePool,
    employee_id: Option<i64>,
) -> RepoResult<Vec<PerformanceReview>> {
    let reviews = sqlx::query_as::<_, PerformanceReview>(&format!(
        r#"SELECT {COLS} FROM performance_review
           WHERE (?1 IS NULL OR employee_id = ?1)
           ORDER BY created_at DESC"#
    ))
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(reviews)
}

pub async fn create(
    pool: &SqlitePool,
    reviewer_id: i64,
    data: PerformanceReviewCreate,
) -> RepoResult<PerformanceReview> {
    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO performance_review (employee_id, reviewer_id, period, score, summary, strengths, improvements)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
           RETURNING id"#,
    )
    .bind(data.employee_id)
    .bind(reviewer_id)
    .bind(&data.period)
    .bind(data.score)
    .bind(&data.summary)
    .bind(&data.strengths)
    .bind(&data.improvements)
    .fetch_one(pool)
    .await?;

    get(pool, id).await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: PerformanceReviewUpdate,
) -> RepoResult<PerformanceReview> {
    let rows = sqlx::query(
        r#"UPDATE performance_review SET
            period = COALESCE(?1, period),
            score = COALESCE(?2, score),
            summary = COALESCE(?3, summary),
            strengths = COALESCE(?4, strengths),
            improvements = COALESCE(?5, improvements),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ?6"#,
    )
    .bind(&data.period)
    .bind(data.score)
    .bind(&data.summary)
    .bind(&data.strengths)
    .bind(&data.improvements)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Performance review {id} not found"
        )));
    }
    get(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM performance_review WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Performance review {id} not found"
        )));
    }
    Ok(())
}
