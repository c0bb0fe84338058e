//! Attendance Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Attendance, AttendanceCreate, AttendanceUpdate};
use chrono::NaiveDate;
use sqlx::SqlitePool;

const COLS: &str = "id, employee_id, date, check_in, check_out";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Attendance>> {
    let att = sqlx::query_as::<_, Attendance>(&format!(
        "SELECT {COLS} FROM attendance WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(att)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Attendance> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Attendance {id} not found")))
}

/// List attendance records, optionally narrowed by employee and/or date
pub async fn find_all(
    pool: &SqlitePool,
    employee_id: Option<i64>,
    work_date: Option<NaiveDate>,
) -> RepoResult<Vec<Attendance>> {
    let records = sqlx::query_as::<_, Attendance>(&format!(
        r#"SELECT {COLS} FROM attendance
           WHERE (?1 IS NULL OR employee_id = ?1)
             AND (?2 IS NULL OR date = ?2)
           ORDER BY date DESC, employee_id"#
    ))
    .bind(employee_id)
    .bind(work_date)
    .fetch_all(pool)
    .await?;
    Ok(records)
}

pub async fn create(pool: &SqlitePool, data: AttendanceCreate) -> RepoResult<Attendance> {
    // Friendly pre-check; the unique index on (employee_id, date) is the
    // real guard and races surface as RepoError::Duplicate from the insert.
    let existing: Option<i64> =
        sqlx::query_scalar("SELECT id FROM attendance WHERE employee_id = ? AND date = ?")
            .bind(data.employee_id)
            .bind(data.date)
            .fetch_optional(pool)
            .await?;
    if existing.is_some() {
        return Err(RepoError::Duplicate(
            "Attendance for this date already exists".to_string(),
        ));
    }

    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO attendance (employee_id, date, check_in, check_out)
           VALUES (?1, ?2, ?3, ?4)
           RETURNING id"#,
    )
    .bind(data.employee_id)
    .bind(data.date)
    .bind(data.check_in)
    .bind(data.check_out)
    .fetch_one(pool)
    .await?;

    get(pool, id).await
}

pub async fn update(pool: &SqlitePool, id: i64, data: AttendanceUpdate) -> RepoResult<Attendance> {
    let rows = sqlx::query(
        r#"UPDATE attendance SET
            check_in = COALESCE(?1, check_in),
            check_out = COALESCE(?2, check_out)
        WHERE id = ?3"#,
    )
    .bind(data.check_in)
    .bind(data.check_out)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Attendance {id} not found")));
    }
    get(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM attendance WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Attendance {id} not found")));
    }
    Ok(())
}

/// Distinct dates with a recorded check-in inside [start, end] inclusive.
///
/// The check-in requirement is the presence rule: a check-out-only row
/// never qualifies.
pub async fn present_dates(
    pool: &SqlitePool,
    employee_id: i64,
    start: NaiveDate,
    end: NaiveDate,
) -> RepoResult<Vec<NaiveDate>> {
    let dates: Vec<NaiveDate> = sqlx::query_scalar(
        r#"SELECT DISTINCT date FROM attendance
           WHERE employee_id = ? AND date >= ? AND date <= ?
             AND check_in IS NOT NULL
           ORDER BY date"#,
    )
    .bind(employee_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(dates)
}

/// Per-employee distinct check-in day counts over [start, end] inclusive
pub async fn per_employee_day_counts(
    pool: &SqlitePool,
    start: NaiveDate,
    end: NaiveDate,
) -> RepoResult<Vec<(i64, i64)>> {
    let rows: Vec<(i64, i64)> = sqlx::query_as(
        r#"SELECT employee_id, COUNT(DISTINCT date) AS days FROM attendance
           WHERE date >= ? AND date <= ? AND check_in IS NOT NULL
           GROUP BY employee_id
           ORDER BY employee_id"#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Number of distinct employees with a check-in on the given date
pub async fn checked_in_count_on(pool: &SqlitePool, date: NaiveDate) -> RepoResult<i64> {
    let n: i64 = sqlx::query_scalar(
        "SELECT COUNT(DISTINCT employee_id) FROM attendance WHERE date = ? AND check_in IS NOT NULL",
    )
    .bind(date)
    .fetch_one(pool)
    .await?;
    Ok(n)
}

/// All attendance rows, oldest first - report export input
pub async fn find_all_for_export(pool: &SqlitePool) -> RepoResult<Vec<Attendance>> {
    let records = sqlx::query_as::<_, Attendance>(&format!(
        "SELECT {COLS} FROM attendance ORDER BY date, employee_id"
    ))
    .fetch_all(pool)
    .await?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::EmployeeCreate;
    use crate::db::repository::employee;
    use chrono::NaiveTime;

    async fn seed_employee(pool: &SqlitePool) -> i64 {
        employee::create(
            pool,
            EmployeeCreate {
                full_name: "Test Employee".to_string(),
                email: None,
                phone: None,
                gender: None,
                birth_date: None,
                position: None,
                department: None,
                start_date: None,
            },
        )
        .await
        .unwrap()
        .id
    }

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn present_dates_requires_check_in() {
        let db = DbService::new_in_memory().await.unwrap();
        let emp = seed_employee(&db.pool).await;

        create(
            &db.pool,
            AttendanceCreate {
                employee_id: emp,
                date: d("2025-03-03"),
                check_in: Some(t("09:00:00")),
                check_out: Some(t("18:00:00")),
            },
        )
        .await
        .unwrap();
        // check-out only, never counts as presence
        create(
            &db.pool,
            AttendanceCreate {
                employee_id: emp,
                date: d("2025-03-04"),
                check_in: None,
                check_out: Some(t("18:00:00")),
            },
        )
        .await
        .unwrap();
        // outside the queried range
        create(
            &db.pool,
            AttendanceCreate {
                employee_id: emp,
                date: d("2025-04-01"),
                check_in: Some(t("09:00:00")),
                check_out: None,
            },
        )
        .await
        .unwrap();

        let dates = present_dates(&db.pool, emp, d("2025-03-01"), d("2025-03-31"))
            .await
            .unwrap();
        assert_eq!(dates, vec![d("2025-03-03")]);
    }

    #[tokio::test]
    async fn duplicate_day_is_rejected() {
        let db = DbService::new_in_memory().await.unwrap();
        let emp = seed_employee(&db.pool).await;

        let record = AttendanceCreate {
            employee_id: emp,
            date: d("2025-03-03"),
            check_in: Some(t("09:00:00")),
            check_out: None,
        };
        create(&db.pool, record.clone()).await.unwrap();

        let err = create(&db.pool, record).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }
}
