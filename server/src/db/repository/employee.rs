//! Employee Repository

use super::{RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, full_name, email, phone, gender, birth_date, position, department, start_date, created_at FROM employee ORDER BY full_name",
    )
    .fetch_all(pool)
    .await?;
    Ok(employees)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let emp = sqlx::query_as::<_, Employee>(
        "SELECT id, full_name, email, phone, gender, birth_date, position, department, start_date, created_at FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(emp)
}

/// Fetch an employee or fail with NotFound - most call sites want this form
pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Employee> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employee")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO employee (full_name, email, phone, gender, birth_date, position, department, start_date)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
           RETURNING id"#,
    )
    .bind(&data.full_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.gender)
    .bind(data.birth_date)
    .bind(&data.position)
    .bind(&data.department)
    .bind(data.start_date)
    .fetch_one(pool)
    .await?;

    get(pool, id).await
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let rows = sqlx::query(
        r#"UPDATE employee SET
            full_name = COALESCE(?1, full_name),
            email = COALESCE(?2, email),
            phone = COALESCE(?3, phone),
            gender = COALESCE(?4, gender),
            birth_date = COALESCE(?5, birth_date),
            position = COALESCE(?6, position),
            department = COALESCE(?7, department),
            start_date = COALESCE(?8, start_date)
        WHERE id = ?9"#,
    )
    .bind(&data.full_name)
    .bind(&data.email)
    .bind(&data.phone)
    .bind(&data.gender)
    .bind(data.birth_date)
    .bind(&data.position)
    .bind(&data.department)
    .bind(data.start_date)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    get(pool, id).await
}

/// Hard delete; attendance, leave, payroll and review rows cascade
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    Ok(())
}
