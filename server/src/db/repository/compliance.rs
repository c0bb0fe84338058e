//! Compliance Policy Repository

use super::{RepoError, RepoResult};
use crate::db::models::{
    CompliancePolicy, CompliancePolicyCreate, CompliancePolicyUpdate, EmployeeCompliance,
};
use sqlx::SqlitePool;

const POLICY_COLS: &str =
    "id, title, code, description, effective_date, is_active, created_at, updated_at";
const ACK_COLS: &str = "id, employee_id, policy_id, acknowledged_at";

pub async fn find_policy_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<CompliancePolicy>> {
    let policy = sqlx::query_as::<_, CompliancePolicy>(&format!(
        "SELECT {POLICY_COLS} FROM compliance_policy WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(policy)
}

pub async fn get_policy(pool: &SqlitePool, id: i64) -> RepoResult<CompliancePolicy> {
    find_policy_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Compliance policy {id} not found")))
}

pub async fn find_all_policies(pool: &SqlitePool) -> RepoResult<Vec<CompliancePolicy>> {
    let policies = sqlx::query_as::<_, CompliancePolicy>(&format!(
        "SELECT {POLICY_COLS} FROM compliance_policy ORDER BY effective_date DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(policies)
}

pub async fn find_active_policies(pool: &SqlitePool) -> RepoResult<Vec<CompliancePolicy>> {
    let policies = sqlx::query_as::<_, CompliancePolicy>(&format!(
        "SELECT {POLICY_COLS} FROM compliance_policy WHERE is_active = 1 ORDER BY effective_date DESC"
    ))
    .fetch_all(pool)
    .await?;
    Ok(policies)
}

async fn code_taken(pool: &SqlitePool, code: &str, exclude_id: Option<i64>) -> RepoResult<bool> {
    let existing: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM compliance_policy WHERE code = ?1 AND (?2 IS NULL OR id != ?2)",
    )
    .bind(code)
    .bind(exclude_id)
    .fetch_optional(pool)
    .await?;
    Ok(existing.is_some())
}

pub async fn create_policy(
    pool: &SqlitePool,
    data: CompliancePolicyCreate,
) -> RepoResult<CompliancePolicy> {
    if let Some(ref code) = data.code
        && code_taken(pool, code, None).await?
    {
        return Err(RepoError::Duplicate(format!(
            "Policy code '{code}' already exists"
        )));
    }

    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO compliance_policy (title, code, description, effective_date, is_active)
           VALUES (?1, ?2, ?3, ?4, ?5)
           RETURNING id"#,
    )
    .bind(&data.title)
    .bind(&data.code)
    .bind(&data.description)
    .bind(data.effective_date)
    .bind(data.is_active)
    .fetch_one(pool)
    .await?;

    get_policy(pool, id).await
}

pub async fn update_policy(
    pool: &SqlitePool,
    id: i64,
    data: CompliancePolicyUpdate,
) -> RepoResult<CompliancePolicy> {
    if let Some(ref code) = data.code
        && code_taken(pool, code, Some(id)).await?
    {
        return Err(RepoError::Duplicate(format!(
            "Policy code '{code}' already exists"
        )));
    }

    let rows = sqlx::query(
        r#"UPDATE compliance_policy SET
            title = COALESCE(?1, title),
            code = COALESCE(?2, code),
            description = COALESCE(?3, description),
            effective_date = COALESCE(?4, effective_date),
            is_active = COALESCE(?5, is_active),
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
        WHERE id = ?6"#,
    )
    .bind(&data.title)
    .bind(&data.code)
    .bind(&data.description)
    .bind(data.effective_date)
    .bind(data.is_active)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Compliance policy {id} not found"
        )));
    }
    get_policy(pool, id).await
}

pub async fn delete_policy(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM compliance_policy WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Compliance policy {id} not found"
        )));
    }
    Ok(())
}

pub async fn acknowledgements_for_policy(
    pool: &SqlitePool,
    policy_id: i64,
) -> RepoResult<Vec<EmployeeCompliance>> {
    let acks = sqlx::query_as::<_, EmployeeCompliance>(&format!(
        "SELECT {ACK_COLS} FROM employee_compliance WHERE policy_id = ? ORDER BY acknowledged_at"
    ))
    .bind(policy_id)
    .fetch_all(pool)
    .await?;
    Ok(acks)
}

pub async fn acknowledgements_for_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Vec<EmployeeCompliance>> {
    let acks = sqlx::query_as::<_, EmployeeCompliance>(&format!(
        "SELECT {ACK_COLS} FROM employee_compliance WHERE employee_id = ?"
    ))
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(acks)
}

/// Record an acknowledgement; idempotent - acknowledging twice keeps the
/// original timestamp
pub async fn acknowledge(
    pool: &SqlitePool,
    employee_id: i64,
    policy_id: i64,
) -> RepoResult<EmployeeCompliance> {
    let existing = sqlx::query_as::<_, EmployeeCompliance>(&format!(
        "SELECT {ACK_COLS} FROM employee_compliance WHERE employee_id = ? AND policy_id = ?"
    ))
    .bind(employee_id)
    .bind(policy_id)
    .fetch_optional(pool)
    .await?;

    if let Some(ack) = existing {
        return Ok(ack);
    }

    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO employee_compliance (employee_id, policy_id)
           VALUES (?1, ?2)
           RETURNING id"#,
    )
    .bind(employee_id)
    .bind(policy_id)
    .fetch_one(pool)
    .await?;

    let ack = sqlx::query_as::<_, EmployeeCompliance>(&format!(
        "SELECT {ACK_COLS} FROM employee_compliance WHERE id = ?"
    ))
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(ack)
}
