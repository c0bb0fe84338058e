//! User Repository

use super::{RepoError, RepoResult};
use crate::db::models::{User, UserCreate, UserUpdate};
use sqlx::SqlitePool;

const COLS: &str = "id, username, email, password_hash, role, employee_id, created_at";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<User>> {
    let users = sqlx::query_as::<_, User>(&format!("SELECT {COLS} FROM user ORDER BY username"))
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLS} FROM user WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<User> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("User {id} not found")))
}

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(&format!("SELECT {COLS} FROM user WHERE username = ?"))
        .bind(username)
        .fetch_optional(pool)
        .await?;
    Ok(user)
}

pub async fn create(pool: &SqlitePool, data: UserCreate) -> RepoResult<User> {
    // Friendly pre-check; the unique index on username is the real guard
    if find_by_username(pool, &data.username).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Username '{}' already exists",
            data.username
        )));
    }

    let password_hash = User::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

    let id: i64 = sqlx::query_scalar(
        r#"INSERT INTO user (username, email, password_hash, role, employee_id)
           VALUES (?1, ?2, ?3, ?4, ?5)
           RETURNING id"#,
    )
    .bind(&data.username)
    .bind(&data.email)
    .bind(&password_hash)
    .bind(data.role)
    .bind(data.employee_id)
    .fetch_one(pool)
    .await?;

    get(pool, id).await
}

pub async fn update(pool: &SqlitePool, id: i64, data: UserUpdate) -> RepoResult<User> {
    let existing = get(pool, id).await?;

    // Check duplicate username if changing
    if let Some(ref new_username) = data.username
        && new_username != &existing.username
        && find_by_username(pool, new_username).await?.is_some()
    {
        return Err(RepoError::Duplicate(format!(
            "Username '{new_username}' already exists"
        )));
    }

    let password_hash = match data.password {
        Some(ref password) => Some(
            User::hash_password(password)
                .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?,
        ),
        None => None,
    };

    sqlx::query(
        r#"UPDATE user SET
            username = COALESCE(?1, username),
            email = COALESCE(?2, email),
            password_hash = COALESCE(?3, password_hash),
            role = COALESCE(?4, role),
            employee_id = COALESCE(?5, employee_id)
        WHERE id = ?6"#,
    )
    .bind(&data.username)
    .bind(&data.email)
    .bind(&password_hash)
    .bind(data.role)
    .bind(data.employee_id)
    .bind(id)
    .execute(pool)
    .await?;

    get(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM user WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("User {id} not found")));
    }
    Ok(())
}
