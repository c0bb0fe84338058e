//! User Account Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role - the two authenticated capability tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Employee,
}

impl Default for Role {
    fn default() -> Self {
        Self::Employee
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            other => Err(format!("Unknown role: {other}")),
        }
    }
}

/// User account, optionally linked to an employee record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
    /// Linked employee record; None for pure admin accounts
    pub employee_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: Option<String>,
    pub password: String,
    #[serde(default)]
    pub role: Role,
    pub employee_id: Option<i64>,
}

/// Update user payload - password only changes when supplied
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<Role>,
    pub employee_id: Option<i64>,
}

impl User {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.password_hash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let hash = User::hash_password("s3cret-password").expect("hash failed");
        let user = User {
            id: 1,
            username: "maria".to_string(),
            email: None,
            password_hash: hash,
            role: Role::Employee,
            employee_id: Some(1),
            created_at: chrono::Utc::now(),
        };

        assert!(user.verify_password("s3cret-password").unwrap());
        assert!(!user.verify_password("wrong").unwrap());
    }
}
