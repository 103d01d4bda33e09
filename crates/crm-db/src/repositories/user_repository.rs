//! User repository. Owns email uniqueness: a duplicate email on create
//! surfaces as `DbError::UniqueViolation`.

use crate::{DbError, Result as DbErrorResult};

use crm_core::User;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

/// Fields needed to persist a new user. `password` is the bcrypt hash;
/// plaintext must never reach this layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub password: String,
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_user: &NewUser) -> DbErrorResult<User> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (email, name, password, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_user.email)
        .bind(&new_user.name)
        .bind(&new_user.password)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_write_error(e, "users.email"))?;

        let id = result.last_insert_rowid();
        self.find_by_id(id).await?.ok_or_else(|| DbError::Initialization {
            message: format!("user {} missing immediately after insert", id),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, name, password, created_at, updated_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_user).transpose()
    }

    /// Exact-match lookup; email comparison is case-sensitive as stored
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, email, name, password, created_at, updated_at
                FROM users
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(map_user).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
                SELECT id, email, name, password, created_at, updated_at
                FROM users
                ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(map_user).collect()
    }

    /// Persist email/name changes. The password column is deliberately
    /// untouched; password change is not an exposed operation.
    pub async fn update(&self, user: &User) -> DbErrorResult<()> {
        let updated_at = user.updated_at.timestamp();

        sqlx::query(
            r#"
                UPDATE users
                SET email = ?, name = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.email)
        .bind(&user.name)
        .bind(updated_at)
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(|e| DbError::from_write_error(e, "users.email"))?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("n")?)
    }
}

fn map_user(row: SqliteRow) -> DbErrorResult<User> {
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        password: row.try_get("password")?,
        created_at: timestamp(created_at, "users.created_at")?,
        updated_at: timestamp(updated_at, "users.updated_at")?,
    })
}

#[track_caller]
pub(crate) fn timestamp(ts: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
