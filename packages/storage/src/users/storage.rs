// ABOUTME: User storage layer using SQLite
// ABOUTME: Handles registration inserts and credential lookups

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use super::types::User;
use crate::error::StorageError;

pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. Fails with `DuplicateEmail` if the email is taken;
    /// a failed insert leaves the existing record untouched.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, StorageError> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();

        debug!("Creating user: {}", id);

        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .bind(now)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(User {
                id,
                name: name.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                created_at: now,
            }),
            Err(e) if is_unique_violation(&e) => {
                Err(StorageError::DuplicateEmail(email.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| row_to_user(&row)).transpose()
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| row_to_user(&row)).transpose()
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User, StorageError> {
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(StorageError::from)?;
    Ok(User {
        id: row.try_get("id").map_err(StorageError::from)?,
        name: row.try_get("name").map_err(StorageError::from)?,
        email: row.try_get("email").map_err(StorageError::from)?,
        password_hash: row.try_get("password_hash").map_err(StorageError::from)?,
        created_at,
    })
}
