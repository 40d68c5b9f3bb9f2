//! Session repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::Session;

/// Session repository
#[derive(Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &PgRow) -> Session {
        Session {
            id: row.get("id"),
            user_id: row.get("user_id"),
            expires_at: row.get("expires_at"),
            created_at: row.get("created_at"),
        }
    }

    /// Create a new session for a user
    pub async fn create(&self, user_id: Uuid, expires_at: DateTime<Utc>) -> Result<Session> {
        info!("Creating session for user: {}", user_id);

        let row = sqlx::query(
            r#"
            INSERT INTO sessions (user_id, expires_at)
            VALUES ($1, $2)
            RETURNING id, user_id, expires_at, created_at
            "#,
        )
        .bind(user_id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::from_row(&row))
    }

    /// Find a session by its id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Session>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, expires_at, created_at
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// Find the live session for a user, if any
    ///
    /// One session per user is an application-level invariant, not a
    /// storage constraint; should duplicates ever exist, the most recent
    /// one wins.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Session>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, expires_at, created_at
            FROM sessions
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// Push a session's expiry forward, keeping its id stable
    pub async fn refresh(&self, id: Uuid, expires_at: DateTime<Utc>) -> Result<Session> {
        info!("Refreshing session: {}", id);

        let row = sqlx::query(
            r#"
            UPDATE sessions
            SET expires_at = $2
            WHERE id = $1
            RETURNING id, user_id, expires_at, created_at
            "#,
        )
        .bind(id)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::from_row(&row))
    }

    /// Delete a session by id; returns whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        info!("Deleting session: {}", id);

        let result = sqlx::query(
            r#"
            DELETE FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
