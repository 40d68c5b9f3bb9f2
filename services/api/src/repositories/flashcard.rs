//! Flashcard repository for database operations

use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::collections::{HashMap, HashSet};
use tracing::info;
use uuid::Uuid;

use crate::models::Flashcard;

/// Flashcard repository
#[derive(Clone)]
pub struct FlashcardRepository {
    pool: PgPool,
}

impl FlashcardRepository {
    /// Create a new flashcard repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &PgRow) -> Flashcard {
        Flashcard {
            id: row.get("id"),
            gloss: row.get("gloss"),
            gif: row.get("gif"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    /// Create a new flashcard
    pub async fn create(&self, gloss: &str, gif: &str) -> Result<Flashcard> {
        info!("Creating flashcard: {}", gloss);

        let row = sqlx::query(
            r#"
            INSERT INTO flashcards (gloss, gif)
            VALUES ($1, $2)
            RETURNING id, gloss, gif, created_at, updated_at
            "#,
        )
        .bind(gloss)
        .bind(gif)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::from_row(&row))
    }

    /// Find a flashcard by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Flashcard>> {
        let row = sqlx::query(
            r#"
            SELECT id, gloss, gif, created_at, updated_at
            FROM flashcards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// Fetch the cards for a deck, preserving the deck's ordering
    ///
    /// Ids with no backing card are silently dropped; the add-time
    /// existence check makes that a non-case outside manual data edits.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Flashcard>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let rows = sqlx::query(
            r#"
            SELECT id, gloss, gif, created_at, updated_at
            FROM flashcards
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_id: HashMap<Uuid, Flashcard> = rows
            .iter()
            .map(|row| {
                let card = Self::from_row(row);
                (card.id, card)
            })
            .collect();

        Ok(ids.iter().filter_map(|id| by_id.remove(id)).collect())
    }

    /// Return which of the given ids exist in storage
    pub async fn existing_ids(&self, ids: &[Uuid]) -> Result<HashSet<Uuid>> {
        if ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = sqlx::query(
            r#"
            SELECT id
            FROM flashcards
            WHERE id = ANY($1)
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(|row| row.get("id")).collect())
    }

    /// List flashcards in creation order, with optional paging
    pub async fn list(&self, skip: Option<i64>, limit: Option<i64>) -> Result<Vec<Flashcard>> {
        let rows = sqlx::query(
            r#"
            SELECT id, gloss, gif, created_at, updated_at
            FROM flashcards
            ORDER BY created_at ASC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(Self::from_row).collect())
    }

    /// Apply a patch; unsupplied fields are left unchanged
    pub async fn update(
        &self,
        id: Uuid,
        gloss: Option<&str>,
        gif: Option<&str>,
    ) -> Result<Option<Flashcard>> {
        let row = sqlx::query(
            r#"
            UPDATE flashcards
            SET gloss = COALESCE($2, gloss),
                gif = COALESCE($3, gif),
                updated_at = now()
            WHERE id = $1
            RETURNING id, gloss, gif, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(gloss)
        .bind(gif)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// Delete a flashcard by id; returns whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        info!("Deleting flashcard: {}", id);

        let result = sqlx::query(
            r#"
            DELETE FROM flashcards
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
