//! Deck repository for database operations

use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::Deck;

/// Deck repository
#[derive(Clone)]
pub struct DeckRepository {
    pool: PgPool,
}

impl DeckRepository {
    /// Create a new deck repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &PgRow) -> Deck {
        Deck {
            id: row.get("id"),
            name: row.get("name"),
            color: row.get("color"),
            cards: row.get::<Json<Vec<Uuid>>, _>("cards").0,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }

    /// Create a new deck with an empty card list
    pub async fn create(&self, name: &str, color: &str) -> Result<Deck> {
        info!("Creating deck: {}", name);

        let row = sqlx::query(
            r#"
            INSERT INTO decks (name, color)
            VALUES ($1, $2)
            RETURNING id, name, color, cards, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(color)
        .fetch_one(&self.pool)
        .await?;

        Ok(Self::from_row(&row))
    }

    /// Find a deck by id
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Deck>> {
        let row = sqlx::query(
            r#"
            SELECT id, name, color, cards, created_at, updated_at
            FROM decks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// Apply a patch; unsupplied fields are left unchanged
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        color: Option<&str>,
        cards: Option<&[Uuid]>,
    ) -> Result<Option<Deck>> {
        let row = sqlx::query(
            r#"
            UPDATE decks
            SET name = COALESCE($2, name),
                color = COALESCE($3, color),
                cards = COALESCE($4, cards),
                updated_at = now()
            WHERE id = $1
            RETURNING id, name, color, cards, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(color)
        .bind(cards.map(|c| Json(c.to_vec())))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(Self::from_row))
    }

    /// Delete a deck by id; returns whether a row was removed
    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        info!("Deleting deck: {}", id);

        let result = sqlx::query(
            r#"
            DELETE FROM decks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
