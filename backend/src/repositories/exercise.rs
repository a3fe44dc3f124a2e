//! Exercise catalog repository

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Exercise record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExerciseRecord {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Exercise repository
pub struct ExerciseRepository;

impl ExerciseRepository {
    /// Fetch the exercise with this exact name, inserting it if absent
    ///
    /// A single statement guarded by the `UNIQUE (name)` constraint, so two
    /// concurrent first uses of a name resolve to the same row. The no-op
    /// update makes `RETURNING` yield the existing row on conflict.
    pub async fn get_or_create(pool: &PgPool, name: &str) -> Result<ExerciseRecord> {
        let record = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            INSERT INTO exercises (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, created_at
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get the whole catalog ordered by name
    pub async fn list_all(pool: &PgPool) -> Result<Vec<ExerciseRecord>> {
        let records = sqlx::query_as::<_, ExerciseRecord>(
            r#"
            SELECT id, name, created_at
            FROM exercises
            ORDER BY name ASC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }
}
