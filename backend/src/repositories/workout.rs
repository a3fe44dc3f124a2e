//! Workout entry repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

/// Workout entry joined with its exercise name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutEntryRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<Decimal>,
    pub workout_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Workout entry row as inserted
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<Decimal>,
    pub workout_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a workout entry
#[derive(Debug, Clone)]
pub struct CreateWorkoutEntry {
    pub user_id: Uuid,
    pub exercise_id: Uuid,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<Decimal>,
    pub workout_date: NaiveDate,
}

/// Aggregate row for a user's stats
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutStatsRecord {
    pub total_days: i64,
    pub total_exercises: i64,
    pub most_common_exercise: String,
    pub exercise_count: i64,
}

/// Workout repository
pub struct WorkoutRepository;

impl WorkoutRepository {
    /// Create a new workout entry
    pub async fn create(pool: &PgPool, input: CreateWorkoutEntry) -> Result<WorkoutRecord> {
        let record = sqlx::query_as::<_, WorkoutRecord>(
            r#"
            INSERT INTO workouts (user_id, exercise_id, sets, reps, weight, workout_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, exercise_id, sets, reps, weight, workout_date, created_at
            "#,
        )
        .bind(input.user_id)
        .bind(input.exercise_id)
        .bind(input.sets)
        .bind(input.reps)
        .bind(input.weight)
        .bind(input.workout_date)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Get a user's entries for one date, newest first
    pub async fn list_for_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<WorkoutEntryRecord>> {
        let records = sqlx::query_as::<_, WorkoutEntryRecord>(
            r#"
            SELECT w.id, w.user_id, w.exercise_id, e.name AS exercise_name,
                   w.sets, w.reps, w.weight, w.workout_date, w.created_at
            FROM workouts w
            JOIN exercises e ON w.exercise_id = e.id
            WHERE w.user_id = $1 AND w.workout_date = $2
            ORDER BY w.created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(date)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Delete an entry if it belongs to the user
    ///
    /// Returns false when no row matched both the id and the owner.
    pub async fn delete_owned(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM workouts
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Compute totals and the most logged exercise for a user
    ///
    /// Returns `None` when the user has no entries. Ties for most logged
    /// exercise fall to whichever group the planner emits first.
    pub async fn stats_for_user(
        pool: &PgPool,
        user_id: Uuid,
    ) -> Result<Option<WorkoutStatsRecord>> {
        let record = sqlx::query_as::<_, WorkoutStatsRecord>(
            r#"
            SELECT
                (SELECT COUNT(DISTINCT workout_date) FROM workouts WHERE user_id = $1) AS total_days,
                (SELECT COUNT(*) FROM workouts WHERE user_id = $1) AS total_exercises,
                e.name AS most_common_exercise,
                COUNT(*) AS exercise_count
            FROM workouts w
            JOIN exercises e ON w.exercise_id = e.id
            WHERE w.user_id = $1
            GROUP BY e.id, e.name
            ORDER BY exercise_count DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}
