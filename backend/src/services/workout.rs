//! Workout and exercise catalog service
//!
//! Provides business logic for:
//! - Logging exercises against a calendar date
//! - Per-date workout listings
//! - The shared exercise catalog
//! - Per-user aggregate stats

use crate::error::ApiError;
use crate::repositories::{
    CreateWorkoutEntry, ExerciseRecord, ExerciseRepository, WorkoutEntryRecord,
    WorkoutRepository, WorkoutStatsRecord,
};
use chrono::NaiveDate;
use fitness_tracker_shared::validation::{calendar_date, positive_count, required, weight};
use fitness_tracker_shared::{
    AddWorkoutRequest, CreatedWorkout, ExerciseResponse, FieldError, StatsResponse,
    WorkoutEntryResponse,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

/// Longest exercise name the catalog accepts
pub const MAX_EXERCISE_NAME_LEN: usize = 100;

/// Validated input for logging one exercise
#[derive(Debug, Clone, PartialEq)]
pub struct NewWorkout {
    pub exercise_name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<Decimal>,
    pub workout_date: NaiveDate,
}

impl TryFrom<AddWorkoutRequest> for NewWorkout {
    type Error = FieldError;

    fn try_from(req: AddWorkoutRequest) -> Result<Self, Self::Error> {
        const LABEL: &str = "Exercise name and date";
        let exercise_name = required(req.exercise_name.as_deref(), LABEL)?;
        let workout_date = required(req.workout_date.as_deref(), LABEL)?;

        if exercise_name.chars().count() > MAX_EXERCISE_NAME_LEN {
            return Err(FieldError::Invalid {
                field: "exercise_name",
                expected: "at most 100 characters",
            });
        }

        Ok(Self {
            exercise_name: exercise_name.to_string(),
            sets: positive_count(req.sets, "sets")?,
            reps: positive_count(req.reps, "reps")?,
            weight: weight(req.weight)?,
            workout_date: calendar_date(workout_date, "workout_date")?,
        })
    }
}

/// Workout service for business logic
pub struct WorkoutService;

impl WorkoutService {
    /// Parse the date segment of `/workouts/:date`
    pub fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
        Ok(calendar_date(raw, "date")?)
    }

    /// List the user's entries on one date, newest first
    pub async fn list_for_date(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<WorkoutEntryResponse>, ApiError> {
        let records = WorkoutRepository::list_for_date(pool, user_id, date)
            .await
            .map_err(ApiError::from_repository)?;

        Ok(records.into_iter().map(Self::record_to_entry).collect())
    }

    /// Log one exercise, adding its name to the catalog on first use
    pub async fn add_workout(
        pool: &PgPool,
        user_id: Uuid,
        input: NewWorkout,
    ) -> Result<CreatedWorkout, ApiError> {
        let exercise = ExerciseRepository::get_or_create(pool, &input.exercise_name)
            .await
            .map_err(ApiError::from_repository)?;

        let record = WorkoutRepository::create(
            pool,
            CreateWorkoutEntry {
                user_id,
                exercise_id: exercise.id,
                sets: input.sets,
                reps: input.reps,
                weight: input.weight,
                workout_date: input.workout_date,
            },
        )
        .await
        .map_err(ApiError::from_repository)?;

        info!(
            user_id = %user_id,
            workout_id = %record.id,
            exercise = %exercise.name,
            date = %record.workout_date,
            "Workout logged"
        );

        Ok(CreatedWorkout {
            id: record.id,
            exercise_name: exercise.name,
            sets: record.sets,
            reps: record.reps,
            weight: record.weight,
            workout_date: record.workout_date,
        })
    }

    /// Delete an entry owned by the user
    ///
    /// Missing and foreign entries are both reported as not found.
    pub async fn delete_workout(
        pool: &PgPool,
        user_id: Uuid,
        workout_id: Uuid,
    ) -> Result<(), ApiError> {
        let deleted = WorkoutRepository::delete_owned(pool, workout_id, user_id)
            .await
            .map_err(ApiError::from_repository)?;

        if !deleted {
            debug!(user_id = %user_id, workout_id = %workout_id, "Delete matched no owned workout");
            return Err(Self::workout_not_found());
        }

        info!(user_id = %user_id, workout_id = %workout_id, "Workout deleted");
        Ok(())
    }

    /// Get the full exercise catalog ordered by name
    pub async fn list_exercises(pool: &PgPool) -> Result<Vec<ExerciseResponse>, ApiError> {
        let records = ExerciseRepository::list_all(pool)
            .await
            .map_err(ApiError::from_repository)?;

        Ok(records.into_iter().map(Self::record_to_exercise).collect())
    }

    /// Get the user's aggregate stats; empty when nothing is logged
    pub async fn get_stats(pool: &PgPool, user_id: Uuid) -> Result<StatsResponse, ApiError> {
        let record = WorkoutRepository::stats_for_user(pool, user_id)
            .await
            .map_err(ApiError::from_repository)?;

        Ok(record.map(Self::record_to_stats).unwrap_or_default())
    }

    pub fn workout_not_found() -> ApiError {
        ApiError::NotFound("Workout not found".to_string())
    }

    // Helper methods

    fn record_to_entry(record: WorkoutEntryRecord) -> WorkoutEntryResponse {
        WorkoutEntryResponse {
            id: record.id,
            user_id: record.user_id,
            exercise_id: record.exercise_id,
            exercise_name: record.exercise_name,
            sets: record.sets,
            reps: record.reps,
            weight: record.weight,
            workout_date: record.workout_date,
            created_at: record.created_at,
        }
    }

    fn record_to_exercise(record: ExerciseRecord) -> ExerciseResponse {
        ExerciseResponse {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
        }
    }

    fn record_to_stats(record: WorkoutStatsRecord) -> StatsResponse {
        StatsResponse {
            total_days: Some(record.total_days),
            total_exercises: Some(record.total_exercises),
            most_common_exercise: Some(record.most_common_exercise),
            exercise_count: Some(record.exercise_count),
        }
    }
}
