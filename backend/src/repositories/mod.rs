//! Database repositories
//!
//! Provides data access layer for database operations. Every statement is
//! parameterized.

pub mod exercise;
pub mod user;
pub mod workout;

pub use exercise::{ExerciseRecord, ExerciseRepository};
pub use user::{UserRecord, UserRepository};
pub use workout::{
    CreateWorkoutEntry, WorkoutEntryRecord, WorkoutRecord, WorkoutRepository, WorkoutStatsRecord,
};

/// Whether a repository error came from a unique constraint
pub fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| e.as_database_error())
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        let err = anyhow::anyhow!("something else");
        assert!(!is_unique_violation(&err));

        let err: anyhow::Error = sqlx::Error::RowNotFound.into();
        assert!(!is_unique_violation(&err));
    }
}
