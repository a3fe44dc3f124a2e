//! API request and response types

use crate::de::{lenient_decimal, lenient_i64};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// API error response
///
/// `error` is a plain human-readable string so form clients can show it
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

/// Plain acknowledgement body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Authentication Types
// ============================================================================

/// Registration request
///
/// Fields are optional at the wire level so that a missing field is reported
/// as a validation error rather than a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Public view of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub username: String,
}

/// Response for register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: PublicUser,
}

/// User profile response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Workout Types
// ============================================================================

/// Request to log one exercise against a date
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddWorkoutRequest {
    pub exercise_name: Option<String>,
    #[serde(deserialize_with = "lenient_i64")]
    pub sets: Option<i64>,
    #[serde(deserialize_with = "lenient_i64")]
    pub reps: Option<i64>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub weight: Option<Decimal>,
    /// Calendar date, `YYYY-MM-DD`
    pub workout_date: Option<String>,
}

/// A logged workout entry with its exercise name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntryResponse {
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

/// The entry echoed back after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedWorkout {
    pub id: Uuid,
    pub exercise_name: String,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight: Option<Decimal>,
    pub workout_date: NaiveDate,
}

/// Response for a successful add
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddWorkoutResponse {
    pub message: String,
    pub workout: CreatedWorkout,
}

/// Exercise catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Per-user aggregate statistic
///
/// Serializes as `{}` when the user has not logged anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_exercises: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub most_common_exercise: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercise_count: Option<i64>,
}

impl StatsResponse {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats_serialize_as_empty_object() {
        let json = serde_json::to_value(StatsResponse::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
        assert!(StatsResponse::default().is_empty());
    }

    #[test]
    fn test_populated_stats_serialize_all_fields() {
        let stats = StatsResponse {
            total_days: Some(2),
            total_exercises: Some(3),
            most_common_exercise: Some("Bench Press".to_string()),
            exercise_count: Some(2),
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_days"], 2);
        assert_eq!(json["total_exercises"], 3);
        assert_eq!(json["most_common_exercise"], "Bench Press");
        assert_eq!(json["exercise_count"], 2);
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_add_workout_request_accepts_form_strings() {
        let req: AddWorkoutRequest = serde_json::from_str(
            r#"{"exercise_name": "Squat", "sets": "3", "reps": "", "weight": "225", "workout_date": "2024-06-01"}"#,
        )
        .unwrap();
        assert_eq!(req.exercise_name.as_deref(), Some("Squat"));
        assert_eq!(req.sets, Some(3));
        assert_eq!(req.reps, None);
        assert_eq!(req.weight, Some(Decimal::from(225)));
        assert_eq!(req.workout_date.as_deref(), Some("2024-06-01"));
    }

    #[test]
    fn test_register_request_tolerates_missing_fields() {
        let req: RegisterRequest = serde_json::from_str(r#"{"username": "lifter"}"#).unwrap();
        assert_eq!(req.username.as_deref(), Some("lifter"));
        assert!(req.password.is_none());
        assert!(req.email.is_none());
    }
}
