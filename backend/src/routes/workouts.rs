//! Workout entry API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::{NewWorkout, WorkoutService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitness_tracker_shared::{
    AddWorkoutRequest, AddWorkoutResponse, MessageResponse, WorkoutEntryResponse,
};
use uuid::Uuid;

/// Create workout routes
///
/// GET and DELETE share one path slot: GET reads it as a date, DELETE as
/// a workout id.
pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(add_workout))
        .route("/:key", get(list_workouts_for_date).delete(delete_workout))
}

/// GET /api/workouts/:date - List the caller's entries for a date
async fn list_workouts_for_date(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(date): Path<String>,
) -> ApiResult<Json<Vec<WorkoutEntryResponse>>> {
    let date = WorkoutService::parse_date(&date)?;
    let entries = WorkoutService::list_for_date(state.db(), auth.user_id, date).await?;
    Ok(Json(entries))
}

/// POST /api/workouts - Log an exercise
async fn add_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<AddWorkoutRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AddWorkoutResponse>)> {
    let Json(req) = payload?;
    let input = NewWorkout::try_from(req)?;
    let workout = WorkoutService::add_workout(state.db(), auth.user_id, input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AddWorkoutResponse {
            message: "Workout added successfully".to_string(),
            workout,
        }),
    ))
}

/// DELETE /api/workouts/:id - Delete an entry the caller owns
async fn delete_workout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    // A malformed id cannot name any workout
    let workout_id = Uuid::parse_str(&id).map_err(|_| WorkoutService::workout_not_found())?;

    WorkoutService::delete_workout(state.db(), auth.user_id, workout_id).await?;

    Ok(Json(MessageResponse::new("Workout deleted successfully")))
}
