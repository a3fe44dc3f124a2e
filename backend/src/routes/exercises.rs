//! Exercise catalog and stats routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::WorkoutService;
use crate::state::AppState;
use axum::{extract::State, Json};
use fitness_tracker_shared::{ExerciseResponse, StatsResponse};

/// GET /api/exercises - The shared catalog, ordered by name
pub async fn list_exercises(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ExerciseResponse>>> {
    let exercises = WorkoutService::list_exercises(state.db()).await?;
    Ok(Json(exercises))
}

/// GET /api/stats - Aggregate stats for the caller, `{}` when empty
pub async fn get_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<StatsResponse>> {
    let stats = WorkoutService::get_stats(state.db(), auth.user_id).await?;
    Ok(Json(stats))
}
