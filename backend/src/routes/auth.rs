//! Authentication routes
//!
//! Provides endpoints for user registration, login and the caller's profile.
//! Password hashing runs on the blocking thread pool.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::{AuthSession, RegisterInput, UserService};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use fitness_tracker_shared::{AuthResponse, LoginRequest, RegisterRequest, UserProfile};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_profile))
}

fn auth_response(message: &str, session: AuthSession) -> Json<AuthResponse> {
    Json(AuthResponse {
        message: message.to_string(),
        token: session.token,
        user: session.user,
    })
}

/// Register a new user
///
/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let Json(req) = payload?;
    let input = RegisterInput {
        username: req.username,
        password: req.password,
        email: req.email,
    };
    let session =
        UserService::register(state.db(), state.jwt(), state.bcrypt_cost(), input).await?;
    Ok((StatusCode::CREATED, auth_response("User created successfully", session)))
}

/// Login with username and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(req) = payload?;
    let session = UserService::login(
        state.db(),
        state.jwt(),
        state.bcrypt_cost(),
        req.username.as_deref(),
        req.password.as_deref(),
    )
    .await?;
    Ok(auth_response("Login successful", session))
}

/// Get current user profile (requires authentication)
///
/// GET /api/auth/me
async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Json<UserProfile>> {
    let profile = UserService::get_profile(state.db(), auth_user.user_id).await?;
    Ok(Json(profile))
}
