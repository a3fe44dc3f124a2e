//! Authentication extractor
//!
//! Every protected handler takes an [`AuthUser`] argument. Extraction fails
//! with 401 when no token was presented and 403 when the token does not
//! verify.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use fitness_tracker_shared::AuthError;
use uuid::Uuid;

/// Authenticated caller resolved from a bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub username: String,
}

/// Pull the token out of an `Authorization: <scheme> <token>` header
///
/// Only the token part matters; a header without one counts as missing.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().split_once(' '))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?;

        let claims = app_state.jwt().verify_token(token).map_err(|e| {
            tracing::debug!(reason = %e, "Rejected bearer token");
            e
        })?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthUser {
            user_id,
            username: claims.username,
        })
    }
}
