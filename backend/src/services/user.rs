//! User service for authentication and user management
//!
//! - Password hashing/verification runs on blocking thread pool
//! - JWT service is passed by reference (pre-computed keys)

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, UserRecord, UserRepository};
use fitness_tracker_shared::validation::{optional_text, required};
use fitness_tracker_shared::{AuthError, FieldError, PublicUser, UserProfile};
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;
use validator::ValidateEmail;

/// Longest username the `users` table accepts
pub const MAX_USERNAME_LEN: usize = 50;

/// A freshly issued token with the user it identifies
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub user: PublicUser,
}

/// Registration input as received from the client
#[derive(Debug, Clone, Default)]
pub struct RegisterInput {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and issue their first token
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        bcrypt_cost: u32,
        input: RegisterInput,
    ) -> Result<AuthSession, ApiError> {
        let (username, password) =
            Self::credentials(input.username.as_deref(), input.password.as_deref())?;

        if username.chars().count() > MAX_USERNAME_LEN {
            return Err(FieldError::Invalid {
                field: "Username",
                expected: "at most 50 characters",
            }
            .into());
        }

        let email = optional_text(input.email);
        if let Some(ref email) = email {
            if !email.validate_email() {
                return Err(ApiError::Validation("Invalid email format".to_string()));
            }
        }

        if UserRepository::username_exists(pool, username)
            .await
            .map_err(ApiError::from_repository)?
        {
            return Err(Self::username_taken());
        }

        let password_hash = PasswordService::hash_async(password.to_string(), bcrypt_cost)
            .await
            .map_err(ApiError::Internal)?;

        // A concurrent registration can still win between the check and the insert
        let user = UserRepository::create(pool, username, &password_hash, email.as_deref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    Self::username_taken()
                } else {
                    ApiError::from_repository(e)
                }
            })?;

        info!(user_id = %user.id, "User registered");

        Self::issue_session(jwt_service, &user)
    }

    /// Authenticate with username and password
    ///
    /// Unknown usernames and wrong passwords produce the same error, and both
    /// pay for one bcrypt round at `bcrypt_cost`.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        bcrypt_cost: u32,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<AuthSession, ApiError> {
        let (username, password) = Self::credentials(username, password)?;

        let Some(user) = UserRepository::find_by_username(pool, username)
            .await
            .map_err(ApiError::from_repository)?
        else {
            return Err(Self::reject_unknown_user(password, bcrypt_cost).await);
        };

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        info!(user_id = %user.id, "User logged in");

        Self::issue_session(jwt_service, &user)
    }

    /// Get user profile
    pub async fn get_profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::from_repository)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(UserProfile {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        })
    }

    fn credentials<'a>(
        username: Option<&'a str>,
        password: Option<&'a str>,
    ) -> Result<(&'a str, &'a str), FieldError> {
        const LABEL: &str = "Username and password";
        Ok((required(username, LABEL)?, required(password, LABEL)?))
    }

    /// Hash the submitted password and discard it, so the miss costs as much
    /// as verifying against a stored hash of the same cost
    async fn reject_unknown_user(password: &str, bcrypt_cost: u32) -> ApiError {
        if let Err(e) = PasswordService::hash_async(password.to_string(), bcrypt_cost).await {
            debug!(error = %e, "Dummy hash for unknown user failed");
        }
        AuthError::InvalidCredentials.into()
    }

    fn username_taken() -> ApiError {
        ApiError::Conflict("Username already exists".to_string())
    }

    fn issue_session(jwt_service: &JwtService, user: &UserRecord) -> Result<AuthSession, ApiError> {
        let token = jwt_service
            .issue_token(user.id, &user.username)
            .map_err(ApiError::Internal)?;

        Ok(AuthSession {
            token,
            user: PublicUser {
                id: user.id,
                username: user.username.clone(),
            },
        })
    }
}
