//! Error types for the Fitness Tracker application

use thiserror::Error;

/// Authentication error types
///
/// The transport layer maps these onto status codes: a missing token is
/// reported as 401, while a token that fails verification is reported as
/// 403. Bad and expired tokens share one client-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Missing token")]
    MissingToken,
}

impl AuthError {
    /// Whether this error came from a presented-but-rejected token
    pub fn is_token_rejection(&self) -> bool {
        matches!(self, AuthError::TokenExpired | AuthError::InvalidToken)
    }
}

/// Input field errors raised while normalizing request bodies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} required")]
    Missing(&'static str),

    #[error("{field} must be {expected}")]
    Invalid {
        field: &'static str,
        expected: &'static str,
    },
}
