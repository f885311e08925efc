use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_helpers::AppError;
use thiserror::Error;

use crate::models::AccountKind;

/// Message returned for every failed sign-in, whatever the cause.
pub const EMAIL_OR_PASSWORD_INCORRECT: &str = "Email or password incorrect.";

/// An expected failure returned as the `Left` side of a use case.
///
/// Carries the message shown to the client and the HTTP status the
/// boundary should answer with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub message: String,
    pub status: StatusCode,
}

impl DomainError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND)
    }

    /// Unknown email and wrong password both map here.
    pub fn email_or_password_incorrect() -> Self {
        Self::bad_request(EMAIL_OR_PASSWORD_INCORRECT)
    }

    /// "Customer already exists!"
    pub fn already_exists(kind: AccountKind) -> Self {
        Self::bad_request(format!("{} already exists!", kind.noun()))
    }

    /// "Customer does not exist!" with the given status.
    pub fn does_not_exist(kind: AccountKind, status: StatusCode) -> Self {
        Self::new(format!("{} does not exist!", kind.noun()), status)
    }

    /// "Customers not found"
    pub fn none_found(kind: AccountKind) -> Self {
        Self::not_found(format!("{}s not found", kind.noun()))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.status)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err.status {
            StatusCode::NOT_FOUND => AppError::NotFound(err.message),
            StatusCode::UNAUTHORIZED => AppError::Unauthorized(err.message),
            StatusCode::FORBIDDEN => AppError::Forbidden(err.message),
            StatusCode::CONFLICT => AppError::Conflict(err.message),
            _ => AppError::BadRequest(err.message),
        }
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

/// Unexpected failures of the account domain.
///
/// These never become a `Left`: they propagate with `?` and surface as a
/// 500 whose detail is only logged.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Account with email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AccountResult<T> = Result<T, AccountError>;

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::DuplicateEmail(email) => {
                AppError::Conflict(format!("Account with email '{}' already exists", email))
            }
            AccountError::Database(e) => AppError::Database(e),
            other => AppError::InternalServerError(other.to_string()),
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
