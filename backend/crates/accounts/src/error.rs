//! Accounts Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system. Every variant knows
//! its HTTP status, its machine-readable code for the error envelope, and
//! its client-facing message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Accounts-specific result type alias
pub type AccountsResult<T> = Result<T, AccountsError>;

/// Accounts-specific error variants
#[derive(Debug, Error)]
pub enum AccountsError {
    /// A required credential field was missing or blank
    #[error("Missing credentials")]
    MissingCredentials(&'static str),

    /// User name already exists
    #[error("User already exists")]
    UserAlreadyExists,

    /// Unknown user or wrong password (deliberately indistinguishable)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// No bearer token was presented
    #[error("Token not found")]
    TokenNotFound,

    /// Token failed signature/structure checks, or its subject is unknown
    #[error("Invalid token")]
    TokenInvalid,

    /// Token signature is fine but the expiry claim is in the past
    #[error("Token expired")]
    TokenExpired,

    /// User name / nickname validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Password validation error
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // Login failures are 400 on this API, not 401: both unknown-user
            // and wrong-password must share one response shape
            AccountsError::MissingCredentials(_)
            | AccountsError::UserAlreadyExists
            | AccountsError::InvalidCredentials
            | AccountsError::Validation(_)
            | AccountsError::PasswordValidation(_) => StatusCode::BAD_REQUEST,
            AccountsError::TokenNotFound
            | AccountsError::TokenInvalid
            | AccountsError::TokenExpired => StatusCode::UNAUTHORIZED,
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountsError::MissingCredentials(_)
            | AccountsError::UserAlreadyExists
            | AccountsError::InvalidCredentials
            | AccountsError::Validation(_)
            | AccountsError::PasswordValidation(_) => ErrorKind::BadRequest,
            AccountsError::TokenNotFound
            | AccountsError::TokenInvalid
            | AccountsError::TokenExpired => ErrorKind::Unauthorized,
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Machine-readable code for the error envelope
    ///
    /// `None` means this error was not classified by a handler; the
    /// envelope falls back to the kind's default code.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            AccountsError::MissingCredentials(_) => Some("MISSING_CREDENTIALS"),
            AccountsError::UserAlreadyExists => Some("USER_ALREADY_EXISTS"),
            AccountsError::InvalidCredentials => Some("INVALID_CREDENTIALS"),
            AccountsError::TokenNotFound => Some("TOKEN_NOT_FOUND"),
            AccountsError::TokenInvalid => Some("INVALID_TOKEN"),
            AccountsError::TokenExpired => Some("TOKEN_EXPIRED"),
            AccountsError::Validation(_)
            | AccountsError::PasswordValidation(_)
            | AccountsError::Database(_)
            | AccountsError::Internal(_) => None,
        }
    }

    /// Client-facing message
    pub fn client_message(&self) -> String {
        match self {
            AccountsError::MissingCredentials(message) => (*message).to_string(),
            AccountsError::UserAlreadyExists => "이미 가입된 사용자입니다.".to_string(),
            AccountsError::InvalidCredentials => {
                "아이디 또는 비밀번호가 올바르지 않습니다.".to_string()
            }
            AccountsError::TokenNotFound => "토큰이 없습니다.".to_string(),
            AccountsError::TokenInvalid => "토큰이 유효하지 않습니다.".to_string(),
            AccountsError::TokenExpired => "토큰이 만료되었습니다.".to_string(),
            AccountsError::Validation(message) => message.clone(),
            AccountsError::PasswordValidation(message) => message.clone(),
            AccountsError::Database(_) | AccountsError::Internal(_) => {
                "Internal server error".to_string()
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let err = AppError::new(self.kind(), self.client_message());
        match self.code() {
            Some(code) => err.with_code(code),
            None => err,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountsError::Database(e) => {
                tracing::error!(error = %e, "Accounts database error");
            }
            AccountsError::Internal(msg) => {
                tracing::error!(message = %msg, "Accounts internal error");
            }
            AccountsError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountsError::TokenExpired => {
                tracing::debug!("Expired token presented");
            }
            _ => {
                tracing::debug!(error = %self, "Accounts error");
            }
        }
    }
}

impl IntoResponse for AccountsError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<platform::token::TokenSignError> for AccountsError {
    fn from(err: platform::token::TokenSignError) -> Self {
        AccountsError::Internal(err.to_string())
    }
}
