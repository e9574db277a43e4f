//! Unified application error
//!
//! [`AppError`] is the one error type the HTTP boundary renders. It pairs an
//! [`ErrorKind`] (the status) with the envelope fields: a machine-readable
//! code and a client-facing message. Handlers that classified their own
//! failure set the code explicitly and it passes through untouched;
//! anything else falls back to the kind's default code.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use serde::Serialize;

use super::kind::ErrorKind;

/// Shorthand for `Result<T, AppError>`
pub type AppResult<T> = Result<T, AppError>;

/// The error type every non-2xx response is built from
///
/// ```rust
/// use kernel::error::app_error::AppError;
///
/// // Unclassified: code falls back to the kind
/// let err = AppError::not_found("User not found");
/// assert_eq!(err.code(), "NOT_FOUND");
///
/// // Classified by a handler: the explicit code wins
/// let err = AppError::bad_request("이미 가입된 사용자입니다.")
///     .with_code("USER_ALREADY_EXISTS");
/// assert_eq!(err.code(), "USER_ALREADY_EXISTS");
/// ```
pub struct AppError {
    kind: ErrorKind,
    code: Option<Cow<'static, str>>,
    message: Cow<'static, str>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

impl AppError {
    /// Build an error of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the machine-readable envelope code
    pub fn with_code(mut self, code: impl Into<Cow<'static, str>>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach the underlying cause (kept for logs, never serialized)
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ------------------------------------------------------------------
    // Shorthand constructors for the kinds used across the codebase
    // ------------------------------------------------------------------

    pub fn bad_request(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Forbidden, message)
    }

    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn conflict(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::InternalServerError, message)
    }

    pub fn service_unavailable(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::ServiceUnavailable, message)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    /// The envelope code: explicit if set, else the kind's default
    pub fn code(&self) -> &str {
        match &self.code {
            Some(code) => code,
            None => self.kind.default_code(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_server_error(&self) -> bool {
        self.kind.is_server_error()
    }

    pub fn is_client_error(&self) -> bool {
        self.kind.is_client_error()
    }

    /// The serializable response body for this error
    pub fn to_envelope(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.message.clone().into_owned(),
            },
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg = f.debug_struct("AppError");
        dbg.field("kind", &self.kind)
            .field("code", &self.code())
            .field("message", &self.message);
        if let Some(source) = &self.source {
            dbg.field("source", source);
        }
        dbg.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

// ============================================================================
// Envelope shape
// ============================================================================

/// `{"error": {"code", "message"}}` - the body of every shaped error
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
