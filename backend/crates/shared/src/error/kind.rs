//! Error classification
//!
//! [`ErrorKind`] names the failure classes the HTTP boundary understands.
//! Each kind carries its status code and the fallback envelope code used
//! when a handler did not attach a more specific one.

/// Failure classes, one per HTTP status this system emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 408
    RequestTimeout,
    /// 409
    Conflict,
    /// 422
    UnprocessableEntity,
    /// 500
    InternalServerError,
    /// 503
    ServiceUnavailable,
}

impl ErrorKind {
    /// Numeric HTTP status code
    ///
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::NotFound.status_code(), 404);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Standard reason phrase for the status
    #[inline]
    pub const fn reason_phrase(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// Fallback machine-readable code for the error envelope
    ///
    /// Handlers that classified their own failure attach a specific code;
    /// everything else falls back here. Authentication failures normalize
    /// to `AUTHENTICATION_FAILED`, the rest to the kind's name in
    /// SCREAMING_SNAKE_CASE.
    ///
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Unauthorized.default_code(), "AUTHENTICATION_FAILED");
    /// assert_eq!(ErrorKind::Conflict.default_code(), "CONFLICT");
    /// ```
    #[inline]
    pub const fn default_code(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BAD_REQUEST",
            ErrorKind::Unauthorized => "AUTHENTICATION_FAILED",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::RequestTimeout => "REQUEST_TIMEOUT",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            ErrorKind::InternalServerError => "INTERNAL_SERVER_ERROR",
            ErrorKind::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// 5xx: operator-facing, should be logged
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx: caller-facing
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        self.status_code() >= 400 && self.status_code() < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason_phrase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[ErrorKind] = &[
        ErrorKind::BadRequest,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::NotFound,
        ErrorKind::RequestTimeout,
        ErrorKind::Conflict,
        ErrorKind::UnprocessableEntity,
        ErrorKind::InternalServerError,
        ErrorKind::ServiceUnavailable,
    ];

    #[test]
    fn test_status_codes_are_valid_http() {
        for kind in ALL {
            let status = kind.status_code();
            assert!((400..=599).contains(&status), "{kind:?} -> {status}");
        }
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
    }

    #[test]
    fn test_default_codes_are_screaming_snake() {
        for kind in ALL {
            let code = kind.default_code();
            assert!(
                code.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{code:?}"
            );
        }
    }

    #[test]
    fn test_unauthorized_normalizes_to_authentication_failed() {
        assert_eq!(
            ErrorKind::Unauthorized.default_code(),
            "AUTHENTICATION_FAILED"
        );
    }

    #[test]
    fn test_server_client_split() {
        for kind in ALL {
            assert_ne!(kind.is_server_error(), kind.is_client_error());
        }
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::BadRequest.is_client_error());
    }
}
