//! Authorize Use Case
//!
//! The bearer-token guard. Classifies every incoming `Authorization` header
//! into exactly one [`AuthOutcome`]: classification is total, and each
//! rejection reason maps to one machine-readable error code. The decision
//! logic lives here, in a plain async function over the repository trait,
//! so it is testable without any HTTP scaffolding.

use std::sync::Arc;

use platform::token::{TokenCodec, TokenVerifyError};
use uuid::Uuid;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AccountsError, AccountsResult};

/// Why a request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// No bearer token was presented (absent/empty header, or no
    /// `Bearer` credentials in it)
    NoToken,
    /// Token failed signature/structure checks, or its subject is unknown
    Malformed,
    /// Token is valid except its expiry claim is in the past
    Expired,
}

impl From<RejectReason> for AccountsError {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::NoToken => AccountsError::TokenNotFound,
            RejectReason::Malformed => AccountsError::TokenInvalid,
            RejectReason::Expired => AccountsError::TokenExpired,
        }
    }
}

/// Outcome of guarding one request
#[derive(Debug, Clone)]
pub enum AuthOutcome {
    /// Token verified and subject resolved
    Authenticated(User),
    /// Terminal rejection
    Rejected(RejectReason),
}

/// Extract the bearer token from an `Authorization` header value
///
/// Returns `None` when no token was presented at all: missing header,
/// blank value, a non-Bearer scheme, or a bare `Bearer` with nothing
/// after it.
pub fn bearer_token(header: Option<&str>) -> Option<&str> {
    let value = header?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

/// Authorize use case
pub struct AuthorizeUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<TokenCodec>,
}

impl<U> AuthorizeUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: Arc<TokenCodec>) -> Self {
        Self { user_repo, codec }
    }

    /// Classify the `Authorization` header of one request.
    ///
    /// The only `Err` is repository I/O failure; every token condition is
    /// an `Ok(AuthOutcome)`. Verifying the same token twice yields the
    /// same outcome, absent the passage of time past expiry.
    pub async fn execute(&self, authorization: Option<&str>) -> AccountsResult<AuthOutcome> {
        let Some(token) = bearer_token(authorization) else {
            return Ok(AuthOutcome::Rejected(RejectReason::NoToken));
        };

        // The codec reports expiry as an enumerated reason; the
        // expired/malformed distinction is user-facing and must survive
        let claims = match self.codec.verify(token) {
            Ok(claims) => claims,
            Err(TokenVerifyError::Expired) => {
                return Ok(AuthOutcome::Rejected(RejectReason::Expired));
            }
            Err(TokenVerifyError::Malformed) => {
                return Ok(AuthOutcome::Rejected(RejectReason::Malformed));
            }
        };

        // Subject must be a UUID
        let Ok(subject) = Uuid::parse_str(&claims.sub) else {
            return Ok(AuthOutcome::Rejected(RejectReason::Malformed));
        };

        match self.user_repo.find_by_id(&UserId::from_uuid(subject)).await? {
            Some(user) => Ok(AuthOutcome::Authenticated(user)),
            // A token for a deleted/unknown subject is invalid, not expired
            None => Ok(AuthOutcome::Rejected(RejectReason::Malformed)),
        }
    }
}
