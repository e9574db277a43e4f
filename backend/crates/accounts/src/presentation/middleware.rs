//! Bearer Auth Middleware
//!
//! Runs the authorize use case against every request to a protected route.
//! On success the resolved identity is attached to request extensions; on
//! rejection the request terminates with the matching 401 error code.

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::authorize::{AuthOutcome, AuthorizeUseCase};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::AccountsError;
use crate::presentation::handlers::AccountsAppState;

/// Identity attached to request extensions after a successful guard pass
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: UserId,
    pub username: String,
    pub nickname: String,
}

/// Middleware that requires a valid bearer token
///
/// Apply with `axum::middleware::from_fn_with_state`.
pub async fn require_bearer_auth<R>(
    State(state): State<AccountsAppState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AccountsError>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let guard = AuthorizeUseCase::new(state.repo.clone(), state.codec.clone());

    match guard.execute(authorization.as_deref()).await? {
        AuthOutcome::Authenticated(user) => {
            let current_user = CurrentUser {
                user_id: user.user_id,
                username: user.user_name.original().to_string(),
                nickname: user.nickname.as_str().to_string(),
            };
            req.extensions_mut().insert(current_user);
            Ok(next.run(req).await)
        }
        AuthOutcome::Rejected(reason) => {
            tracing::debug!(?reason, "Bearer auth rejected");
            Err(AccountsError::from(reason))
        }
    }
}
