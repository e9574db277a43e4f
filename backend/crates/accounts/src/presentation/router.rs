//! Accounts Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAccountRepository;
use crate::presentation::handlers::{self, AccountsAppState};
use crate::presentation::middleware::require_bearer_auth;

/// Create the accounts router with the PostgreSQL repository
pub fn accounts_router(repo: PgAccountRepository, config: AccountsConfig) -> Router {
    accounts_router_generic(repo, config)
}

/// Create an accounts router for any repository implementation
pub fn accounts_router_generic<R>(repo: R, config: AccountsConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AccountsAppState {
        repo: Arc::new(repo),
        codec: Arc::new(config.token_codec()),
        config: Arc::new(config),
    };

    // Trailing slashes are part of the public API surface
    let protected = Router::new()
        .route("/auth-test/", get(handlers::auth_test))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer_auth::<R>,
        ));

    Router::new()
        .route("/signup/", post(handlers::sign_up::<R>))
        .route("/login/", post(handlers::sign_in::<R>))
        .merge(protected)
        .with_state(state)
}
