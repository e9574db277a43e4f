//! HTTP Handlers

use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use platform::token::TokenCodec;

use crate::application::config::AccountsConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::UserRepository;
use crate::error::AccountsResult;
use crate::presentation::dto::{
    LoginRequest, MessageResponse, SignupRequest, SignupResponse, TokenResponse,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for accounts handlers
#[derive(Clone)]
pub struct AccountsAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub codec: Arc<TokenCodec>,
    pub config: Arc<AccountsConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /signup/
pub async fn sign_up<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<SignupRequest>,
) -> AccountsResult<(StatusCode, Json<SignupResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    req.validate()?;

    let use_case = SignUpUseCase::new(state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        username: req.username,
        password: req.password,
        nickname: req.nickname,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            username: output.username,
            nickname: output.nickname,
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login/
pub async fn sign_in<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountsResult<Json<TokenResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    req.validate()?;

    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.codec.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TokenResponse {
        token: output.token,
    }))
}

// ============================================================================
// Protected endpoint
// ============================================================================

/// GET /auth-test/
///
/// Reachable only through the bearer-auth middleware, which guarantees the
/// `CurrentUser` extension is present.
pub async fn auth_test(
    Extension(current_user): Extension<CurrentUser>,
) -> Json<MessageResponse> {
    tracing::debug!(user_id = %current_user.user_id, "Auth test passed");

    Json(MessageResponse {
        message: "인증 성공".to_string(),
    })
}
