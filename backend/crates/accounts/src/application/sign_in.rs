//! Sign In Use Case
//!
//! Authenticates a user and issues a signed bearer token.
//!
//! Unknown user name and wrong password are indistinguishable to the
//! caller: same error variant, same response shape, and both paths cost
//! one Argon2 operation.

use std::sync::Arc;

use platform::token::TokenCodec;

use crate::application::config::AccountsConfig;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AccountsError, AccountsResult};

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed bearer token
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    codec: Arc<TokenCodec>,
    config: Arc<AccountsConfig>,
}

impl<U> SignInUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, codec: Arc<TokenCodec>, config: Arc<AccountsConfig>) -> Self {
        Self {
            user_repo,
            codec,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AccountsResult<SignInOutput> {
        // An identifier or password that could never have been accepted at
        // signup is just "wrong credentials" here
        let user_name =
            UserName::new(input.username).map_err(|_| AccountsError::InvalidCredentials)?;
        let raw_password = RawPassword::new(input.password, self.config.password_policy())
            .map_err(|_| AccountsError::InvalidCredentials)?;

        let user = self.user_repo.find_by_user_name(&user_name).await?;

        let Some(mut user) = user else {
            // Burn one hash so the unknown-user path costs the same as a
            // failed verification (no timing side channel on existence)
            let _ = UserPassword::from_raw(&raw_password, self.config.pepper());
            return Err(AccountsError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AccountsError::InvalidCredentials);
        }

        // Record last login
        user.record_login();
        self.user_repo.update(&user).await?;

        // Issue token with the user id as subject
        let token = self.codec.sign(&user.user_id.to_string())?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed in"
        );

        Ok(SignInOutput { token })
    }
}
