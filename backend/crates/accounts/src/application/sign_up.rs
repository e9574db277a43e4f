//! Sign Up Use Case
//!
//! Creates a new user account.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    nickname::Nickname,
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AccountsError, AccountsResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub password: String,
    pub nickname: String,
}

/// Sign up output (the password hash is never echoed)
#[derive(Debug)]
pub struct SignUpOutput {
    pub username: String,
    pub nickname: String,
}

/// Sign up use case
pub struct SignUpUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AccountsConfig>,
}

impl<U> SignUpUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AccountsConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> AccountsResult<SignUpOutput> {
        // Validate user name and nickname
        let user_name = UserName::new(input.username)
            .map_err(|e| AccountsError::Validation(e.to_string()))?;
        let nickname =
            Nickname::new(input.nickname).map_err(|e| AccountsError::Validation(e.to_string()))?;

        // Check if user name is taken. The unique index on the canonical
        // name remains the authority; `create` below reports a racing
        // duplicate the same way.
        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AccountsError::UserAlreadyExists);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password, self.config.password_policy())
            .map_err(|e| AccountsError::PasswordValidation(e.to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AccountsError::Internal(e.to_string()))?;

        // Create and persist
        let user = User::new(user_name, nickname, password_hash);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User signed up"
        );

        Ok(SignUpOutput {
            username: user.user_name.original().to_string(),
            nickname: user.nickname.as_str().to_string(),
        })
    }
}
