//! Repository Traits
//!
//! Interface for identity persistence. Implementation is in the
//! infrastructure layer; tests provide an in-memory implementation.

use crate::domain::entity::user::User;
use crate::domain::value_object::{user_id::UserId, user_name::UserName};
use crate::error::AccountsResult;

/// User repository trait
///
/// The store's unique index on the canonical user name is the authority
/// for duplicates: `create` must fail with `UserAlreadyExists` when a
/// concurrent insert wins the race, regardless of an earlier
/// `exists_by_user_name` check.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AccountsResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>>;

    /// Find user by user name (canonical match)
    async fn find_by_user_name(&self, user_name: &UserName) -> AccountsResult<Option<User>>;

    /// Check if user name exists (canonical match)
    async fn exists_by_user_name(&self, user_name: &UserName) -> AccountsResult<bool>;

    /// Update user
    async fn update(&self, user: &User) -> AccountsResult<()>;
}
