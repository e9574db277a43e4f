//! User Entity
//!
//! The identity record: login name, display nickname and the password hash.
//! The user name is immutable after signup; the only field this crate ever
//! mutates is `last_login_at`.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    nickname::Nickname, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier (also the token subject)
    pub user_id: UserId,
    /// User name (unique on its canonical form, immutable)
    pub user_name: UserName,
    /// Display nickname
    pub nickname: Nickname,
    /// Hashed password (Argon2id PHC string)
    pub password_hash: UserPassword,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(user_name: UserName, nickname: Nickname, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            user_name,
            nickname,
            password_hash,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn sample_user() -> User {
        let raw =
            RawPassword::new("validpass1", &platform::password::PasswordPolicy::default()).unwrap();
        User::new(
            UserName::new("JIN").unwrap(),
            Nickname::new("Mentos").unwrap(),
            UserPassword::from_raw(&raw, None).unwrap(),
        )
    }

    #[test]
    fn test_new_user_has_no_login() {
        let user = sample_user();
        assert!(user.last_login_at.is_none());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_record_login() {
        let mut user = sample_user();
        user.record_login();
        assert!(user.last_login_at.is_some());
        assert!(user.updated_at >= user.created_at);
    }
}
