//! User Password Value Objects
//!
//! Thin domain wrappers over the platform password primitives:
//! [`RawPassword`] is a policy-validated clear text password,
//! [`UserPassword`] is the Argon2id hash stored on the user record.

use std::fmt;

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{
    ClearTextPassword, HashedPassword, PasswordHashError, PasswordPolicy, PasswordPolicyError,
};

// ============================================================================
// Raw Password (validated, not yet hashed)
// ============================================================================

/// Policy-validated clear text password
///
/// Construction runs the configured strength policy; an instance existing
/// means the password passed it. Not `Clone`, zeroized on drop (inherited
/// from the platform type), Debug-redacted.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Validate a raw password against the given strength policy
    pub fn new(
        raw: impl Into<String>,
        policy: &PasswordPolicy,
    ) -> Result<Self, PasswordPolicyError> {
        ClearTextPassword::new(raw.into(), policy).map(Self)
    }

    pub(crate) fn inner(&self) -> &ClearTextPassword {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
///
/// Stores the password in Argon2id PHC string format. Safe to store in
/// database and logs.
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Create from raw password by hashing
    ///
    /// ## Arguments
    /// * `raw` - The validated raw password
    /// * `pepper` - Optional application-wide secret
    pub fn from_raw(raw: &RawPassword, pepper: Option<&[u8]>) -> AppResult<Self> {
        let hashed = raw.inner().hash(pepper).map_err(|e| match e {
            PasswordHashError::HashingFailed(msg) => {
                AppError::internal(format!("Password hashing failed: {}", msg))
            }
            _ => AppError::internal("Unexpected error during password hashing"),
        })?;

        Ok(Self(hashed))
    }

    /// Create from PHC string (from database)
    pub fn from_phc_string(phc_string: impl Into<String>) -> AppResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| AppError::internal("Invalid password hash in database"))?;

        Ok(Self(hashed))
    }

    /// Get PHC string for database storage
    pub fn as_phc_string(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash
    ///
    /// Uses constant-time comparison to prevent timing attacks.
    ///
    /// ## Arguments
    /// * `raw` - The raw password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(raw.inner(), pepper)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

impl fmt::Display for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[HASHED_PASSWORD]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(password: &str) -> RawPassword {
        RawPassword::new(password, &PasswordPolicy::default()).expect("password should pass policy")
    }

    #[test]
    fn test_policy_runs_at_construction() {
        let policy = PasswordPolicy::default();
        assert!(RawPassword::new("validpass1", &policy).is_ok());
        for rejected in ["", "abc1234", "password123"] {
            assert!(RawPassword::new(rejected, &policy).is_err(), "{rejected:?}");
        }
    }

    #[test]
    fn test_verify_distinguishes_passwords() {
        let hashed = UserPassword::from_raw(&raw("TestPassword123!"), None).unwrap();
        assert!(hashed.verify(&raw("TestPassword123!"), None));
        assert!(!hashed.verify(&raw("WrongPassword123!"), None));
    }

    #[test]
    fn test_pepper_is_part_of_the_secret() {
        let hashed = UserPassword::from_raw(&raw("TestPassword123!"), Some(b"pepper")).unwrap();
        assert!(hashed.verify(&raw("TestPassword123!"), Some(b"pepper")));
        for wrong in [None, Some(b"other!" as &[u8])] {
            assert!(!hashed.verify(&raw("TestPassword123!"), wrong));
        }
    }

    #[test]
    fn test_survives_storage_roundtrip() {
        let hashed = UserPassword::from_raw(&raw("TestPassword123!"), None).unwrap();
        let reloaded = UserPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(reloaded.verify(&raw("TestPassword123!"), None));
        assert_eq!(hashed, reloaded);
    }

    #[test]
    fn test_nothing_secret_in_debug_or_display() {
        let secret = raw("SecretValue123!");
        assert!(!format!("{secret:?}").contains("SecretValue"));

        let hashed = UserPassword::from_raw(&secret, None).unwrap();
        assert!(!format!("{hashed:?}").contains("argon2id"));
        assert_eq!(hashed.to_string(), "[HASHED_PASSWORD]");
    }
}
