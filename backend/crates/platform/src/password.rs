//! Password Hashing and Verification
//!
//! Argon2id-backed password handling. Validation follows NIST SP 800-63B:
//! length bounds on Unicode code points, NFKC normalization before any
//! processing, and no composition rules. Clear text passwords are zeroized
//! on drop and never printed.

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Policy
// ============================================================================

/// Configurable password strength policy
///
/// The defaults are the NIST SP 800-63B bounds (at least 8, at most 128
/// code points) plus rejection of predictable passwords. Deployments that
/// need different bounds construct their own instance and pass it wherever
/// raw passwords enter the system.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    /// Minimum length in Unicode code points
    pub min_length: usize,
    /// Maximum length in Unicode code points
    pub max_length: usize,
    /// Reject keyboard walks, digit runs and breach-list staples
    pub forbid_predictable: bool,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,   // NIST: SHALL be at least 8
            max_length: 128, // NIST: SHOULD permit at least 64
            forbid_predictable: true,
        }
    }
}

/// Password policy violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    #[error("Password contains invalid control characters")]
    InvalidCharacter,

    #[error("Password is too common or follows a predictable pattern")]
    CommonPattern,
}

impl PasswordPolicy {
    /// Validate an NFKC-normalized candidate against this policy
    fn check(&self, candidate: &str) -> Result<(), PasswordPolicyError> {
        if candidate.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        // Count code points, not bytes
        let length = candidate.chars().count();
        if length < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                min: self.min_length,
                actual: length,
            });
        }
        if length > self.max_length {
            return Err(PasswordPolicyError::TooLong {
                max: self.max_length,
                actual: length,
            });
        }

        if candidate
            .chars()
            .any(|ch| ch.is_control() && !matches!(ch, ' ' | '\t' | '\n'))
        {
            return Err(PasswordPolicyError::InvalidCharacter);
        }

        if self.forbid_predictable && is_predictable(candidate) {
            return Err(PasswordPolicyError::CommonPattern);
        }

        Ok(())
    }
}

/// Keyboard walks frequently seen in credential dumps
const KEYBOARD_WALKS: &[&str] = &[
    "qwerty", "qwertyuiop", "asdfgh", "asdfghjkl", "zxcvbn", "qazwsx", "1qaz2wsx",
];

/// Passwords that top every breach corpus
const BREACH_STAPLES: &[&str] = &[
    "password", "password1", "password123", "12345678", "123456789", "1234567890",
    "abcdefgh", "letmein", "welcome", "admin123", "iloveyou", "sunshine", "princess",
    "football", "monkey", "shadow", "master", "dragon", "baseball", "trustno1",
];

fn is_predictable(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();

    // Single repeated character
    let mut chars = lower.chars();
    if let Some(first) = chars.next()
        && chars.all(|c| c == first)
    {
        return true;
    }

    if is_digit_run(&lower) {
        return true;
    }

    if KEYBOARD_WALKS.iter().any(|walk| lower.contains(walk)) {
        return true;
    }

    BREACH_STAPLES.contains(&lower.as_str())
}

/// An all-digit string that counts up or down (wrapping 9->0 / 0->9)
fn is_digit_run(s: &str) -> bool {
    let digits: Vec<u32> = s.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() < 4 || digits.len() != s.chars().count() {
        return false;
    }

    let ascending = digits
        .windows(2)
        .all(|w| w[1] == w[0] + 1 || (w[0] == 9 && w[1] == 0));
    let descending = digits
        .windows(2)
        .all(|w| w[0] == w[1] + 1 || (w[0] == 0 && w[1] == 9));

    ascending || descending
}

// ============================================================================
// Hashing errors
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear text password
// ============================================================================

/// A policy-checked clear text password
///
/// The backing memory is zeroized when the value drops. The type is not
/// `Clone`, so a password exists in at most one place, and its Debug
/// output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// NFKC-normalize `raw` and validate it against `policy`
    pub fn new(raw: String, policy: &PasswordPolicy) -> Result<Self, PasswordPolicyError> {
        let normalized: String = raw.nfkc().collect();
        policy.check(&normalized)?;
        Ok(Self(normalized))
    }

    /// Skip validation (tests only)
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with Argon2id, appending `pepper` (if any) to the password
    /// bytes before hashing.
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let material = peppered(self.as_bytes(), pepper);
        let salt = SaltString::generate(OsRng);

        let phc = Argon2::default()
            .hash_password(&material, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?
            .to_string();

        Ok(HashedPassword { phc })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed password
// ============================================================================

/// An Argon2id hash in PHC string format, safe to persist and log
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    phc: String,
}

impl HashedPassword {
    /// Wrap a PHC string loaded from storage, verifying its shape
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let phc = s.into();
        PasswordHash::new(&phc).map_err(|_| PasswordHashError::InvalidHashFormat)?;
        Ok(Self { phc })
    }

    /// The PHC string for storage
    pub fn as_phc_string(&self) -> &str {
        &self.phc
    }

    /// Check `password` (with the same pepper used at hash time) against
    /// this hash. Argon2 compares in constant time.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let material = peppered(password.as_bytes(), pepper);

        let Ok(parsed) = PasswordHash::new(&self.phc) else {
            return false;
        };

        Argon2::default().verify_password(&material, &parsed).is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("phc", &"[HASH]")
            .finish()
    }
}

fn peppered(password: &[u8], pepper: Option<&[u8]>) -> Vec<u8> {
    let mut material = password.to_vec();
    if let Some(p) = pepper {
        material.extend_from_slice(p);
    }
    material
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> PasswordPolicy {
        PasswordPolicy::default()
    }

    #[test]
    fn test_length_bounds() {
        let err = ClearTextPassword::new("short".into(), &policy()).unwrap_err();
        assert!(matches!(err, PasswordPolicyError::TooShort { min: 8, .. }));

        let err = ClearTextPassword::new("a1".repeat(100), &policy()).unwrap_err();
        assert!(matches!(err, PasswordPolicyError::TooLong { max: 128, .. }));
    }

    #[test]
    fn test_empty_and_whitespace() {
        for raw in ["", "        "] {
            assert_eq!(
                ClearTextPassword::new(raw.into(), &policy()).unwrap_err(),
                PasswordPolicyError::EmptyOrWhitespace
            );
        }
    }

    #[test]
    fn test_predictable_passwords_rejected() {
        for raw in ["password123", "qwertyuiop", "12345678", "98765432", "aaaaaaaa"] {
            assert_eq!(
                ClearTextPassword::new(raw.into(), &policy()).unwrap_err(),
                PasswordPolicyError::CommonPattern,
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_acceptable_passwords() {
        for raw in ["validpass1", "MySecure#Pass2024!", "correct horse battery"] {
            assert!(
                ClearTextPassword::new(raw.into(), &policy()).is_ok(),
                "{raw:?} should pass"
            );
        }
    }

    #[test]
    fn test_unicode_counted_in_code_points() {
        // Hangul syllables: enough code points even though every one is multi-byte
        assert!(ClearTextPassword::new("싸움은결국하나만남아".into(), &policy()).is_ok());
    }

    #[test]
    fn test_policy_is_configurable() {
        let lax = PasswordPolicy {
            min_length: 4,
            forbid_predictable: false,
            ..PasswordPolicy::default()
        };
        assert!(ClearTextPassword::new("12345678".into(), &lax).is_ok());
        assert!(ClearTextPassword::new("abcd".into(), &lax).is_ok());
    }

    #[test]
    fn test_hash_then_verify() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".into());
        let hashed = password.hash(None).unwrap();

        assert!(hashed.verify(&password, None));

        let wrong = ClearTextPassword::new_unchecked("WrongPassword123!".into());
        assert!(!hashed.verify(&wrong, None));
    }

    #[test]
    fn test_pepper_must_match() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".into());
        let hashed = password.hash(Some(b"app_pepper")).unwrap();

        assert!(hashed.verify(&password, Some(b"app_pepper")));
        assert!(!hashed.verify(&password, None));
        assert!(!hashed.verify(&password, Some(b"other_pepper")));
    }

    #[test]
    fn test_phc_roundtrip_through_storage() {
        let password = ClearTextPassword::new_unchecked("TestPassword123!".into());
        let stored = password.hash(None).unwrap().as_phc_string().to_string();

        let reloaded = HashedPassword::from_phc_string(stored).unwrap();
        assert!(reloaded.verify(&password, None));
    }

    #[test]
    fn test_invalid_phc_rejected() {
        assert!(HashedPassword::from_phc_string("not a phc string").is_err());
    }

    #[test]
    fn test_debug_never_prints_secrets() {
        let password = ClearTextPassword::new_unchecked("SecretValue123!".into());
        let rendered = format!("{password:?}");
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("SecretValue"));

        let hashed = password.hash(None).unwrap();
        let rendered = format!("{hashed:?}");
        assert!(!rendered.contains("argon2id"));
    }
}
