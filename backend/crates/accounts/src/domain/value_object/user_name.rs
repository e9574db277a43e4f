//! User Name Value Object
//!
//! The user name is the public login identifier. Uppercase input is
//! accepted, but the canonical form is lowercase; uniqueness is enforced on
//! the canonical form. Processing order: NFKC normalization → validation →
//! lowercasing.
//!
//! ## Invariants
//! - Length: 3-30 characters (after normalization)
//! - ASCII only: a-z, A-Z, 0-9 and `_ . - +`
//! - First and last character: alphanumeric or `_`
//! - No consecutive dots (`..`)
//! - At least one alphanumeric character
//! - No whitespace

use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in user name
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

/// Reserved words that cannot be used as user names
const RESERVED_WORDS: &[&str] = &[
    "admin", "administrator", "root", "system", "superuser", "support",
    "api", "auth", "login", "logout", "signup", "signin", "register",
    "user", "users", "account", "accounts", "me", "anonymous", "null",
];

/// User name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name must be at least {USER_NAME_MIN_LENGTH} characters")]
    TooShort,

    #[error("User name must be at most {USER_NAME_MAX_LENGTH} characters")]
    TooLong,

    #[error("User name contains an invalid character: {0:?}")]
    InvalidCharacter(char),

    #[error("User name must start and end with a letter, digit or underscore")]
    InvalidBoundary,

    #[error("User name must not contain consecutive dots")]
    ConsecutiveDots,

    #[error("User name must contain at least one letter or digit")]
    NoAlphanumeric,

    #[error("User name is reserved")]
    Reserved,
}

/// Validated user name
///
/// Keeps both the form the user typed (`original`, echoed in responses) and
/// the lowercase canonical form (`canonical`, used for lookups and the
/// unique index).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Normalize and validate a user name
    pub fn new(input: impl Into<String>) -> Result<Self, UserNameError> {
        let normalized: String = input.into().nfkc().collect();

        let char_count = normalized.chars().count();
        if char_count < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort);
        }
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }

        let mut has_alphanumeric = false;
        for ch in normalized.chars() {
            if ch.is_ascii_alphanumeric() {
                has_alphanumeric = true;
            } else if !ALLOWED_SPECIAL_CHARS.contains(&ch) {
                return Err(UserNameError::InvalidCharacter(ch));
            }
        }
        if !has_alphanumeric {
            return Err(UserNameError::NoAlphanumeric);
        }

        let first = normalized.chars().next().expect("length checked above");
        let last = normalized.chars().next_back().expect("length checked above");
        for boundary in [first, last] {
            if !(boundary.is_ascii_alphanumeric() || boundary == '_') {
                return Err(UserNameError::InvalidBoundary);
            }
        }

        if normalized.contains("..") {
            return Err(UserNameError::ConsecutiveDots);
        }

        let canonical = normalized.to_ascii_lowercase();
        if RESERVED_WORDS.contains(&canonical.as_str()) {
            return Err(UserNameError::Reserved);
        }

        Ok(Self {
            original: normalized,
            canonical,
        })
    }

    /// Rebuild from stored columns without re-validation
    pub fn from_stored(original: String, canonical: String) -> Self {
        Self {
            original,
            canonical,
        }
    }

    /// The form the user typed (for display/echo)
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The lowercase canonical form (for lookups and uniqueness)
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(UserName::new("JIN").is_ok());
        assert!(UserName::new("alice_01").is_ok());
        assert!(UserName::new("first.last").is_ok());
        assert!(UserName::new("_ok_").is_ok());
    }

    #[test]
    fn test_canonical_is_lowercase_original_preserved() {
        let name = UserName::new("JIN").unwrap();
        assert_eq!(name.original(), "JIN");
        assert_eq!(name.canonical(), "jin");
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(UserName::new("ab"), Err(UserNameError::TooShort));
        assert_eq!(
            UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)),
            Err(UserNameError::TooLong)
        );
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            UserName::new("jin ho"),
            Err(UserNameError::InvalidCharacter(' '))
        );
        assert_eq!(
            UserName::new("jin@ho"),
            Err(UserNameError::InvalidCharacter('@'))
        );
        // Non-ASCII letters are not allowed after NFKC
        assert!(UserName::new("진호진").is_err());
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(UserName::new(".jin"), Err(UserNameError::InvalidBoundary));
        assert_eq!(UserName::new("jin-"), Err(UserNameError::InvalidBoundary));
        assert!(UserName::new("j-i-n").is_ok());
    }

    #[test]
    fn test_consecutive_dots() {
        assert_eq!(UserName::new("ji..n"), Err(UserNameError::ConsecutiveDots));
    }

    #[test]
    fn test_symbols_only() {
        assert_eq!(UserName::new("___"), Err(UserNameError::NoAlphanumeric));
    }

    #[test]
    fn test_reserved() {
        assert_eq!(UserName::new("admin"), Err(UserNameError::Reserved));
        // Reservation is canonical (case-insensitive)
        assert_eq!(UserName::new("Admin"), Err(UserNameError::Reserved));
    }

    #[test]
    fn test_nfkc_normalization() {
        // Fullwidth letters normalize to ASCII before validation
        let name = UserName::new("ＪＩＮ").unwrap();
        assert_eq!(name.original(), "JIN");
        assert_eq!(name.canonical(), "jin");
    }
}
