//! Nickname Value Object
//!
//! Display name shown alongside the user name. Unlike [`super::user_name`],
//! any script is allowed; only length and control characters are policed.

use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

/// Maximum length for nickname (in characters)
pub const NICKNAME_MAX_LENGTH: usize = 30;

/// Nickname validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NicknameError {
    #[error("Nickname cannot be empty")]
    Empty,

    #[error("Nickname must be at most {NICKNAME_MAX_LENGTH} characters")]
    TooLong,

    #[error("Nickname contains invalid control characters")]
    InvalidCharacter,
}

/// Validated nickname
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nickname(String);

impl Nickname {
    /// Normalize and validate a nickname
    pub fn new(input: impl Into<String>) -> Result<Self, NicknameError> {
        let normalized: String = input.into().nfkc().collect();
        let trimmed = normalized.trim();

        if trimmed.is_empty() {
            return Err(NicknameError::Empty);
        }
        if trimmed.chars().count() > NICKNAME_MAX_LENGTH {
            return Err(NicknameError::TooLong);
        }
        if trimmed.chars().any(char::is_control) {
            return Err(NicknameError::InvalidCharacter);
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Rebuild from a stored column without re-validation
    pub fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_nicknames() {
        assert!(Nickname::new("Mentos").is_ok());
        assert!(Nickname::new("멘토스").is_ok());
        assert!(Nickname::new("a").is_ok());
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(Nickname::new(""), Err(NicknameError::Empty));
        assert_eq!(Nickname::new("   "), Err(NicknameError::Empty));
    }

    #[test]
    fn test_too_long() {
        assert_eq!(
            Nickname::new("a".repeat(NICKNAME_MAX_LENGTH + 1)),
            Err(NicknameError::TooLong)
        );
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(
            Nickname::new("men\u{0007}tos"),
            Err(NicknameError::InvalidCharacter)
        );
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        let nickname = Nickname::new("  Mentos  ").unwrap();
        assert_eq!(nickname.as_str(), "Mentos");
    }
}
