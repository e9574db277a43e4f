//! API DTOs (Data Transfer Objects)
//!
//! Fields default to empty strings on deserialization so that a missing
//! field and a blank field produce the same MISSING_CREDENTIALS error,
//! not a framework deserialization rejection.

use serde::{Deserialize, Serialize};

use crate::error::{AccountsError, AccountsResult};

/// Client message when signup fields are missing
pub const SIGNUP_MISSING_CREDENTIALS: &str = "아이디, 비밀번호, 닉네임을 모두 입력해주세요.";

/// Client message when login fields are missing
pub const LOGIN_MISSING_CREDENTIALS: &str = "아이디와 비밀번호를 모두 입력해주세요.";

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub nickname: String,
}

impl SignupRequest {
    /// All three fields are required
    pub fn validate(&self) -> AccountsResult<()> {
        if self.username.trim().is_empty()
            || self.password.trim().is_empty()
            || self.nickname.trim().is_empty()
        {
            return Err(AccountsError::MissingCredentials(SIGNUP_MISSING_CREDENTIALS));
        }
        Ok(())
    }
}

/// Sign up response (the password hash is never echoed)
#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub username: String,
    pub nickname: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// Both fields are required
    pub fn validate(&self) -> AccountsResult<()> {
        if self.username.trim().is_empty() || self.password.trim().is_empty() {
            return Err(AccountsError::MissingCredentials(LOGIN_MISSING_CREDENTIALS));
        }
        Ok(())
    }
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Protected endpoint
// ============================================================================

/// Plain message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_missing_fields() {
        let req: SignupRequest = serde_json::from_str(r#"{"username": "JIN"}"#).unwrap();
        assert!(matches!(
            req.validate(),
            Err(AccountsError::MissingCredentials(_))
        ));

        let req: SignupRequest =
            serde_json::from_str(r#"{"username": "JIN", "password": "  ", "nickname": "Mentos"}"#)
                .unwrap();
        assert!(matches!(
            req.validate(),
            Err(AccountsError::MissingCredentials(_))
        ));
    }

    #[test]
    fn test_signup_request_complete() {
        let req: SignupRequest = serde_json::from_str(
            r#"{"username": "JIN", "password": "validpass1", "nickname": "Mentos"}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_request_missing_fields() {
        let req: LoginRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            req.validate(),
            Err(AccountsError::MissingCredentials(_))
        ));
    }

    #[test]
    fn test_response_field_names() {
        let body = serde_json::to_value(SignupResponse {
            username: "JIN".into(),
            nickname: "Mentos".into(),
        })
        .unwrap();
        assert_eq!(body["username"], "JIN");
        assert_eq!(body["nickname"], "Mentos");

        let body = serde_json::to_value(TokenResponse {
            token: "opaque".into(),
        })
        .unwrap();
        assert_eq!(body["token"], "opaque");
    }
}
