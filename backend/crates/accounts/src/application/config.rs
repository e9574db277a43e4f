//! Application Configuration
//!
//! Configuration for the accounts application layer. The signing secret and
//! token lifetime are process-wide inputs passed in explicitly; nothing in
//! this crate reads ambient global configuration.

use std::time::Duration;

use platform::password::PasswordPolicy;
use platform::token::TokenCodec;

/// Accounts application configuration
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Secret key for HMAC token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Password strength policy applied at signup and login
    pub password_policy: PasswordPolicy,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(3600), // 1 hour
            password_policy: PasswordPolicy::default(),
            password_pepper: None,
        }
    }
}

impl AccountsConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Build the token codec for this configuration
    pub fn token_codec(&self) -> TokenCodec {
        TokenCodec::new(&self.token_secret, self.token_ttl)
    }

    /// Password strength policy
    pub fn password_policy(&self) -> &PasswordPolicy {
        &self.password_policy
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
