//! Signed Bearer Token Codec
//!
//! Stateless HMAC-SHA256 signed JWTs. The codec is the single authority for
//! token validity: signature check + expiry comparison at verification time,
//! no server-side token state.
//!
//! Verification failures are reported as an enumerated reason
//! ([`TokenVerifyError`]), never as free text. Callers branch on the variant;
//! "expired" and "malformed" must stay distinguishable all the way to the
//! client.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by an issued token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user id as string)
    pub sub: String,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
}

/// Token signing errors
#[derive(Debug, Error)]
pub enum TokenSignError {
    #[error("token signing failed: {0}")]
    SigningFailed(String),
}

/// Token verification failure, as a structured reason
///
/// `Expired` means the signature was otherwise acceptable but the `exp`
/// claim is in the past. Everything else (bad structure, bad signature,
/// missing claims) is `Malformed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenVerifyError {
    #[error("token expired")]
    Expired,
    #[error("token malformed")]
    Malformed,
}

/// HMAC-SHA256 JWT codec
///
/// Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: std::time::Duration,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenCodec {
    /// Create a codec from a server-side secret and a fixed token TTL.
    pub fn new(secret: &[u8], ttl: std::time::Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // An `exp` strictly in the past counts as expired; no grace window.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Configured token lifetime.
    pub fn ttl(&self) -> std::time::Duration {
        self.ttl
    }

    /// Sign a token for `subject` expiring one TTL from now.
    pub fn sign(&self, subject: &str) -> Result<String, TokenSignError> {
        let expires_at = Utc::now()
            + Duration::from_std(self.ttl)
                .map_err(|e| TokenSignError::SigningFailed(e.to_string()))?;
        self.sign_with_expiry(subject, expires_at)
    }

    /// Sign a token for `subject` with an explicit expiry instant.
    pub fn sign_with_expiry(
        &self,
        subject: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<String, TokenSignError> {
        let claims = TokenClaims {
            sub: subject.to_string(),
            exp: expires_at.timestamp(),
            iat: Utc::now().timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenSignError::SigningFailed(e.to_string()))
    }

    /// Verify a token and return its claims.
    ///
    /// Signature, structure and `exp` are all checked here; the failure
    /// reason is the enum variant, never message text.
    pub fn verify(&self, token: &str) -> Result<TokenClaims, TokenVerifyError> {
        jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => TokenVerifyError::Expired,
                _ => TokenVerifyError::Malformed,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-test-secret-test-sec";
    const TTL: std::time::Duration = std::time::Duration::from_secs(3600);

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET, TTL)
    }

    #[test]
    fn test_sign_and_verify_roundtrip() {
        let codec = codec();
        let token = codec.sign("user-1").unwrap();

        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expiry_is_one_ttl_from_now() {
        let codec = codec();
        let before = Utc::now().timestamp();
        let token = codec.sign("user-1").unwrap();
        let after = Utc::now().timestamp();

        let claims = codec.verify(&token).unwrap();
        assert!(claims.exp >= before + TTL.as_secs() as i64);
        assert!(claims.exp <= after + TTL.as_secs() as i64);
    }

    #[test]
    fn test_garbage_is_malformed() {
        let codec = codec();
        assert_eq!(codec.verify("garbage"), Err(TokenVerifyError::Malformed));
        assert_eq!(codec.verify(""), Err(TokenVerifyError::Malformed));
        assert_eq!(
            codec.verify("aaaa.bbbb.cccc"),
            Err(TokenVerifyError::Malformed)
        );
    }

    #[test]
    fn test_tampered_token_is_malformed() {
        let codec = codec();
        let token = codec.sign("user-1").unwrap();

        // Flip a character in the signature segment
        let mut tampered = token.clone();
        let last = tampered.pop().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });

        assert_eq!(codec.verify(&tampered), Err(TokenVerifyError::Malformed));
    }

    #[test]
    fn test_wrong_secret_is_malformed() {
        let token = codec().sign("user-1").unwrap();
        let other = TokenCodec::new(b"another-secret-another-secret-an", TTL);
        assert_eq!(other.verify(&token), Err(TokenVerifyError::Malformed));
    }

    #[test]
    fn test_past_expiry_is_expired_not_malformed() {
        let codec = codec();
        let token = codec
            .sign_with_expiry("user-1", Utc::now() - Duration::seconds(10))
            .unwrap();

        // Signature is valid, only the expiry is in the past: the reason
        // must be Expired, never collapsed into Malformed.
        assert_eq!(codec.verify(&token), Err(TokenVerifyError::Expired));
    }

    #[test]
    fn test_verification_is_deterministic() {
        let codec = codec();
        let token = codec.sign("user-1").unwrap();

        let first = codec.verify(&token).unwrap();
        let second = codec.verify(&token).unwrap();
        assert_eq!(first.sub, second.sub);
        assert_eq!(first.exp, second.exp);
    }
}
