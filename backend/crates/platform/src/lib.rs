//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, NIST SP 800-63B compliant)
//! - Signed bearer-token codec (HMAC-SHA256 JWT)

pub mod password;
pub mod token;
