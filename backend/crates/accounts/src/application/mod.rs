//! Application Layer
//!
//! Use cases and application services.

pub mod authorize;
pub mod config;
pub mod sign_in;
pub mod sign_up;

// Re-exports
pub use authorize::{AuthOutcome, AuthorizeUseCase, RejectReason, bearer_token};
pub use config::AccountsConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use sign_up::{SignUpInput, SignUpOutput, SignUpUseCase};
