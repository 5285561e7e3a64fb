//! # Tourist Auth
//!
//! Authentication types, the token codec, and authorization policies for the
//! Tourist Guide API.
//!
//! This crate provides:
//!
//! - [`claims`]: The identity embedded in an access token
//! - [`jwt`]: Token creation and verification
//! - [`policy`]: Pure allow/deny predicates applied per endpoint
//!
//! Nothing in here performs I/O. Resolving a user's current role from the
//! store happens in the HTTP layer, which then feeds the result to
//! [`policy::admin_only`] or [`policy::role_membership`].
//!
//! # Example
//!
//! ```ignore
//! use tourist_auth::{create_access_token, verify_token, policy};
//! use tourist_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_access_token("alice@example.com", &config)?;
//!
//! let claims = verify_token(&token, &config)?;
//! policy::self_match(&claims, "alice@example.com").into_result()?;
//! ```

pub mod claims;
pub mod jwt;
pub mod policy;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{
    VerificationError, create_access_token, create_access_token_at, decode_token_at,
    verify_token,
};
pub use policy::{Decision, DenyReason};
