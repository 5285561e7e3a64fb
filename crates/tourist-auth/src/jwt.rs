//! JWT (JSON Web Token) utilities for authentication.
//!
//! Access tokens are HS256-signed with the shared secret from [`JwtConfig`]
//! and live for [`ACCESS_TOKEN_TTL_SECONDS`] (three hours). There is no
//! refresh flow and no revocation: expiry is the only way a token dies.
//!
//! # Example
//!
//! ```ignore
//! use tourist_auth::{create_access_token, verify_token};
//! use tourist_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = create_access_token("user@example.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email, "user@example.com");
//! ```

use anyhow::Context;
use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use tourist_config::{ACCESS_TOKEN_TTL_SECONDS, JwtConfig};
use tourist_core::AppError;

use crate::claims::Claims;

const ALGORITHM: Algorithm = Algorithm::HS256;

/// Why a presented token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VerificationError {
    #[error("token signature does not match")]
    InvalidSignature,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
}

impl From<jsonwebtoken::errors::Error> for VerificationError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => VerificationError::InvalidSignature,
            ErrorKind::ExpiredSignature => VerificationError::Expired,
            _ => VerificationError::Malformed,
        }
    }
}

/// Creates an access token for `email`, valid for three hours from now.
///
/// # Errors
///
/// Returns an internal error if encoding fails, which only happens for
/// an unusable signing key.
pub fn create_access_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    create_access_token_at(email, Utc::now(), jwt_config)
}

/// Creates an access token as if it had been issued at `issued_at`.
pub fn create_access_token_at(
    email: &str,
    issued_at: DateTime<Utc>,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let iat = issued_at.timestamp();

    let claims = Claims {
        email: email.to_string(),
        iat,
        exp: iat + ACCESS_TOKEN_TTL_SECONDS,
    };

    encode(
        &Header::new(ALGORITHM),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .context("Failed to create token")
    .map_err(AppError::internal)
}

/// Verifies an access token against the current clock.
///
/// # Errors
///
/// - [`VerificationError::InvalidSignature`] if it was signed with another secret
/// - [`VerificationError::Expired`] once `now >= exp`
/// - [`VerificationError::Malformed`] for anything that is not a well-formed HS256 token
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, VerificationError> {
    decode_token_at(token, jwt_config, Utc::now().timestamp())
}

/// Verifies an access token as of the Unix instant `now`.
///
/// The signature is checked by `jsonwebtoken`; expiry is checked here with
/// no leeway so that the window is exactly three hours.
pub fn decode_token_at(
    token: &str,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<Claims, VerificationError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp"]);

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )?
    .claims;

    if claims.is_expired_at(now) {
        return Err(VerificationError::Expired);
    }

    Ok(claims)
}
