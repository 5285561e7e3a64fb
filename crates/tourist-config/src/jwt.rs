use crate::{ConfigError, env_var};

/// Access tokens are valid for three hours from issuance. Not configurable.
pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 3 * 60 * 60;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Loads the signing secret from `ACCESS_SECRET_TOKEN`.
    ///
    /// Rotating the secret invalidates every outstanding token at once.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env_var)
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup("ACCESS_SECRET_TOKEN")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("ACCESS_SECRET_TOKEN"))?;

        Ok(Self { secret })
    }
}

// Keep the secret out of debug output and logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}
