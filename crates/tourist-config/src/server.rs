use std::net::SocketAddr;
use std::time::Duration;

use crate::{ConfigError, env_var};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Upper bound for a whole request, store lookups included.
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env_var)
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 5000,
        };

        let request_timeout_secs: u64 = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?,
            None => 30,
        };

        Ok(Self {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}
