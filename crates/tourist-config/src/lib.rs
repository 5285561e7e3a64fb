//! # Tourist Config
//!
//! Configuration types for the Tourist Guide API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: Token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: Document store connection settings
//! - [`server`]: Listener and request timeout settings
//!
//! Every config exposes `from_env()` and a `from_vars()` twin that takes a
//! lookup function, so tests never touch the process environment.
//!
//! # Example
//!
//! ```ignore
//! use tourist_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! let server_config = ServerConfig::from_env()?;
//! ```

pub mod cors;
pub mod database;
pub mod error;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use jwt::{ACCESS_TOKEN_TTL_SECONDS, JwtConfig};
pub use server::ServerConfig;

/// Reads a variable from the process environment.
pub(crate) fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
