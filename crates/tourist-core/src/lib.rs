//! # Tourist Core
//!
//! Core types, errors, and utilities for the Tourist Guide API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`roles`]: The per-user [`Role`] classification
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use tourist_core::{AppError, Role};
//!
//! let error = AppError::forbidden();
//! let role: Role = "admin".parse()?;
//! ```

pub mod errors;
pub mod roles;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{AppError, FORBIDDEN_MESSAGE, UNAUTHORIZED_MESSAGE};
pub use roles::{Role, UnknownRole};
