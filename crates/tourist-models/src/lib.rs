//! # Tourist Models
//!
//! Request and response DTOs for the Tourist Guide API.
//!
//! # Modules
//!
//! - [`auth`]: Token issuance request/response
//! - [`users`]: User records, sign-up payload and role status responses
//! - [`collections`]: Query parameters shared by the free-form collections
//! - [`common`]: Generic message bodies

pub mod auth;
pub mod collections;
pub mod common;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{TokenRequest, TokenResponse};
pub use collections::EmailQuery;
pub use common::MessageResponse;
pub use users::{AdminStatus, CreateUserDto, GuideStatus, UserExistsResponse, UserRecord};
