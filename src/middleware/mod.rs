//! Middleware and extractors for authentication and authorization.
//!
//! # Modules
//!
//! - [`auth`]: Bearer token extraction, the [`auth::AuthUser`] extractor and
//!   the [`auth::require_auth`] middleware
//! - [`role`]: Role and ownership checks ([`role::require_admin`],
//!   [`role::RequireSelf`])
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `require_auth` verifies the token and stores `AuthUser` in the request
//!    extensions
//! 3. Route-specific checks run: `require_admin` looks up the caller's stored
//!    role, `RequireSelf` compares the path email with the token email
//! 4. Handler executes if all checks pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::role::RequireSelf;
//!
//! async fn admin_status(
//!     State(state): State<AppState>,
//!     RequireSelf(auth_user): RequireSelf,
//! ) -> Result<Json<AdminStatus>, AppError> {
//!     // Only executes when the path email is the caller's own
//! }
//! ```

pub mod auth;
pub mod role;
