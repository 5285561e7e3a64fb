//! Role and ownership checks.
//!
//! Two approaches, matching how the routes use them:
//! 1. Layer-based middleware: [`require_admin`] for routes that need the
//!    caller's stored role to be `admin`
//! 2. Extractor-based: [`RequireSelf`] for routes whose path names the
//!    caller's own email

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Path, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tourist_auth::policy;
use tourist_core::AppError;
use tracing::warn;

use crate::errors::store_error;
use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Lets the request through only when the caller's stored role is `admin`.
///
/// The role is read from the store on every call, so a promotion or demotion
/// applies to tokens issued before it. A store failure is returned as 503.
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/users/admin/{id}", patch(make_admin))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();
    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;

    let role = UserService::resolve_role(state.store.as_ref(), auth_user.email())
        .await
        .map_err(store_error)?;

    policy::admin_only(role).into_result().map_err(|reason| {
        warn!(email = %auth_user.email(), reason = %reason, "admin check denied");
        AppError::forbidden()
    })?;

    parts.extensions.insert(auth_user);
    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Extractor for routes scoped to the caller's own email.
///
/// The single path parameter must equal the token's email exactly.
///
/// ```rust,ignore
/// pub async fn guide_status(
///     RequireSelf(auth_user): RequireSelf,
/// ) -> Result<Json<GuideStatus>, AppError> {
///     // Only runs for GET /users/guide/{the caller's email}
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireSelf(pub AuthUser);

impl FromRequestParts<AppState> for RequireSelf {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let Path(requested) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(anyhow!("invalid path: {}", e.body_text())))?;

        policy::self_match(auth_user.claims(), &requested)
            .into_result()
            .map_err(|reason| {
                warn!(email = %auth_user.email(), reason = %reason, "self check denied");
                AppError::forbidden()
            })?;

        Ok(RequireSelf(auth_user))
    }
}
