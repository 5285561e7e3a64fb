use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tourist_auth::{Claims, verify_token};
use tourist_config::JwtConfig;
use tourist_core::AppError;
use tracing::warn;

use crate::state::AppState;

/// Extracts the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively. A missing header, another
/// scheme, or an empty token is rejected as unauthenticated.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        warn!("missing authorization header");
        return Err(AppError::unauthorized());
    };

    let token = value
        .to_str()
        .ok()
        .and_then(|raw| raw.trim().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty());

    token.ok_or_else(|| {
        warn!("malformed authorization header");
        AppError::unauthorized()
    })
}

/// Runs the bearer extractor and token verifier over request headers.
pub fn authenticate(headers: &HeaderMap, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let token = bearer_token(headers)?;
    verify_token(token, jwt_config).map_err(|e| {
        warn!(reason = %e, "token verification failed");
        AppError::unauthorized()
    })
}

/// The verified principal of the current request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Already verified by require_auth.
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        let claims = authenticate(&parts.headers, &state.jwt_config)?;
        Ok(AuthUser(claims))
    }
}

/// Rejects the request with 401 unless it carries a valid bearer token.
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/users", get(get_users))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));
/// ```
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate(req.headers(), &state.jwt_config)?;
    req.extensions_mut().insert(AuthUser(claims));
    Ok(next.run(req).await)
}
