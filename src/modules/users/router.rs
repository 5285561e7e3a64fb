use axum::{
    Router, middleware,
    routing::{get, patch, post},
};

use super::controller::{
    admin_status, create_user, get_users, guide_status, make_admin, make_guide,
};
use crate::middleware::auth::require_auth;
use crate::middleware::role::require_admin;
use crate::state::AppState;

/// `GET /admin/{email}` and `PATCH /admin/{id}` share one path pattern, so
/// guards are attached per method rather than per route.
pub fn init_users_router(state: AppState) -> Router<AppState> {
    let authenticated = || middleware::from_fn_with_state(state.clone(), require_auth);
    let admin = middleware::from_fn_with_state(state.clone(), require_admin);

    Router::new()
        .route(
            "/",
            post(create_user).merge(get(get_users).route_layer(authenticated())),
        )
        .route(
            "/admin/{key}",
            get(admin_status)
                .route_layer(authenticated())
                .merge(patch(make_admin).route_layer(admin).route_layer(authenticated())),
        )
        .route(
            "/guide/{key}",
            get(guide_status)
                .patch(make_guide)
                .route_layer(authenticated()),
        )
}
