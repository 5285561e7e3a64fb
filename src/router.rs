use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware, routing::get};
use tourist_observability::logging_middleware;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::modules::auth::init_auth_router;
use crate::modules::bookings::init_bookings_router;
use crate::modules::packages::init_packages_router;
use crate::modules::stories::init_stories_router;
use crate::modules::users::init_users_router;
use crate::modules::wishlists::init_wishlists_router;
use crate::state::AppState;

async fn root() -> &'static str {
    "Tourist guide is running"
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Builds the application router.
///
/// Layers run outside-in: request logging, CORS, then the request timeout.
/// Authentication and role checks are attached per route in the module
/// routers.
pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(root))
        .merge(init_auth_router())
        .nest("/users", init_users_router(state.clone()))
        .nest("/packages", init_packages_router())
        .nest("/stories", init_stories_router())
        .nest("/bookings", init_bookings_router())
        .nest("/wishlists", init_wishlists_router())
        .with_state(state.clone())
        .layer(TimeoutLayer::new(state.server_config.request_timeout))
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
}
