use axum::{Router, routing::get};

use super::controller::{get_package, list_packages, packages_by_tour_type};
use crate::state::AppState;

pub fn init_packages_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_packages))
        .route("/{id}", get(get_package))
        .route("/tour_type/{tour_type}", get(packages_by_tour_type))
}
