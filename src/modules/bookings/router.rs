use axum::{
    Router,
    routing::{delete, get},
};

use super::controller::{create_booking, delete_booking, list_bookings};
use crate::state::AppState;

pub fn init_bookings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route("/{id}", delete(delete_booking))
}
