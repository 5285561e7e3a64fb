use axum::{
    Router,
    routing::{delete, get},
};

use super::controller::{create_wishlist, delete_wishlist, list_wishlists};
use crate::state::AppState;

pub fn init_wishlists_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlists).post(create_wishlist))
        .route("/{id}", delete(delete_wishlist))
}
