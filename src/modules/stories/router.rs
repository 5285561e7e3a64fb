use axum::{Router, routing::get};

use super::controller::{create_story, get_story, list_stories};
use crate::state::AppState;

pub fn init_stories_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_stories).post(create_story))
        .route("/{id}", get(get_story))
}
