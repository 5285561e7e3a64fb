use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use tourist_core::AppError;
use tourist_db::{Collection, Document, Filter, InsertOneResult};
use tracing::instrument;

use crate::errors::store_error;
use crate::modules::documents::{DocumentService, document_body, get_by_raw_id};
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn list_stories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    let stories = DocumentService::list(state.store.as_ref(), Collection::Stories, &Filter::all())
        .await
        .map_err(store_error)?;
    Ok(Json(stories))
}

#[instrument(skip_all, fields(id = %id))]
pub async fn get_story(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, AppError> {
    let story = get_by_raw_id(state.store.as_ref(), Collection::Stories, &id).await?;
    Ok(Json(story))
}

#[instrument(skip_all)]
pub async fn create_story(
    State(state): State<AppState>,
    body: Result<Json<Document>, JsonRejection>,
) -> Result<Json<InsertOneResult>, AppError> {
    let story = document_body(body)?;
    let result = DocumentService::insert(state.store.as_ref(), Collection::Stories, story)
        .await
        .map_err(store_error)?;
    Ok(Json(result))
}
