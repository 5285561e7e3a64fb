use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
};
use tourist_core::AppError;
use tourist_db::{Collection, DeleteResult, Document, Filter, InsertOneResult};
use tourist_models::EmailQuery;
use tracing::instrument;

use crate::errors::store_error;
use crate::modules::documents::{DocumentService, delete_by_raw_id, document_body};
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn create_wishlist(
    State(state): State<AppState>,
    body: Result<Json<Document>, JsonRejection>,
) -> Result<Json<InsertOneResult>, AppError> {
    let wishlist = document_body(body)?;
    let result = DocumentService::insert(state.store.as_ref(), Collection::Wishlists, wishlist)
        .await
        .map_err(store_error)?;
    Ok(Json(result))
}

/// Lists every entry, or only the ones whose `email` matches `?email=`.
#[instrument(skip_all, fields(email = ?query.email()))]
pub async fn list_wishlists(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<Vec<Document>>, AppError> {
    let filter = match query.email() {
        Some(email) => Filter::all().eq("email", email),
        None => Filter::all(),
    };
    let wishlists = DocumentService::list(state.store.as_ref(), Collection::Wishlists, &filter)
        .await
        .map_err(store_error)?;
    Ok(Json(wishlists))
}

#[instrument(skip_all, fields(id = %id))]
pub async fn delete_wishlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let result = delete_by_raw_id(state.store.as_ref(), Collection::Wishlists, &id).await?;
    Ok(Json(result))
}
