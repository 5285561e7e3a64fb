use axum::{
    Json,
    extract::{Path, State},
};
use tourist_core::AppError;
use tourist_db::{Collection, Document, Filter};
use tracing::instrument;

use crate::errors::store_error;
use crate::modules::documents::{DocumentService, get_by_raw_id};
use crate::state::AppState;

#[instrument(skip_all)]
pub async fn list_packages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    let packages = DocumentService::list(state.store.as_ref(), Collection::Packages, &Filter::all())
        .await
        .map_err(store_error)?;
    Ok(Json(packages))
}

#[instrument(skip_all, fields(id = %id))]
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Document>>, AppError> {
    let package = get_by_raw_id(state.store.as_ref(), Collection::Packages, &id).await?;
    Ok(Json(package))
}

#[instrument(skip_all, fields(tour_type = %tour_type))]
pub async fn packages_by_tour_type(
    State(state): State<AppState>,
    Path(tour_type): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let filter = Filter::all().eq("tour_type", tour_type);
    let packages = DocumentService::list(state.store.as_ref(), Collection::Packages, &filter)
        .await
        .map_err(store_error)?;
    Ok(Json(packages))
}
