//! Shared operations over the free-form collections.
//!
//! Packages, stories, bookings and wishlists store whatever JSON object the
//! client sends. Their handlers only differ in which collection they touch
//! and which filters they accept.

use anyhow::anyhow;
use axum::{Json, extract::rejection::JsonRejection};
use tourist_core::AppError;
use tourist_db::{
    Collection, DeleteResult, Document, DocumentStore, Filter, InsertOneResult, StoreError,
};
use uuid::Uuid;

use crate::errors::store_error;

/// Path ids are the store's UUIDs; anything else is a 400.
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::bad_request(anyhow!("invalid id: {}", raw)))
}

/// Unwraps a JSON object body, reporting rejections in the API's error shape.
pub fn document_body(body: Result<Json<Document>, JsonRejection>) -> Result<Document, AppError> {
    body.map(|Json(document)| document).map_err(|rejection| {
        if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
            AppError::bad_request(anyhow!("Missing 'Content-Type: application/json' header"))
        } else {
            AppError::bad_request(anyhow!("request body must be a JSON object"))
        }
    })
}

pub struct DocumentService;

impl DocumentService {
    pub async fn list(
        store: &dyn DocumentStore,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        store.find(collection, filter).await
    }

    pub async fn find_by_id(
        store: &dyn DocumentStore,
        collection: Collection,
        id: Uuid,
    ) -> Result<Option<Document>, StoreError> {
        store.find_one(collection, &Filter::by_id(id)).await
    }

    pub async fn insert(
        store: &dyn DocumentStore,
        collection: Collection,
        document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        let result = store.insert_one(collection, document).await?;
        tracing::debug!(
            collection = collection.as_str(),
            id = %result.inserted_id,
            "document inserted"
        );
        Ok(result)
    }

    pub async fn delete(
        store: &dyn DocumentStore,
        collection: Collection,
        id: Uuid,
    ) -> Result<DeleteResult, StoreError> {
        store.delete_one(collection, id).await
    }
}

/// `GET /{collection}/{id}`: the document, or `null`.
pub async fn get_by_raw_id(
    store: &dyn DocumentStore,
    collection: Collection,
    raw_id: &str,
) -> Result<Option<Document>, AppError> {
    let id = parse_id(raw_id)?;
    DocumentService::find_by_id(store, collection, id)
        .await
        .map_err(store_error)
}

/// `DELETE /{collection}/{id}`.
pub async fn delete_by_raw_id(
    store: &dyn DocumentStore,
    collection: Collection,
    raw_id: &str,
) -> Result<DeleteResult, AppError> {
    let id = parse_id(raw_id)?;
    DocumentService::delete(store, collection, id)
        .await
        .map_err(store_error)
}
