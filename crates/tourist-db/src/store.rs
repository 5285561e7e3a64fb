use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::types::{Collection, DeleteResult, Document, Filter, InsertOneResult, UpdateResult};

/// Create/find/update/delete over named collections of JSON documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Stores `document` under a freshly generated id. Any client-supplied
    /// `_id` is discarded.
    async fn insert_one(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<InsertOneResult, StoreError>;

    /// All matching documents in insertion order.
    async fn find(&self, collection: Collection, filter: &Filter)
    -> Result<Vec<Document>, StoreError>;

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError>;

    /// Merges `set` into the top level of the document with `id`.
    async fn update_one(
        &self,
        collection: Collection,
        id: Uuid,
        set: Document,
    ) -> Result<UpdateResult, StoreError>;

    async fn delete_one(&self, collection: Collection, id: Uuid)
    -> Result<DeleteResult, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Releases the underlying resources. Later calls fail with
    /// [`StoreError::Closed`].
    async fn close(&self);
}
