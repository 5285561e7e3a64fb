//! In-process [`DocumentStore`] backed by a `tokio` read-write lock.
//!
//! Mirrors the PostgreSQL backend's observable behaviour, including the
//! unique email constraint on the users collection.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::DocumentStore;
use crate::types::{
    Collection, DeleteResult, Document, Filter, ID_FIELD, InsertOneResult, UpdateResult, with_id,
};

#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<Collection, Vec<(Uuid, Document)>>>,
    writes: AtomicU64,
    closed: AtomicBool,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful insert/update/delete calls so far.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> Result<(), StoreError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(StoreError::Closed);
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

fn email_taken(rows: &[(Uuid, Document)], email: &Value, except: Option<Uuid>) -> bool {
    rows.iter()
        .any(|(id, body)| Some(*id) != except && body.get("email") == Some(email))
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert_one(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        self.ensure_open()?;
        document.remove(ID_FIELD);

        let mut collections = self.collections.write().await;
        let rows = collections.entry(collection).or_default();

        if collection == Collection::Users {
            if let Some(email) = document.get("email") {
                if email_taken(rows, email, None) {
                    return Err(StoreError::Conflict);
                }
            }
        }

        let id = Uuid::new_v4();
        rows.push((id, document));
        self.record_write();

        Ok(InsertOneResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        self.ensure_open()?;
        let collections = self.collections.read().await;

        Ok(collections
            .get(&collection)
            .map(|rows| {
                rows.iter()
                    .filter(|(id, body)| filter.matches(*id, body))
                    .map(|(id, body)| with_id(*id, body.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        self.ensure_open()?;
        let collections = self.collections.read().await;

        Ok(collections.get(&collection).and_then(|rows| {
            rows.iter()
                .find(|(id, body)| filter.matches(*id, body))
                .map(|(id, body)| with_id(*id, body.clone()))
        }))
    }

    async fn update_one(
        &self,
        collection: Collection,
        id: Uuid,
        mut set: Document,
    ) -> Result<UpdateResult, StoreError> {
        self.ensure_open()?;
        set.remove(ID_FIELD);

        let mut collections = self.collections.write().await;
        let rows = collections.entry(collection).or_default();

        if collection == Collection::Users {
            if let Some(email) = set.get("email") {
                if email_taken(rows, email, Some(id)) {
                    return Err(StoreError::Conflict);
                }
            }
        }

        let Some((_, body)) = rows.iter_mut().find(|(row_id, _)| *row_id == id) else {
            return Ok(UpdateResult {
                acknowledged: true,
                matched_count: 0,
                modified_count: 0,
            });
        };

        let mut modified = false;
        for (field, value) in set {
            if body.get(&field) != Some(&value) {
                body.insert(field, value);
                modified = true;
            }
        }
        self.record_write();

        Ok(UpdateResult {
            acknowledged: true,
            matched_count: 1,
            modified_count: u64::from(modified),
        })
    }

    async fn delete_one(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<DeleteResult, StoreError> {
        self.ensure_open()?;
        let mut collections = self.collections.write().await;
        let rows = collections.entry(collection).or_default();

        let before = rows.len();
        rows.retain(|(row_id, _)| *row_id != id);
        let deleted_count = (before - rows.len()) as u64;
        if deleted_count > 0 {
            self.record_write();
        }

        Ok(DeleteResult {
            acknowledged: true,
            deleted_count,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = MemoryDocumentStore::new();
        let inserted = store
            .insert_one(Collection::Packages, doc(json!({"tour_type": "hiking"})))
            .await
            .unwrap();

        let found = store
            .find_one(Collection::Packages, &Filter::by_id(inserted.inserted_id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found["tour_type"], "hiking");
        assert_eq!(found[ID_FIELD], inserted.inserted_id.to_string());
    }

    #[tokio::test]
    async fn test_client_supplied_id_is_ignored() {
        let store = MemoryDocumentStore::new();
        let inserted = store
            .insert_one(Collection::Stories, doc(json!({"_id": "mine", "title": "t"})))
            .await
            .unwrap();

        let all = store.find(Collection::Stories, &Filter::all()).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0][ID_FIELD], inserted.inserted_id.to_string());
    }

    #[tokio::test]
    async fn test_find_preserves_insertion_order_and_filters() {
        let store = MemoryDocumentStore::new();
        for email in ["a@x.com", "b@x.com", "a@x.com"] {
            store
                .insert_one(Collection::Bookings, doc(json!({"email": email})))
                .await
                .unwrap();
        }

        let all = store.find(Collection::Bookings, &Filter::all()).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[1]["email"], "b@x.com");

        let only_a = store
            .find(Collection::Bookings, &Filter::all().eq("email", "a@x.com"))
            .await
            .unwrap();
        assert_eq!(only_a.len(), 2);
    }

    #[tokio::test]
    async fn test_update_reports_matched_and_modified() {
        let store = MemoryDocumentStore::new();
        let id = store
            .insert_one(Collection::Users, doc(json!({"email": "a@x.com"})))
            .await
            .unwrap()
            .inserted_id;

        let set = doc(json!({"role": "admin"}));
        let first = store
            .update_one(Collection::Users, id, set.clone())
            .await
            .unwrap();
        assert_eq!((first.matched_count, first.modified_count), (1, 1));

        let second = store.update_one(Collection::Users, id, set).await.unwrap();
        assert_eq!((second.matched_count, second.modified_count), (1, 0));

        let missing = store
            .update_one(Collection::Users, Uuid::new_v4(), doc(json!({"role": "admin"})))
            .await
            .unwrap();
        assert_eq!(missing.matched_count, 0);
    }

    #[tokio::test]
    async fn test_delete_one() {
        let store = MemoryDocumentStore::new();
        let id = store
            .insert_one(Collection::Wishlists, doc(json!({"email": "a@x.com"})))
            .await
            .unwrap()
            .inserted_id;

        let deleted = store.delete_one(Collection::Wishlists, id).await.unwrap();
        assert_eq!(deleted.deleted_count, 1);
        let again = store.delete_one(Collection::Wishlists, id).await.unwrap();
        assert_eq!(again.deleted_count, 0);
    }

    #[tokio::test]
    async fn test_duplicate_user_email_conflicts() {
        let store = MemoryDocumentStore::new();
        store
            .insert_one(Collection::Users, doc(json!({"email": "a@x.com"})))
            .await
            .unwrap();
        let result = store
            .insert_one(Collection::Users, doc(json!({"email": "a@x.com"})))
            .await;
        assert!(matches!(result, Err(StoreError::Conflict)));

        // Other collections may repeat emails freely.
        for _ in 0..2 {
            store
                .insert_one(Collection::Bookings, doc(json!({"email": "a@x.com"})))
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_write_count() {
        let store = MemoryDocumentStore::new();
        assert_eq!(store.write_count(), 0);
        store
            .insert_one(Collection::Stories, doc(json!({})))
            .await
            .unwrap();
        store.find(Collection::Stories, &Filter::all()).await.unwrap();
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_closed_store_rejects_calls() {
        let store = MemoryDocumentStore::new();
        store.close().await;
        assert!(matches!(store.ping().await, Err(StoreError::Closed)));
        assert!(matches!(
            store.find(Collection::Users, &Filter::all()).await,
            Err(StoreError::Closed)
        ));
    }
}
