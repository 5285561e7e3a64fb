//! PostgreSQL [`DocumentStore`]: one `documents` table with a JSONB body.
//!
//! Equality filters translate to JSONB containment (`body @> $filter`), which
//! the GIN index on `body` serves.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::StoreError;
use crate::store::DocumentStore;
use crate::types::{
    Collection, DeleteResult, Document, Filter, ID_FIELD, InsertOneResult, UpdateResult, with_id,
};

#[derive(Clone, Debug)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// Connects, then applies the embedded migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!(max_connections, "document store connected");

        Ok(Self::from_pool(pool))
    }

    /// Wraps an existing pool. Migrations are the caller's concern.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

type Row = (Uuid, Json<Document>);

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(
        &self,
        collection: Collection,
        mut document: Document,
    ) -> Result<InsertOneResult, StoreError> {
        document.remove(ID_FIELD);
        let id = Uuid::new_v4();

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(id)
        .bind(collection.as_str())
        .bind(Json(&document))
        .execute(&self.pool)
        .await?;

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
        let rows = sqlx::query_as::<_, Row>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1
              AND ($2::uuid IS NULL OR id = $2)
              AND body @> $3
            ORDER BY seq
            "#,
        )
        .bind(collection.as_str())
        .bind(filter.id)
        .bind(Json(&filter.fields))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(body))| with_id(id, body))
            .collect())
    }

    async fn find_one(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let row = sqlx::query_as::<_, Row>(
            r#"
            SELECT id, body
            FROM documents
            WHERE collection = $1
              AND ($2::uuid IS NULL OR id = $2)
              AND body @> $3
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(collection.as_str())
        .bind(filter.id)
        .bind(Json(&filter.fields))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|(id, Json(body))| with_id(id, body)))
    }

    async fn update_one(
        &self,
        collection: Collection,
        id: Uuid,
        mut set: Document,
    ) -> Result<UpdateResult, StoreError> {
        set.remove(ID_FIELD);

        // A match whose merged body equals the current one is not a modification.
        let (matched, modified) = sqlx::query_as::<_, (i64, i64)>(
            r#"
            WITH target AS (
                SELECT id, body
                FROM documents
                WHERE collection = $1 AND id = $2
                FOR UPDATE
            ),
            changed AS (
                UPDATE documents d
                SET body = d.body || $3, updated_at = now()
                FROM target t
                WHERE d.id = t.id AND (t.body || $3) <> t.body
                RETURNING d.id
            )
            SELECT
                (SELECT count(*) FROM target) AS matched,
                (SELECT count(*) FROM changed) AS modified
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .bind(Json(&set))
        .fetch_one(&self.pool)
        .await?;

        Ok(UpdateResult {
            acknowledged: true,
            matched_count: matched as u64,
            modified_count: modified as u64,
        })
    }

    async fn delete_one(
        &self,
        collection: Collection,
        id: Uuid,
    ) -> Result<DeleteResult, StoreError> {
        let result = sqlx::query(
            r#"
            DELETE FROM documents
            WHERE collection = $1 AND id = $2
            "#,
        )
        .bind(collection.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(DeleteResult {
            acknowledged: true,
            deleted_count: result.rows_affected(),
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("document store closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_insert_then_find_in_insertion_order(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        let first = store
            .insert_one(Collection::Packages, doc(json!({"title": "Sundarbans"})))
            .await
            .unwrap();
        let second = store
            .insert_one(Collection::Packages, doc(json!({"title": "Sylhet"})))
            .await
            .unwrap();
        store
            .insert_one(Collection::Stories, doc(json!({"title": "Elsewhere"})))
            .await
            .unwrap();

        let found = store
            .find(Collection::Packages, &Filter::all())
            .await
            .unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0][ID_FIELD], first.inserted_id.to_string());
        assert_eq!(found[0]["title"], "Sundarbans");
        assert_eq!(found[1][ID_FIELD], second.inserted_id.to_string());

        let one = store
            .find_one(Collection::Packages, &Filter::by_id(second.inserted_id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(one["title"], "Sylhet");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_client_id_is_replaced(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        let inserted = store
            .insert_one(Collection::Stories, doc(json!({"_id": "mine", "title": "T"})))
            .await
            .unwrap();

        let found = store
            .find(Collection::Stories, &Filter::all())
            .await
            .unwrap();
        assert_eq!(found[0][ID_FIELD], inserted.inserted_id.to_string());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_by_email(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        store
            .insert_one(Collection::Bookings, doc(json!({"email": "a@x.com", "n": 1})))
            .await
            .unwrap();
        store
            .insert_one(Collection::Bookings, doc(json!({"email": "b@x.com", "n": 2})))
            .await
            .unwrap();
        store
            .insert_one(Collection::Bookings, doc(json!({"email": "a@x.com", "n": 3})))
            .await
            .unwrap();

        let filter = Filter::all().eq("email", "a@x.com");
        let found = store.find(Collection::Bookings, &filter).await.unwrap();
        let ns: Vec<_> = found.iter().map(|d| d["n"].clone()).collect();
        assert_eq!(ns, vec![json!(1), json!(3)]);

        let missing = Filter::all().eq("email", "nobody@x.com");
        assert!(
            store
                .find_one(Collection::Bookings, &missing)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_counts(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        let inserted = store
            .insert_one(Collection::Users, doc(json!({"email": "a@x.com"})))
            .await
            .unwrap();
        let id = inserted.inserted_id;

        let result = store
            .update_one(Collection::Users, id, doc(json!({"role": "guide"})))
            .await
            .unwrap();
        assert_eq!((result.matched_count, result.modified_count), (1, 1));

        let result = store
            .update_one(Collection::Users, id, doc(json!({"role": "guide"})))
            .await
            .unwrap();
        assert_eq!((result.matched_count, result.modified_count), (1, 0));

        let result = store
            .update_one(Collection::Users, Uuid::new_v4(), doc(json!({"role": "guide"})))
            .await
            .unwrap();
        assert_eq!((result.matched_count, result.modified_count), (0, 0));

        // Other fields survive the merge.
        let user = store
            .find_one(Collection::Users, &Filter::by_id(id))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user["email"], "a@x.com");
        assert_eq!(user["role"], "guide");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_duplicate_user_email_conflicts(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        store
            .insert_one(Collection::Users, doc(json!({"email": "a@x.com"})))
            .await
            .unwrap();

        let result = store
            .insert_one(Collection::Users, doc(json!({"email": "a@x.com"})))
            .await;
        assert!(matches!(result, Err(StoreError::Conflict)));

        // Only users are unique by email.
        store
            .insert_one(Collection::Bookings, doc(json!({"email": "a@x.com"})))
            .await
            .unwrap();
        store
            .insert_one(Collection::Bookings, doc(json!({"email": "a@x.com"})))
            .await
            .unwrap();
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_one(pool: PgPool) {
        let store = PgDocumentStore::from_pool(pool);
        let inserted = store
            .insert_one(Collection::Wishlists, doc(json!({"packageId": "p1"})))
            .await
            .unwrap();

        let result = store
            .delete_one(Collection::Wishlists, inserted.inserted_id)
            .await
            .unwrap();
        assert_eq!(result.deleted_count, 1);

        let result = store
            .delete_one(Collection::Wishlists, inserted.inserted_id)
            .await
            .unwrap();
        assert_eq!(result.deleted_count, 0);
        assert!(
            store
                .find(Collection::Wishlists, &Filter::all())
                .await
                .unwrap()
                .is_empty()
        );
    }
}
