use serde_json::{Map, Value};
use tourist_core::Role;
use tourist_db::{
    Collection, Document, DocumentStore, Filter, InsertOneResult, StoreError, UpdateResult,
};
use tourist_models::{CreateUserDto, UserRecord};
use uuid::Uuid;

/// Result of a sign-up attempt.
#[derive(Debug)]
pub enum CreateUserOutcome {
    Created(InsertOneResult),
    AlreadyExists,
}

pub struct UserService;

impl UserService {
    pub async fn find_by_email(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Option<Document>, StoreError> {
        store
            .find_one(Collection::Users, &Filter::all().eq("email", email))
            .await
    }

    /// The stored role for `email`: one lookup, no caching.
    ///
    /// `None` when there is no such user, when the user has no role, or when
    /// the stored value is not a known role. Store failures are returned
    /// as-is so callers never mistake them for a missing role.
    pub async fn resolve_role(
        store: &dyn DocumentStore,
        email: &str,
    ) -> Result<Option<Role>, StoreError> {
        let Some(document) = Self::find_by_email(store, email).await? else {
            return Ok(None);
        };

        match UserRecord::from_document(document) {
            Ok(record) => Ok(record.role),
            Err(e) => {
                tracing::warn!(email = %email, error = %e, "stored user document is malformed");
                Ok(None)
            }
        }
    }

    pub async fn get_users(store: &dyn DocumentStore) -> Result<Vec<Document>, StoreError> {
        store.find(Collection::Users, &Filter::all()).await
    }

    /// Inserts the user unless one with the same email already exists.
    pub async fn create_user(
        store: &dyn DocumentStore,
        dto: CreateUserDto,
    ) -> Result<CreateUserOutcome, StoreError> {
        if Self::find_by_email(store, &dto.email).await?.is_some() {
            return Ok(CreateUserOutcome::AlreadyExists);
        }

        let email = dto.email.clone();
        match store.insert_one(Collection::Users, dto.into_document()).await {
            Ok(result) => {
                tracing::info!(email = %email, id = %result.inserted_id, "user created");
                Ok(CreateUserOutcome::Created(result))
            }
            // Lost a race with a concurrent sign-up for the same email.
            Err(StoreError::Conflict) => Ok(CreateUserOutcome::AlreadyExists),
            Err(e) => Err(e),
        }
    }

    /// Sets `role` on the user with `id`. Callers are responsible for having
    /// authorized the change.
    pub async fn set_role(
        store: &dyn DocumentStore,
        id: Uuid,
        role: Role,
    ) -> Result<UpdateResult, StoreError> {
        let mut set = Map::new();
        set.insert("role".to_string(), Value::String(role.as_str().to_string()));

        let result = store.update_one(Collection::Users, id, set).await?;
        tracing::info!(
            id = %id,
            role = %role,
            matched = result.matched_count,
            modified = result.modified_count,
            "user role updated"
        );
        Ok(result)
    }
}
