//! # Tourist DB
//!
//! Document store abstraction for the Tourist Guide API.
//!
//! Every collection (users, packages, stories, bookings, wishlists) is a set
//! of schemaless JSON documents addressed by a UUID `_id`. Two backends
//! implement [`DocumentStore`]:
//!
//! - [`PgDocumentStore`]: PostgreSQL, one JSONB table, migrations embedded
//! - [`MemoryDocumentStore`]: in-process, used for tests and local runs
//!
//! The store handle is created once at startup, shared through the
//! application state as an `Arc<dyn DocumentStore>`, and released with
//! [`DocumentStore::close`] at shutdown.
//!
//! # Example
//!
//! ```ignore
//! use tourist_db::{Collection, DocumentStore, Filter, PgDocumentStore};
//!
//! let store = PgDocumentStore::connect(&database_url, 5).await?;
//! let user = store
//!     .find_one(Collection::Users, &Filter::all().eq("email", "alice@x.com"))
//!     .await?;
//! store.close().await;
//! ```

pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;
pub mod types;

// Re-export commonly used types at crate root
pub use error::StoreError;
pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use store::DocumentStore;
pub use types::{
    Collection, DeleteResult, Document, Filter, ID_FIELD, InsertOneResult, UpdateResult,
};
