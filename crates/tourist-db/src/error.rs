use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error")]
    Database(#[source] sqlx::Error),
    #[error("migration failed")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("document conflicts with an existing one")]
    Conflict,
    #[error("store is closed")]
    Closed,
}

impl StoreError {
    /// Whether the store could not be reached or used at all.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, StoreError::Conflict)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        if matches!(&e, sqlx::Error::Database(dbe) if dbe.is_unique_violation()) {
            return StoreError::Conflict;
        }
        if matches!(e, sqlx::Error::PoolClosed) {
            return StoreError::Closed;
        }
        StoreError::Database(e)
    }
}
