//! Lodging storage - trait and backends
//!
//! Both backends satisfy the same contract: ids are assigned once on
//! insert and never reused, `page` orders by id ascending, and replace
//! or delete of an absent id reports `false` rather than an error.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{Lodging, NewLodging};

pub use memory::MemoryStore;
pub use postgres::{create_pool, create_pool_with_options, PgStore};

/// Storage failure surfaced by a backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage contract for lodging records
#[async_trait]
pub trait LodgingStore: Send + Sync {
    /// Number of live records.
    async fn count(&self) -> Result<i64, StoreError>;

    /// Records ordered by id ascending, at most `limit`, skipping `offset`.
    async fn page(&self, offset: i64, limit: i64) -> Result<Vec<Lodging>, StoreError>;

    /// Fetch one record.
    async fn get(&self, id: i64) -> Result<Option<Lodging>, StoreError>;

    /// Persist a draft, returning the assigned id.
    async fn insert(&self, new: NewLodging) -> Result<i64, StoreError>;

    /// Full replace; `false` when no record exists at `id`.
    async fn replace(&self, id: i64, new: NewLodging) -> Result<bool, StoreError>;

    /// Remove a record; `false` when no record exists at `id`.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;

    /// All records owned by `owner_id`, in no particular order.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Lodging>, StoreError>;
}
