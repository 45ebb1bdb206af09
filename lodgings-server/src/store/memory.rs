//! In-memory lodging store
//!
//! Backed by a BTreeMap keyed by id so pagination iterates in id order
//! without a sort. The id counter only moves forward: deleting a record
//! never frees its id for reuse, and deleted ids simply stop resolving.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{LodgingStore, StoreError};
use crate::models::{Lodging, NewLodging};

/// In-memory store for tests and single-process deployments
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    records: BTreeMap<i64, Lodging>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // The lock is only held across synchronous map operations, never an
    // await point.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl LodgingStore for MemoryStore {
    async fn count(&self) -> Result<i64, StoreError> {
        Ok(self.lock().records.len() as i64)
    }

    async fn page(&self, offset: i64, limit: i64) -> Result<Vec<Lodging>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .records
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Lodging>, StoreError> {
        Ok(self.lock().records.get(&id).cloned())
    }

    async fn insert(&self, new: NewLodging) -> Result<i64, StoreError> {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.records.insert(id, new.into_lodging(id));
        Ok(id)
    }

    async fn replace(&self, id: i64, new: NewLodging) -> Result<bool, StoreError> {
        let mut inner = self.lock();
        if !inner.records.contains_key(&id) {
            return Ok(false);
        }
        inner.records.insert(id, new.into_lodging(id));
        Ok(true)
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.lock().records.remove(&id).is_some())
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Lodging>, StoreError> {
        let inner = self.lock();
        Ok(inner
            .records
            .values()
            .filter(|l| l.owner_id == owner_id)
            .cloned()
            .collect())
    }
}
