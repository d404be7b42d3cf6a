use std::collections::HashMap;
use std::sync::RwLock;

use seal_types::{OrderId, OrderRecord};

use crate::error::{StoreError, StoreResult};
use crate::traits::OrderStore;

/// In-memory, HashMap-based order store.
///
/// Intended for tests and embedding. Records are held behind a `RwLock`
/// for safe concurrent access and cloned on read.
pub struct InMemoryOrderStore {
    records: RwLock<HashMap<OrderId, OrderRecord>>,
}

impl InMemoryOrderStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn upsert(&self, record: &OrderRecord) -> StoreResult<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Backend("store write lock poisoned".into()))?;
        records.insert(record.order_id.clone(), record.clone());
        Ok(())
    }

    fn get(&self, order_id: &OrderId) -> StoreResult<Option<OrderRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("store read lock poisoned".into()))?;
        Ok(records.get(order_id).cloned())
    }

    fn all(&self) -> StoreResult<Vec<OrderRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("store read lock poisoned".into()))?;
        let mut all: Vec<OrderRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    fn count(&self) -> StoreResult<u64> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("store read lock poisoned".into()))?;
        Ok(records.len() as u64)
    }
}
