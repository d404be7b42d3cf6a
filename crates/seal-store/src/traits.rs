use seal_types::{OrderId, OrderRecord};

use crate::error::StoreResult;

/// Off-chain order store.
///
/// All implementations must satisfy these invariants:
/// - One record per order identifier; `upsert` replaces an existing record
///   (which is how the `Pending` → `Confirmed` transition is persisted).
/// - Reads never mutate stored state.
/// - A missing record is `Ok(None)`, not an error.
/// - All backend failures are propagated, never silently ignored.
pub trait OrderStore: Send + Sync {
    /// Insert or replace the record for its order identifier.
    fn upsert(&self, record: &OrderRecord) -> StoreResult<()>;

    /// Read the record for an order identifier.
    fn get(&self, order_id: &OrderId) -> StoreResult<Option<OrderRecord>>;

    /// All records, newest first.
    fn all(&self) -> StoreResult<Vec<OrderRecord>>;

    /// Number of stored records.
    fn count(&self) -> StoreResult<u64>;
}
