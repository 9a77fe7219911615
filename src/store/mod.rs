//! # Record Store
//!
//! Adapter over the `calculations` collection. The HTTP layer only sees the
//! [`CalculationStore`] trait; the process wires in a SQLite-backed
//! implementation and tests use the in-memory one.

mod clock;
mod config;
mod errors;
mod memory;
mod record;
mod sqlite;

use async_trait::async_trait;

pub use clock::MonotonicClock;
pub use config::{StoreConfig, StoreLocation, DEFAULT_DB_NAME, MEMORY_URI};
pub use errors::{StoreError, StoreResult};
pub use memory::InMemoryCalculationStore;
pub use record::{CalculationDraft, CalculationRecord, RecordId};
pub use sqlite::SqliteCalculationStore;

/// Name of the collection holding calculation records
pub const COLLECTION: &str = "calculations";

/// Number of records returned by a history query
pub const HISTORY_LIMIT: usize = 10;

/// Create/read/update/delete over calculation records
#[async_trait]
pub trait CalculationStore: Send + Sync {
    /// Insert a new record, assigning its id and creation timestamp
    async fn insert(&self, draft: CalculationDraft) -> StoreResult<CalculationRecord>;

    /// Up to `limit` records, most recently created first
    async fn recent(&self, limit: usize) -> StoreResult<Vec<CalculationRecord>>;

    /// Look up a record by id
    async fn find(&self, id: &RecordId) -> StoreResult<Option<CalculationRecord>>;

    /// Replace a record's operation, operands and result.
    ///
    /// Returns `false` when no record matched.
    async fn update(&self, id: &RecordId, draft: CalculationDraft) -> StoreResult<bool>;

    /// Remove a record. Returns `false` when nothing was deleted.
    async fn delete(&self, id: &RecordId) -> StoreResult<bool>;

    /// Check that the store is reachable
    async fn ping(&self) -> StoreResult<()>;
}
