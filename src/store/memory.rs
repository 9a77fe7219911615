//! # In-Memory Record Store
//!
//! Keeps records in a `Vec` in insertion order. Used by tests and as a
//! drop-in double for the SQLite store.

use std::sync::RwLock;

use async_trait::async_trait;

use super::clock::MonotonicClock;
use super::errors::{StoreError, StoreResult};
use super::record::{CalculationDraft, CalculationRecord, RecordId};
use super::CalculationStore;

/// In-memory calculation store
#[derive(Debug, Default)]
pub struct InMemoryCalculationStore {
    records: RwLock<Vec<CalculationRecord>>,
    clock: MonotonicClock,
}

impl InMemoryCalculationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable {
        message: "Lock poisoned".to_string(),
    }
}

#[async_trait]
impl CalculationStore for InMemoryCalculationStore {
    async fn insert(&self, draft: CalculationDraft) -> StoreResult<CalculationRecord> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let record = CalculationRecord::create(draft, self.clock.now());
        records.push(record.clone());
        Ok(record)
    }

    async fn recent(&self, limit: usize) -> StoreResult<Vec<CalculationRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;

        // Reverse first so the stable sort keeps later inserts ahead on ties
        let mut newest: Vec<CalculationRecord> = records.iter().rev().cloned().collect();
        newest.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        newest.truncate(limit);
        Ok(newest)
    }

    async fn find(&self, id: &RecordId) -> StoreResult<Option<CalculationRecord>> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.iter().find(|r| r.id == *id).cloned())
    }

    async fn update(&self, id: &RecordId, draft: CalculationDraft) -> StoreResult<bool> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        match records.iter_mut().find(|r| r.id == *id) {
            Some(record) => {
                record.apply_update(draft, self.clock.now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &RecordId) -> StoreResult<bool> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let before = records.len();
        records.retain(|r| r.id != *id);
        Ok(records.len() != before)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.records.read().map(|_| ()).map_err(|_| poisoned())
    }
}
