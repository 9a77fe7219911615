//! Test doubles shared by unit tests.
//!
//! Only compiled for tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::store::{
    CalculationDraft, CalculationRecord, CalculationStore, RecordId, StoreError, StoreResult,
};

/// Store whose every operation fails as if the database were unreachable
pub struct FailingStore;

fn unreachable_store() -> StoreError {
    StoreError::Unavailable {
        message: "connection refused".to_string(),
    }
}

#[async_trait]
impl CalculationStore for FailingStore {
    async fn insert(&self, _draft: CalculationDraft) -> StoreResult<CalculationRecord> {
        Err(unreachable_store())
    }

    async fn recent(&self, _limit: usize) -> StoreResult<Vec<CalculationRecord>> {
        Err(unreachable_store())
    }

    async fn find(&self, _id: &RecordId) -> StoreResult<Option<CalculationRecord>> {
        Err(unreachable_store())
    }

    async fn update(&self, _id: &RecordId, _draft: CalculationDraft) -> StoreResult<bool> {
        Err(unreachable_store())
    }

    async fn delete(&self, _id: &RecordId) -> StoreResult<bool> {
        Err(unreachable_store())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(unreachable_store())
    }
}
