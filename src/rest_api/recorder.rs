//! # History Recorder
//!
//! Best-effort persistence for the arithmetic endpoints. The insert is
//! awaited, but its outcome never changes the response. Failures are logged
//! and, when a channel is attached, published so tests and operators can
//! observe them.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::store::{CalculationDraft, CalculationRecord, CalculationStore, StoreError, COLLECTION};

/// A calculation that could not be written to history
#[derive(Debug, Clone)]
pub struct RecordFailure {
    pub draft: CalculationDraft,
    pub error: StoreError,
}

/// Sender half of the failure channel
pub type FailureSender = mpsc::UnboundedSender<RecordFailure>;

/// Receiver half of the failure channel
pub type FailureReceiver = mpsc::UnboundedReceiver<RecordFailure>;

/// Appends calculation records on behalf of the arithmetic endpoints
#[derive(Clone)]
pub struct HistoryRecorder {
    store: Arc<dyn CalculationStore>,
    failures: Option<FailureSender>,
}

impl HistoryRecorder {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self {
            store,
            failures: None,
        }
    }

    /// Recorder that also publishes every failed write
    pub fn with_failure_channel(store: Arc<dyn CalculationStore>) -> (Self, FailureReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let recorder = Self {
            store,
            failures: Some(tx),
        };
        (recorder, rx)
    }

    /// Write `draft` to history. Returns the stored record, or `None` if
    /// the write failed.
    pub async fn record(&self, draft: CalculationDraft) -> Option<CalculationRecord> {
        match self.store.insert(draft).await {
            Ok(record) => {
                tracing::debug!(
                    id = %record.id,
                    operation = %record.operation,
                    "calculation recorded"
                );
                Some(record)
            }
            Err(error) => {
                tracing::error!(
                    collection = COLLECTION,
                    operation = %draft.operation,
                    error = %error,
                    "Error logging calculation"
                );
                if let Some(tx) = &self.failures {
                    // Receiver may be gone; nothing else to do then.
                    let _ = tx.send(RecordFailure { draft, error });
                }
                None
            }
        }
    }
}
