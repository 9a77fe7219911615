//! Shared handler state.

use std::sync::Arc;

use crate::store::CalculationStore;

use super::recorder::HistoryRecorder;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CalculationStore>,
    pub recorder: HistoryRecorder,
}

impl AppState {
    /// State whose recorder writes to the same store the CRUD endpoints use
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        let recorder = HistoryRecorder::new(store.clone());
        Self { store, recorder }
    }

    pub fn with_recorder(store: Arc<dyn CalculationStore>, recorder: HistoryRecorder) -> Self {
        Self { store, recorder }
    }
}

/// Shared state type
pub type SharedState = Arc<AppState>;
