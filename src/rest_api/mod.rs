//! # Calculator REST API
//!
//! HTTP endpoints for arithmetic, calculation history and record CRUD.
//!
//! # Endpoints
//!
//! - `GET /{add,subtract,multiply,divide,power,modulo}?num1=&num2=`
//! - `GET /sqrt?num=`
//! - `GET /history`
//! - `POST /calculations`, `GET|PUT|DELETE /calculations/:id`
//! - `GET /health`

mod arithmetic_routes;
mod calculation_routes;
mod errors;
mod health_routes;
mod recorder;
mod response;
mod state;

use axum::Router;

pub use arithmetic_routes::arithmetic_routes;
pub use calculation_routes::calculation_routes;
pub use errors::{ApiError, ApiResult, ErrorResponse, StoreAction};
pub use health_routes::health_routes;
pub use recorder::{FailureReceiver, FailureSender, HistoryRecorder, RecordFailure};
pub use response::{HealthResponse, InsertResponse, MessageResponse, ResultResponse};
pub use state::{AppState, SharedState};

/// Build the full API router
pub fn router(state: SharedState) -> Router {
    Router::new()
        .merge(arithmetic_routes())
        .merge(calculation_routes())
        .merge(health_routes())
        .with_state(state)
}
