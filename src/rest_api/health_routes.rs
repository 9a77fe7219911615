//! Health check route.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::response::HealthResponse;
use super::state::SharedState;

pub fn health_routes() -> Router<SharedState> {
    Router::new().route("/health", get(health_handler))
}

async fn health_handler(State(state): State<SharedState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse { status: "ok" })),
        Err(e) => {
            tracing::warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable",
                }),
            )
        }
    }
}
