//! # Calculation Record Routes
//!
//! History query plus direct CRUD on calculation records. These endpoints
//! never recompute anything; payloads are stored as given.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::store::{CalculationDraft, CalculationRecord, RecordId, HISTORY_LIMIT};

use super::errors::{ApiError, ApiResult, StoreAction};
use super::response::{InsertResponse, MessageResponse};
use super::state::SharedState;

/// Create calculation record routes
pub fn calculation_routes() -> Router<SharedState> {
    Router::new()
        .route("/history", get(history_handler))
        .route("/calculations", post(create_handler))
        .route(
            "/calculations/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
}

fn payload(body: Result<Json<CalculationDraft>, JsonRejection>) -> ApiResult<CalculationDraft> {
    body.map(|Json(draft)| draft)
        .map_err(|rejection| ApiError::InvalidPayload(rejection.body_text()))
}

/// Most recent calculations, newest first
async fn history_handler(
    State(state): State<SharedState>,
) -> ApiResult<Json<Vec<CalculationRecord>>> {
    let history = state
        .store
        .recent(HISTORY_LIMIT)
        .await
        .map_err(ApiError::store(StoreAction::FetchHistory))?;
    Ok(Json(history))
}

async fn create_handler(
    State(state): State<SharedState>,
    body: Result<Json<CalculationDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<InsertResponse>)> {
    let draft = payload(body)?;
    let record = state
        .store
        .insert(draft)
        .await
        .map_err(ApiError::store(StoreAction::Create))?;

    tracing::info!(id = %record.id, operation = %record.operation, "calculation created");
    Ok((StatusCode::CREATED, Json(InsertResponse::acknowledged(record.id))))
}

async fn get_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CalculationRecord>> {
    let id = RecordId::parse(&id).map_err(ApiError::store(StoreAction::Fetch))?;
    state
        .store
        .find(&id)
        .await
        .map_err(ApiError::store(StoreAction::Fetch))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn update_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    body: Result<Json<CalculationDraft>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let draft = payload(body)?;
    let id = RecordId::parse(&id).map_err(ApiError::store(StoreAction::Update))?;
    let matched = state
        .store
        .update(&id, draft)
        .await
        .map_err(ApiError::store(StoreAction::Update))?;
    if !matched {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id = %id, "calculation updated");
    Ok(Json(MessageResponse::new("Calculation updated successfully")))
}

async fn delete_handler(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = RecordId::parse(&id).map_err(ApiError::store(StoreAction::Delete))?;
    let deleted = state
        .store
        .delete(&id)
        .await
        .map_err(ApiError::store(StoreAction::Delete))?;
    if !deleted {
        return Err(ApiError::NotFound);
    }

    tracing::info!(id = %id, "calculation deleted");
    Ok(Json(MessageResponse::new("Calculation deleted successfully")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::rest_api::AppState;
    use crate::store::{CalculationStore, InMemoryCalculationStore};
    use crate::test_utils::FailingStore;

    fn app(store: Arc<dyn CalculationStore>) -> Router {
        calculation_routes().with_state(Arc::new(AppState::new(store)))
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_create_returns_insert_metadata() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let body = json!({"operation": "add", "num1": 1, "num2": 2, "result": 3});
        let (status, json) = send(app(store.clone()), "POST", "/calculations", Some(body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["acknowledged"], true);
        let id = RecordId::parse(json["insertedId"].as_str().unwrap()).unwrap();
        assert!(store.find(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_accepts_inconsistent_result() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let body = json!({"operation": "add", "num1": 1, "num2": 2, "result": 42});
        let (status, _) = send(app(store.clone()), "POST", "/calculations", Some(body)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(store.recent(1).await.unwrap()[0].result, 42.0);
    }

    #[tokio::test]
    async fn test_create_rejects_garbage_body() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let body = json!({"operation": "sum", "num1": 1});
        let (status, json) = send(app(store.clone()), "POST", "/calculations", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid calculation payload");
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_create_accepts_numeric_strings() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let body = json!({"operation": "add", "num1": "1", "num2": "2", "result": "3"});
        let (status, json) = send(app(store.clone()), "POST", "/calculations", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = format!("/calculations/{}", json["insertedId"].as_str().unwrap());
        let (status, record) = send(app(store), "GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(record["num1"], 1.0);
        assert_eq!(record["num2"], 2.0);
        assert_eq!(record["result"], 3.0);
    }

    #[tokio::test]
    async fn test_create_rejects_non_numeric_string() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let body = json!({"operation": "add", "num1": "one", "num2": 2, "result": 3});
        let (status, _) = send(app(store.clone()), "POST", "/calculations", Some(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_get_malformed_id_is_generic_500() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let (status, json) = send(app(store), "GET", "/calculations/not-an-id", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to fetch calculation");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_404() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let uri = format!("/calculations/{}", RecordId::generate());
        let (status, json) = send(app(store), "GET", &uri, None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Calculation not found");
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id_are_404() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let uri = format!("/calculations/{}", RecordId::generate());
        let body = json!({"operation": "add", "num1": 1, "num2": 2, "result": 3});

        let (status, _) = send(app(store.clone()), "PUT", &uri, Some(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(app(store), "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_history_store_failure_is_generic_500() {
        let (status, json) = send(app(Arc::new(FailingStore)), "GET", "/history", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to fetch history");
    }

    #[tokio::test]
    async fn test_history_empty_store() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let (status, json) = send(app(store), "GET", "/history", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!([]));
    }
}
