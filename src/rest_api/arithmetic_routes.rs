//! # Arithmetic Routes
//!
//! `GET /<operation>?num1=..&num2=..` (or `?num=..` for sqrt). Operands are
//! validated before anything is written to history.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::calc::{self, Operation};

use super::errors::ApiResult;
use super::response::ResultResponse;
use super::state::SharedState;

/// Query parameter names for an operation's operands
fn operand_names(operation: Operation) -> (&'static str, Option<&'static str>) {
    if operation.is_unary() {
        ("num", None)
    } else {
        ("num1", Some("num2"))
    }
}

/// One `GET /<tag>` route per operation
pub fn arithmetic_routes() -> Router<SharedState> {
    Operation::ALL
        .into_iter()
        .fold(Router::new(), |router, operation| {
            router.route(
                &format!("/{operation}"),
                get(
                    move |State(state): State<SharedState>,
                          Query(params): Query<HashMap<String, String>>| {
                        calculate(state, operation, params)
                    },
                ),
            )
        })
}

async fn calculate(
    state: SharedState,
    operation: Operation,
    params: HashMap<String, String>,
) -> ApiResult<Json<ResultResponse>> {
    let (first, second) = operand_names(operation);
    let evaluation = calc::evaluate(
        operation,
        params.get(first).map(String::as_str),
        second.and_then(|name| params.get(name)).map(String::as_str),
    )?;

    // Failures are logged and published by the recorder.
    state.recorder.record(evaluation.into()).await;

    Ok(Json(ResultResponse::new(evaluation.result)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::rest_api::{AppState, HistoryRecorder};
    use crate::store::{CalculationStore, InMemoryCalculationStore};
    use crate::test_utils::FailingStore;

    fn app(store: Arc<dyn CalculationStore>) -> Router {
        arithmetic_routes().with_state(Arc::new(AppState::new(store)))
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_add_returns_result_and_records() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let (status, json) = get_json(app(store.clone()), "/add?num1=2&num2=3").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 5.0);
        assert_eq!(store.len().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_sqrt_uses_num_parameter() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let (status, json) = get_json(app(store.clone()), "/sqrt?num=4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 2.0);

        let recorded = store.recent(1).await.unwrap();
        assert_eq!(recorded[0].num2, 0.0);
    }

    #[tokio::test]
    async fn test_missing_operand_is_rejected_without_write() {
        let store = Arc::new(InMemoryCalculationStore::new());
        let (status, json) = get_json(app(store.clone()), "/multiply?num1=2").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Please press the number you want to multiply");
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_store_failure_does_not_change_response() {
        let store: Arc<dyn CalculationStore> = Arc::new(FailingStore);
        let (recorder, mut failures) = HistoryRecorder::with_failure_channel(store.clone());
        let app = arithmetic_routes()
            .with_state(Arc::new(AppState::with_recorder(store, recorder)));

        let (status, json) = get_json(app, "/subtract?num1=10&num2=4").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"], 6.0);
        assert_eq!(failures.try_recv().unwrap().draft.result, 6.0);
    }
}
