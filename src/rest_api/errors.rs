//! # REST API Errors
//!
//! Error types for the HTTP surface. Store failures are reported with a
//! fixed message per endpoint; the underlying cause only goes to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::calc::CalcError;
use crate::store::{StoreError, COLLECTION};

/// Result type for REST handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Store operation a handler was attempting when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    FetchHistory,
    Create,
    Fetch,
    Update,
    Delete,
}

impl StoreAction {
    /// Message shown to the client
    pub fn failure_message(&self) -> &'static str {
        match self {
            StoreAction::FetchHistory => "Failed to fetch history",
            StoreAction::Create => "Failed to create calculation record",
            StoreAction::Fetch => "Failed to fetch calculation",
            StoreAction::Update => "Failed to update calculation",
            StoreAction::Delete => "Failed to delete calculation",
        }
    }
}

/// REST API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Operand validation failed
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Request body is not a calculation payload
    #[error("Invalid calculation payload")]
    InvalidPayload(String),

    /// No record with the requested id
    #[error("Calculation not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Any record store failure, including malformed ids
    #[error("{}", .action.failure_message())]
    Store {
        action: StoreAction,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Adapter for `map_err` on store calls
    pub fn store(action: StoreAction) -> impl FnOnce(StoreError) -> ApiError {
        move |source| ApiError::Store { action, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Calc(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store { action, source } => tracing::error!(
                collection = COLLECTION,
                action = ?action,
                invalid_id = source.is_invalid_id(),
                error = %source,
                "record store operation failed"
            ),
            ApiError::InvalidPayload(detail) => {
                tracing::debug!(detail = %detail, "rejected calculation payload")
            }
            _ => {}
        }

        let status = self.status_code();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}
