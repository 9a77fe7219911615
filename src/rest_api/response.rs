//! # Response Formatting
//!
//! JSON bodies returned by the calculator endpoints.

use serde::Serialize;

use crate::store::RecordId;

/// Arithmetic result
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResultResponse {
    pub result: f64,
}

impl ResultResponse {
    pub fn new(result: f64) -> Self {
        Self { result }
    }
}

/// Insert metadata for a created record
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: RecordId,
}

impl InsertResponse {
    pub fn acknowledged(inserted_id: RecordId) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Confirmation message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Health check body
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
