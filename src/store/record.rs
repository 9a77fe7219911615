//! # Calculation Records
//!
//! Document shape of the `calculations` collection.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::calc::{self, Evaluation, Operation};

use super::errors::{StoreError, StoreResult};

/// Store-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Allocate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier taken from a URL path
    pub fn parse(raw: &str) -> StoreResult<Self> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| StoreError::InvalidId(raw.to_string()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// The caller-supplied part of a record
///
/// Used both for records produced by arithmetic endpoints and for direct
/// create/update payloads. No consistency check links `result` to the
/// operands. Numeric fields accept JSON numbers or numeric strings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationDraft {
    pub operation: Operation,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub num1: f64,
    #[serde(default, deserialize_with = "number_or_numeric_string")]
    pub num2: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub result: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawNumber::deserialize(deserializer)? {
        RawNumber::Number(value) => Ok(value),
        RawNumber::Text(raw) => calc::parse_number(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("expected a number, found '{raw}'"))
        }),
    }
}

impl From<Evaluation> for CalculationDraft {
    fn from(eval: Evaluation) -> Self {
        Self {
            operation: eval.operation,
            num1: eval.num1,
            num2: eval.num2,
            result: eval.result,
        }
    }
}

/// A persisted calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRecord {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub operation: Operation,
    pub num1: f64,
    pub num2: f64,
    pub result: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl CalculationRecord {
    /// Build a new record from a draft
    pub fn create(draft: CalculationDraft, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::generate(),
            operation: draft.operation,
            num1: draft.num1,
            num2: draft.num2,
            result: draft.result,
            timestamp,
            updated_at: None,
        }
    }

    /// Replace the caller-supplied fields, keeping id and creation time
    pub fn apply_update(&mut self, draft: CalculationDraft, updated_at: DateTime<Utc>) {
        self.operation = draft.operation;
        self.num1 = draft.num1;
        self.num2 = draft.num2;
        self.result = draft.result;
        self.updated_at = Some(updated_at);
    }

    /// The caller-supplied part of this record
    pub fn draft(&self) -> CalculationDraft {
        CalculationDraft {
            operation: self.operation,
            num1: self.num1,
            num2: self.num2,
            result: self.result,
        }
    }
}
