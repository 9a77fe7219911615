//! # Operand Parsing
//!
//! Query parameters arrive as strings. Anything that is not a number is
//! rejected here, before evaluation.

use super::errors::{CalcError, CalcResult};
use super::operation::Operation;

/// Parse a raw operand for `operation`.
///
/// Surrounding whitespace is ignored. Missing, empty, and non-numeric
/// values (including a literal `NaN`) are rejected; infinities are accepted.
pub fn parse_operand(raw: Option<&str>, operation: Operation) -> CalcResult<f64> {
    raw.and_then(parse_number)
        .ok_or(CalcError::InvalidInput(operation))
}

/// Parse a numeric string with the same rules as [`parse_operand`].
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| !value.is_nan())
}
