//! # Calculator Core
//!
//! Typed parsing of operands and evaluation of the seven supported
//! operations. Nothing in here touches the record store.

mod errors;
mod operand;
mod operation;

pub use errors::{CalcError, CalcResult, UnknownOperation};
pub use operand::{parse_number, parse_operand};
pub use operation::Operation;

/// A successfully evaluated calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub operation: Operation,
    pub num1: f64,
    pub num2: f64,
    pub result: f64,
}

/// Parse the raw operands and apply `operation`.
///
/// All operands are parsed before any domain check runs, so a non-numeric
/// divisor reports `InvalidInput` rather than `DivisionByZero`. For unary
/// operations `num2` is ignored and recorded as `0`.
pub fn evaluate(
    operation: Operation,
    num1: Option<&str>,
    num2: Option<&str>,
) -> CalcResult<Evaluation> {
    let lhs = parse_operand(num1, operation)?;
    let rhs = if operation.is_unary() {
        0.0
    } else {
        parse_operand(num2, operation)?
    };

    let result = operation.apply(lhs, rhs)?;

    Ok(Evaluation {
        operation,
        num1: lhs,
        num2: rhs,
        result,
    })
}
