//! # Operation Tags
//!
//! The arithmetic functions the service knows about, and how each one is
//! applied to its operands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::{CalcError, CalcResult, UnknownOperation};

/// Arithmetic operation tag, stored alongside every calculation record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Modulo,
}

impl Operation {
    /// Every operation, in route registration order
    pub const ALL: [Operation; 7] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Sqrt,
        Operation::Modulo,
    ];

    /// Returns the lowercase tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Sqrt => "sqrt",
            Operation::Modulo => "modulo",
        }
    }

    /// Whether the operation takes a single operand
    pub fn is_unary(&self) -> bool {
        matches!(self, Operation::Sqrt)
    }

    /// Message returned when an operand fails to parse
    pub fn invalid_input_message(&self) -> &'static str {
        match self {
            Operation::Add => "Please press the number you want to add",
            Operation::Subtract => "Please press the number you want to subtract",
            Operation::Multiply => "Please press the number you want to multiply",
            Operation::Divide => "Please press the number you want to divide",
            Operation::Power => "(num1)base and (num2)exponent should be numbers",
            Operation::Sqrt => "Please press the number you want to do sqrt",
            Operation::Modulo => "Please press the number you want to modulo",
        }
    }

    /// Apply the operation to already-parsed operands.
    ///
    /// `num2` is ignored for unary operations.
    pub fn apply(&self, num1: f64, num2: f64) -> CalcResult<f64> {
        match self {
            Operation::Add => Ok(num1 + num2),
            Operation::Subtract => Ok(num1 - num2),
            Operation::Multiply => Ok(num1 * num2),
            Operation::Divide => {
                if num2 == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(num1 / num2)
            }
            Operation::Power => Ok(num1.powf(num2)),
            Operation::Sqrt => {
                if num1 < 0.0 {
                    return Err(CalcError::NegativeOperand);
                }
                Ok(num1.sqrt())
            }
            // f64 `%` truncates toward zero, sign follows the dividend
            Operation::Modulo => {
                if num2 == 0.0 {
                    return Err(CalcError::ModuloByZero);
                }
                Ok(num1 % num2)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
