//! # Calculation Errors
//!
//! Validation failures raised before any arithmetic or persistence happens.

use thiserror::Error;

use super::operation::Operation;

/// Result type for arithmetic evaluation
pub type CalcResult<T> = Result<T, CalcError>;

/// Arithmetic validation errors
///
/// The display text is the message returned to HTTP clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// An operand is missing or does not parse as a number
    #[error("{}", .0.invalid_input_message())]
    InvalidInput(Operation),

    /// Divide with a zero divisor
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Modulo with a zero divisor
    #[error("Cannot modulo by zero")]
    ModuloByZero,

    /// Square root of a negative number
    #[error("Please input positive numbers, this function can't deal with negative numbers")]
    NegativeOperand,
}

/// Unknown operation tag
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message_names_operation() {
        assert_eq!(
            CalcError::InvalidInput(Operation::Add).to_string(),
            "Please press the number you want to add"
        );
        assert_eq!(
            CalcError::InvalidInput(Operation::Power).to_string(),
            "(num1)base and (num2)exponent should be numbers"
        );
    }

    #[test]
    fn test_zero_divisor_messages() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Cannot divide by zero");
        assert_eq!(CalcError::ModuloByZero.to_string(), "Cannot modulo by zero");
    }
}
