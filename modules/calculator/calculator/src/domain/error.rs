//! Domain error types for the calculator module.

use calculator_sdk::{CalculatorError, Operation};
use thiserror::Error;

/// Domain-level errors for the calculator module.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The divisor was zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// The result does not fit in `i64` and the policy is `checked`.
    #[error("Overflow: {lhs} {operation} {rhs} does not fit in i64")]
    Overflow {
        operation: Operation,
        lhs: i64,
        rhs: i64,
    },
}

impl DomainError {
    /// Creates an `Overflow` error.
    #[must_use]
    pub fn overflow(operation: Operation, lhs: i64, rhs: i64) -> Self {
        Self::Overflow {
            operation,
            lhs,
            rhs,
        }
    }
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::DivisionByZero => CalculatorError::DivisionByZero,
            DomainError::Overflow {
                operation,
                lhs,
                rhs,
            } => CalculatorError::overflow(operation, lhs, rhs),
        }
    }
}
