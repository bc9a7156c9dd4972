//! Error type for Calculator operations

use crate::models::Operation;

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow: {lhs} {operation} {rhs}")]
    Overflow {
        operation: Operation,
        lhs: i64,
        rhs: i64,
    },
}

impl CalculatorError {
    #[must_use]
    pub fn overflow(operation: Operation, lhs: i64, rhs: i64) -> Self {
        Self::Overflow {
            operation,
            lhs,
            rhs,
        }
    }

    #[must_use]
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
