//! Calculator API trait
//!
//! Contract trait for the calculator service.

use crate::error::CalculatorError;

/// Calculator API trait
///
/// Four integer operations over `i64` operands. Calls are independent,
/// do no I/O and may be issued concurrently from any thread.
pub trait CalculatorApi: Send + Sync {
    /// Add two numbers.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Overflow`] only under the `checked` overflow policy.
    fn add(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Overflow`] only under the `checked` overflow policy.
    fn sub(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Multiply two numbers.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::Overflow`] only under the `checked` overflow policy.
    fn mul(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Divide `a` by `b`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DivisionByZero`] when `b == 0`, and
    /// [`CalculatorError::Overflow`] for `i64::MIN / -1` under the `checked` policy.
    fn div(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;
}
