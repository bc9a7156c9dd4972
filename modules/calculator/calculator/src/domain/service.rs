//! Domain service for calculator
//!
//! Contains the core arithmetic logic, parameterized by an overflow policy.

use calculator_sdk::{Operation, OverflowPolicy};
use tracing::{debug, warn};

use super::arith;
use super::error::DomainError;

/// Domain service that performs the four arithmetic operations.
///
/// The service holds only its immutable overflow policy, so a single
/// instance can be shared across threads and every call is independent.
#[derive(Debug, Clone, Default)]
pub struct Service {
    policy: OverflowPolicy,
}

impl Service {
    /// Create a new service with the given overflow policy.
    #[must_use]
    pub fn new(policy: OverflowPolicy) -> Self {
        Self { policy }
    }

    #[must_use]
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Add two numbers and return the sum.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] under [`OverflowPolicy::Checked`].
    pub fn add(&self, a: i64, b: i64) -> Result<i64, DomainError> {
        self.apply(Operation::Add, a, b)
    }

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] under [`OverflowPolicy::Checked`].
    pub fn sub(&self, a: i64, b: i64) -> Result<i64, DomainError> {
        self.apply(Operation::Sub, a, b)
    }

    /// Multiply two numbers.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Overflow`] under [`OverflowPolicy::Checked`].
    pub fn mul(&self, a: i64, b: i64) -> Result<i64, DomainError> {
        self.apply(Operation::Mul, a, b)
    }

    /// Divide `a` by `b`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DivisionByZero`] when `b == 0` regardless of
    /// policy, and [`DomainError::Overflow`] for `i64::MIN / -1` under
    /// [`OverflowPolicy::Checked`].
    pub fn div(&self, a: i64, b: i64) -> Result<i64, DomainError> {
        self.apply(Operation::Div, a, b)
    }

    /// Perform a single operation on two operands.
    ///
    /// # Errors
    ///
    /// See the individual operations.
    pub fn apply(&self, operation: Operation, a: i64, b: i64) -> Result<i64, DomainError> {
        debug!(%operation, a, b, "performing {}", describe(operation));

        if operation == Operation::Div && b == 0 {
            warn!(a, "rejected division by zero");
            return Err(DomainError::DivisionByZero);
        }

        let result = self.evaluate(operation, a, b);
        if let Err(err) = &result {
            warn!(%operation, a, b, error = %err, "rejected overflowing operation");
        }
        result
    }

    // Divisor is known to be nonzero here.
    fn evaluate(&self, operation: Operation, a: i64, b: i64) -> Result<i64, DomainError> {
        match self.policy {
            OverflowPolicy::Wrapping => match operation {
                Operation::Add => Ok(arith::add(a, b)),
                Operation::Sub => Ok(arith::sub(a, b)),
                Operation::Mul => Ok(arith::mul(a, b)),
                Operation::Div => arith::div(a, b),
            },
            OverflowPolicy::Saturating => Ok(match operation {
                Operation::Add => a.saturating_add(b),
                Operation::Sub => a.saturating_sub(b),
                Operation::Mul => a.saturating_mul(b),
                Operation::Div => a.saturating_div(b),
            }),
            OverflowPolicy::Checked => match operation {
                Operation::Add => a.checked_add(b),
                Operation::Sub => a.checked_sub(b),
                Operation::Mul => a.checked_mul(b),
                Operation::Div => a.checked_div(b),
            }
            .ok_or_else(|| DomainError::overflow(operation, a, b)),
        }
    }
}

fn describe(operation: Operation) -> &'static str {
    match operation {
        Operation::Add => "addition",
        Operation::Sub => "subtraction",
        Operation::Mul => "multiplication",
        Operation::Div => "division",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_add() {
        let service = Service::default();
        assert_eq!(service.add(10, 20), Ok(30));
    }

    #[test]
    fn test_add_negative() {
        let service = Service::default();
        assert_eq!(service.add(-5, 3), Ok(-2));
    }

    #[test]
    fn test_div_by_zero_under_every_policy() {
        for policy in [
            OverflowPolicy::Wrapping,
            OverflowPolicy::Checked,
            OverflowPolicy::Saturating,
        ] {
            let service = Service::new(policy);
            assert_eq!(service.div(5, 0), Err(DomainError::DivisionByZero), "{policy:?}");
        }
    }

    #[test]
    fn test_wrapping_policy() {
        let service = Service::new(OverflowPolicy::Wrapping);
        assert_eq!(service.add(i64::MAX, 1), Ok(i64::MIN));
        assert_eq!(service.sub(i64::MIN, 1), Ok(i64::MAX));
        assert_eq!(service.mul(i64::MIN, -1), Ok(i64::MIN));
        assert_eq!(service.div(i64::MIN, -1), Ok(i64::MIN));
    }

    #[test]
    fn test_saturating_policy() {
        let service = Service::new(OverflowPolicy::Saturating);
        assert_eq!(service.add(i64::MAX, 1), Ok(i64::MAX));
        assert_eq!(service.sub(i64::MIN, 1), Ok(i64::MIN));
        assert_eq!(service.mul(i64::MAX, -2), Ok(i64::MIN));
        assert_eq!(service.div(i64::MIN, -1), Ok(i64::MAX));
    }

    #[test]
    fn test_checked_policy() {
        let service = Service::new(OverflowPolicy::Checked);
        assert_eq!(
            service.add(i64::MAX, 1),
            Err(DomainError::overflow(Operation::Add, i64::MAX, 1))
        );
        assert_eq!(
            service.sub(i64::MIN, 1),
            Err(DomainError::overflow(Operation::Sub, i64::MIN, 1))
        );
        assert_eq!(
            service.mul(i64::MAX, 2),
            Err(DomainError::overflow(Operation::Mul, i64::MAX, 2))
        );
        assert_eq!(
            service.div(i64::MIN, -1),
            Err(DomainError::overflow(Operation::Div, i64::MIN, -1))
        );
        assert_eq!(service.div(-7, 2), Ok(-3));
    }

    #[test]
    fn test_apply_dispatches() {
        let service = Service::default();
        let results: Vec<_> = Operation::ALL
            .iter()
            .map(|&op| service.apply(op, 12, 4))
            .collect();
        assert_eq!(results, vec![Ok(16), Ok(8), Ok(48), Ok(3)]);
    }

    #[test]
    #[traced_test]
    fn test_division_by_zero_is_logged() {
        let service = Service::default();
        assert!(service.div(5, 0).is_err());
        assert!(logs_contain("performing division"));
        assert!(logs_contain("rejected division by zero"));
    }

    #[test]
    #[traced_test]
    fn test_checked_overflow_is_logged() {
        let service = Service::new(OverflowPolicy::Checked);
        assert!(service.mul(i64::MAX, 2).is_err());
        assert!(logs_contain("rejected overflowing operation"));
    }
}
