//! Free arithmetic functions over `i64`.
//!
//! Results that do not fit in `i64` wrap around. Use [`crate::Service`]
//! for checked or saturating behavior.

use super::error::DomainError;

/// Returns `a + b`.
#[must_use]
pub const fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Returns `a - b`.
#[must_use]
pub const fn sub(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Returns `a * b`.
#[must_use]
pub const fn mul(a: i64, b: i64) -> i64 {
    a.wrapping_mul(b)
}

/// Returns `a / b` truncated toward zero.
///
/// # Errors
///
/// Returns [`DomainError::DivisionByZero`] when `b == 0`.
pub const fn div(a: i64, b: i64) -> Result<i64, DomainError> {
    if b == 0 {
        return Err(DomainError::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}
