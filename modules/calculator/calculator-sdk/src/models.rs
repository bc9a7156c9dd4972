//! Calculator model types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Infix symbol of the operation.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Behavior when a result does not fit in `i64`.
///
/// Division by zero is never governed by the policy; it always fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Two's-complement wraparound.
    #[default]
    Wrapping,
    /// Fail with `CalculatorError::Overflow`.
    Checked,
    /// Clamp to `i64::MIN` / `i64::MAX`.
    Saturating,
}
