//! Local client implementing the `CalculatorApi` trait.

use std::sync::Arc;

use calculator_sdk::{CalculatorApi, CalculatorError};

use crate::domain::Service;

/// Local client for the calculator module.
///
/// Delegates to the domain service and converts domain errors into
/// `CalculatorError`.
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorApi for CalculatorLocalClient {
    fn add(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.add(a, b).map_err(CalculatorError::from)
    }

    fn sub(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.sub(a, b).map_err(CalculatorError::from)
    }

    fn mul(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.mul(a, b).map_err(CalculatorError::from)
    }

    fn div(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.div(a, b).map_err(CalculatorError::from)
    }
}
