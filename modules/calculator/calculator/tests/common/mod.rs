#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use std::sync::Arc;

use calculator::CalculatorModule;
use calculator::config::CalculatorConfig;
use calculator_sdk::{CalculatorApi, OverflowPolicy};

/// Create a client backed by a module with the given overflow policy.
pub fn create_client(overflow: OverflowPolicy) -> Arc<dyn CalculatorApi> {
    CalculatorModule::with_config(&CalculatorConfig { overflow }).client()
}

/// Create a client with the default configuration.
pub fn default_client() -> Arc<dyn CalculatorApi> {
    CalculatorModule::default().client()
}
