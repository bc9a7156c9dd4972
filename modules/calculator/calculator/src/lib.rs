//! Calculator Module
//!
//! Stateless integer arithmetic: addition, subtraction, multiplication and
//! truncating division over `i64`, with division by zero as an error.
//!
//! ## Architecture
//!
//! - `domain/arith.rs` - Free functions with wrapping semantics
//! - `domain/service.rs` - Policy-aware service used by the client
//! - `local_client.rs` - `CalculatorApi` implementation
//! - `module.rs` - Configuration loading and wiring
//!
//! External consumers should depend on `calculator-sdk` for the
//! `CalculatorApi` trait and `CalculatorError`.

pub mod config;

// === MODULE DEFINITION ===
mod module;
pub use module::CalculatorModule;

pub mod local_client;
pub use local_client::CalculatorLocalClient;

#[doc(hidden)]
pub mod domain;
pub use domain::{DomainError, Service, add, div, mul, sub};
