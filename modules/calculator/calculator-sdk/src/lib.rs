//! Calculator SDK
//!
//! This crate provides the public contract of the calculator module:
//! - API trait (`CalculatorApi`)
//! - Error type (`CalculatorError`)
//! - Models (`Operation`, `OverflowPolicy`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::CalculatorApi;
//!
//! let client: Arc<dyn CalculatorApi> = module.client();
//! let quotient = client.div(6, 3)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod models;

pub use api::CalculatorApi;
pub use error::CalculatorError;
pub use models::{Operation, OverflowPolicy};
