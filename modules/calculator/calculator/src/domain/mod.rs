//! Domain layer for calculator module
//!
//! Contains the arithmetic itself and the policy-aware service.

pub mod arith;
pub mod error;
pub mod service;

pub use arith::{add, div, mul, sub};
pub use error::DomainError;
pub use service::Service;
