//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator module:
//! - Client trait (`CalculatorClient`)
//! - Operand and result types (`Operand`, `Number`, `Operation`)
//! - Error types (`CalculatorError`, `InvalidInputError`)
//! - Valid range constants (`MIN_VALUE`, `MAX_VALUE`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClient, Operand};
//!
//! let client: Arc<dyn CalculatorClient> = calculator.client();
//! let sum = client.add(&Operand::from(1), &Operand::from(2))?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === CLIENT TRAIT ===
mod api;
pub use api::CalculatorClient;

// === ERRORS ===
mod error;
pub use error::{CalculatorError, ErrorKind, InvalidInputError};

// === MODELS ===
pub mod models;
pub use models::{Number, Operand, Operation, ParseOperationError};

/// Lower bound (inclusive) of the range every operand must satisfy.
pub const MIN_VALUE: i64 = -1_000_000;

/// Upper bound (inclusive) of the range every operand must satisfy.
pub const MAX_VALUE: i64 = 1_000_000;
