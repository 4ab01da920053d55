//! Calculator Module
//!
//! Range-validated arithmetic: `add`, `subtract`, `multiply` and `divide`
//! over two operands, each checked to be a number inside the configured
//! range before anything is computed.
//!
//! ## Architecture
//!
//! - `domain/validation.rs` - Operand type and range checks
//! - `domain/service.rs` - Core arithmetic
//! - `local_client.rs` - In-process `CalculatorClient` implementation
//! - `config.rs` - Range configuration (defaults, YAML, environment)
//!
//! External consumers should depend on `calculator-sdk` for the client trait,
//! models and errors.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === FACADE ===
mod calculator;
pub use calculator::Calculator;

// === CONFIGURATION ===
pub mod config;
pub use config::CalculatorConfig;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod domain;
mod local_client;
pub use local_client::CalculatorLocalClient;

pub use calculator_sdk::{
    CalculatorClient, CalculatorError, ErrorKind, InvalidInputError, MAX_VALUE, MIN_VALUE, Number,
    Operand, Operation,
};
