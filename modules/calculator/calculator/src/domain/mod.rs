//! Domain layer for calculator module
//!
//! Contains operand validation and the arithmetic itself.

pub mod service;
pub mod validation;

pub use service::Service;
pub use validation::ValidRange;
