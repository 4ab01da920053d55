//! Calculator client trait
//!
//! Contract trait for the calculator module.

use crate::error::CalculatorError;
use crate::models::{Number, Operand, Operation};

/// Calculator API trait
///
/// Every operation validates both operands (first, then second) before
/// computing anything. A call either returns the result or fails; it never
/// returns a partial value. Implementations hold no mutable state.
pub trait CalculatorClient: Send + Sync {
    /// Add two operands.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if either operand is not a
    /// number or lies outside the valid range.
    fn add(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError>;

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if either operand is not a
    /// number or lies outside the valid range.
    fn subtract(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError>;

    /// Multiply two operands.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if either operand is not a
    /// number or lies outside the valid range.
    fn multiply(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError>;

    /// Divide `a` by `b`. The quotient is always a float.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidInput`] if either operand is invalid,
    /// or [`CalculatorError::DivisionByZero`] if the validated divisor is zero.
    fn divide(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError>;

    /// Dispatch to the operation named by `op`.
    ///
    /// # Errors
    /// Same as the dispatched operation.
    fn evaluate(&self, op: Operation, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
        }
    }
}
