//! Domain service for calculator
//!
//! Contains the core arithmetic. Every operation validates both operands
//! before computing; the result itself is not range-checked.

use tracing::{debug, trace};

use calculator_sdk::{CalculatorError, Number, Operand, Operation};

use super::validation::ValidRange;
use crate::config::CalculatorConfig;

/// Domain service that performs calculator operations.
///
/// Stateless apart from the immutable valid range, so it can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Service {
    range: ValidRange,
}

impl Service {
    /// Create a service over the default range.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            range: ValidRange::DEFAULT,
        }
    }

    #[must_use]
    pub const fn with_range(range: ValidRange) -> Self {
        Self { range }
    }

    /// Create a service from module configuration.
    ///
    /// # Errors
    /// Fails if the configured bounds are invalid.
    pub fn from_config(cfg: &CalculatorConfig) -> anyhow::Result<Self> {
        Ok(Self::with_range(cfg.valid_range()?))
    }

    #[must_use]
    pub const fn range(&self) -> ValidRange {
        self.range
    }

    /// Add two operands. `Int + Int` stays integral.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidInput`] for the first invalid operand.
    pub fn add(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        self.integral_op(Operation::Add, a, b, i64::checked_add, |x, y| x + y)
    }

    /// Subtract `b` from `a`. `Int - Int` stays integral.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidInput`] for the first invalid operand.
    pub fn subtract(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        self.integral_op(Operation::Subtract, a, b, i64::checked_sub, |x, y| x - y)
    }

    /// Multiply two operands. `Int * Int` stays integral.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidInput`] for the first invalid operand.
    pub fn multiply(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        self.integral_op(Operation::Multiply, a, b, i64::checked_mul, |x, y| x * y)
    }

    /// True division; the quotient is always a float.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidInput`] for the first invalid operand, then
    /// [`CalculatorError::DivisionByZero`] if the divisor is zero.
    pub fn divide(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        debug!(op = %Operation::Divide, a = %a.repr(), b = %b.repr(), "performing operation");
        let (a, b) = self.range.check_pair(a, b)?;
        if b.is_zero() {
            return Err(CalculatorError::division_by_zero());
        }
        let result = Number::Float(a.as_f64() / b.as_f64());
        trace!(op = %Operation::Divide, %result, "operation complete");
        Ok(result)
    }

    /// Dispatch to the operation named by `op`.
    ///
    /// # Errors
    /// Same as the dispatched operation.
    pub fn evaluate(
        &self,
        op: Operation,
        a: &Operand,
        b: &Operand,
    ) -> Result<Number, CalculatorError> {
        match op {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
        }
    }

    /// Integer arithmetic when both operands are integers and the result
    /// fits in `i64`; float arithmetic otherwise.
    fn integral_op(
        &self,
        op: Operation,
        a: &Operand,
        b: &Operand,
        int_op: fn(i64, i64) -> Option<i64>,
        float_op: fn(f64, f64) -> f64,
    ) -> Result<Number, CalculatorError> {
        debug!(%op, a = %a.repr(), b = %b.repr(), "performing operation");
        let (a, b) = self.range.check_pair(a, b)?;
        let result = match (a, b) {
            (Number::Int(x), Number::Int(y)) => int_op(x, y).map_or_else(
                || Number::Float(float_op(a.as_f64(), b.as_f64())),
                Number::Int,
            ),
            _ => Number::Float(float_op(a.as_f64(), b.as_f64())),
        };
        trace!(%op, %result, "operation complete");
        Ok(result)
    }
}
