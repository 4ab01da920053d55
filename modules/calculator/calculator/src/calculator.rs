//! Ergonomic entry point over the domain service.

use std::sync::Arc;

use calculator_sdk::{CalculatorClient, CalculatorError, Number, Operand, Operation};

use crate::config::CalculatorConfig;
use crate::domain::{Service, ValidRange};
use crate::local_client::CalculatorLocalClient;

/// Calculator accepting anything convertible into an [`Operand`].
///
/// ```ignore
/// let calc = Calculator::new();
/// assert_eq!(calc.add(5, 3)?, Number::Int(8));
/// assert!(calc.add("five", 3).unwrap_err().is_invalid_input());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    service: Arc<Service>,
}

impl Calculator {
    /// Calculator over `[MIN_VALUE, MAX_VALUE]`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator over the range described by `cfg`.
    ///
    /// # Errors
    /// Fails if the configured bounds are invalid.
    pub fn with_config(cfg: &CalculatorConfig) -> anyhow::Result<Self> {
        Ok(Self {
            service: Arc::new(Service::from_config(cfg)?),
        })
    }

    #[must_use]
    pub fn range(&self) -> ValidRange {
        self.service.range()
    }

    /// A shareable [`CalculatorClient`] backed by the same service.
    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorClient> {
        Arc::new(CalculatorLocalClient::new(Arc::clone(&self.service)))
    }

    /// # Errors
    /// [`CalculatorError::InvalidInput`] for the first invalid operand.
    pub fn add(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Number, CalculatorError> {
        self.service.add(&a.into(), &b.into())
    }

    /// # Errors
    /// [`CalculatorError::InvalidInput`] for the first invalid operand.
    pub fn subtract(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Number, CalculatorError> {
        self.service.subtract(&a.into(), &b.into())
    }

    /// # Errors
    /// [`CalculatorError::InvalidInput`] for the first invalid operand.
    pub fn multiply(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Number, CalculatorError> {
        self.service.multiply(&a.into(), &b.into())
    }

    /// # Errors
    /// [`CalculatorError::InvalidInput`] for the first invalid operand, then
    /// [`CalculatorError::DivisionByZero`] if the divisor is zero.
    pub fn divide(
        &self,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Number, CalculatorError> {
        self.service.divide(&a.into(), &b.into())
    }

    /// # Errors
    /// Same as the dispatched operation.
    pub fn evaluate(
        &self,
        op: Operation,
        a: impl Into<Operand>,
        b: impl Into<Operand>,
    ) -> Result<Number, CalculatorError> {
        self.service.evaluate(op, &a.into(), &b.into())
    }
}
