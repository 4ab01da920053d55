//! Local client implementation for the calculator module.

use std::sync::Arc;

use calculator_sdk::{CalculatorClient, CalculatorError, Number, Operand, Operation};

use crate::domain::Service;

/// Local client implementation of [`CalculatorClient`].
///
/// Used for in-process calls; delegates straight to the domain [`Service`].
#[derive(Debug, Clone)]
pub struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    #[must_use]
    pub const fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorClient for CalculatorLocalClient {
    fn add(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        self.service.add(a, b)
    }

    fn subtract(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        self.service.subtract(a, b)
    }

    fn multiply(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        self.service.multiply(a, b)
    }

    fn divide(&self, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        self.service.divide(a, b)
    }

    fn evaluate(&self, op: Operation, a: &Operand, b: &Operand) -> Result<Number, CalculatorError> {
        self.service.evaluate(op, a, b)
    }
}
