//! Operand validation.
//!
//! Every operand goes through the type check first and the range check
//! second. A non-number never reaches the range check.

use anyhow::{Result, ensure};
use calculator_sdk::{CalculatorError, MAX_VALUE, MIN_VALUE, Number, Operand};

/// Largest bound magnitude that converts to `f64` without rounding.
pub const MAX_EXACT_BOUND: i64 = (1 << 53) - 1;

/// Closed interval `[min, max]` that operands must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidRange {
    min: i64,
    max: i64,
}

impl Default for ValidRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl ValidRange {
    /// `[MIN_VALUE, MAX_VALUE]`.
    pub const DEFAULT: Self = Self {
        min: MIN_VALUE,
        max: MAX_VALUE,
    };

    /// Build a range from explicit bounds.
    ///
    /// # Errors
    /// Fails if `min > max` or either bound exceeds [`MAX_EXACT_BOUND`] in
    /// magnitude.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        ensure!(
            min <= max,
            "min_value ({min}) must not be greater than max_value ({max})"
        );
        for bound in [min, max] {
            ensure!(
                (-MAX_EXACT_BOUND..=MAX_EXACT_BOUND).contains(&bound),
                "bound {bound} is outside [-{MAX_EXACT_BOUND}, {MAX_EXACT_BOUND}]"
            );
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub const fn min(self) -> i64 {
        self.min
    }

    #[must_use]
    pub const fn max(self) -> i64 {
        self.max
    }

    /// Inclusive at both ends. NaN and infinities are never contained.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // bounds are within MAX_EXACT_BOUND
    pub fn contains(self, value: Number) -> bool {
        match value {
            Number::Int(v) => (self.min..=self.max).contains(&v),
            Number::Float(v) => (self.min as f64..=self.max as f64).contains(&v),
        }
    }

    /// Type check, then range check, for a single operand.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidInput`] wrapping `NotANumber` if the operand
    /// is not numeric, or `OutOfRange` if it is a number outside this range.
    pub fn check(self, operand: &Operand) -> Result<Number, CalculatorError> {
        let Some(value) = operand.as_number() else {
            return Err(CalculatorError::not_a_number(operand.repr()));
        };
        if !self.contains(value) {
            return Err(CalculatorError::out_of_range(value, self.min, self.max));
        }
        Ok(value)
    }

    /// Check `a`, then `b`. The first failure is reported.
    ///
    /// # Errors
    /// [`CalculatorError::InvalidInput`] for the first invalid operand.
    pub fn check_pair(self, a: &Operand, b: &Operand) -> Result<(Number, Number), CalculatorError> {
        let a = self.check(a)?;
        let b = self.check(b)?;
        Ok((a, b))
    }
}
