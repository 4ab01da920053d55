//! Public error types for the calculator module.
//!
//! The two kinds are kept apart so callers can tell a bad operand from an
//! undefined operation.

use thiserror::Error;

use crate::models::Number;

/// Reason an operand was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// The operand is not a number. `repr` is its JSON rendering.
    #[error("Input {repr} is not a valid number")]
    NotANumber { repr: String },

    /// The operand is a number outside `[min, max]`.
    #[error("Input {value} is outside the valid range [{min}, {max}]")]
    OutOfRange { value: Number, min: i64, max: i64 },
}

/// Errors that can be returned by the `CalculatorClient`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// An operand failed validation. No arithmetic was performed.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// The divisor passed validation but equals zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,
}

/// Discriminant of [`CalculatorError`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    DivisionByZero,
}

impl CalculatorError {
    /// Creates a `NotANumber` invalid-input error.
    #[must_use]
    pub fn not_a_number(repr: impl Into<String>) -> Self {
        Self::InvalidInput(InvalidInputError::NotANumber { repr: repr.into() })
    }

    /// Creates an `OutOfRange` invalid-input error.
    #[must_use]
    pub const fn out_of_range(value: Number, min: i64, max: i64) -> Self {
        Self::InvalidInput(InvalidInputError::OutOfRange { value, min, max })
    }

    /// Creates a `DivisionByZero` error.
    #[must_use]
    pub const fn division_by_zero() -> Self {
        Self::DivisionByZero
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }

    /// Returns `true` if an operand was rejected.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Returns `true` if this is a division by zero.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }
}
