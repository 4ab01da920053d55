//! Public models for the calculator module.
//!
//! These are transport-agnostic data structures shared between the
//! calculator implementation and its consumers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A numeric value: an operand that passed the type check, or a result.
///
/// Equality is numeric, so `Int(8) == Float(8.0)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Value as `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// `true` for `0`, `0.0` and `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

/// Floats always show they are floats: `2000000.0`, `1e20`, `2.5e-7`.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) if !v.is_finite() => write!(f, "{v}"),
            Self::Float(v) if v != 0.0 && !(1e-6..1e16).contains(&v.abs()) => write!(f, "{v:e}"),
            Self::Float(v) if v.fract() == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number {
            fn from(v: $t) -> Self {
                Self::Int(i64::from(v))
            }
        })*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// A caller-supplied operand, before validation.
///
/// Anything that is not a JSON number (strings, booleans, null, arrays,
/// objects) is carried as `Other` and fails the type check. Strings are
/// never parsed, so `"5"` is not a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Number(Number),
    Other(Value),
}

impl Operand {
    /// The numeric value, if this operand is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Other(_) => None,
        }
    }

    /// Rendering used in error messages: the number itself, or the JSON form
    /// of a non-numeric value.
    #[must_use]
    pub fn repr(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Other(v) => v.to_string(),
        }
    }
}

macro_rules! operand_from_number {
    ($($t:ty),*) => {
        $(impl From<$t> for Operand {
            fn from(v: $t) -> Self {
                Self::Number(Number::from(v))
            }
        })*
    };
}

operand_from_number!(i8, i16, i32, i64, u8, u16, u32, f32, f64, Number);

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Self::Other(Value::String(v.to_owned()))
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Self::Other(Value::String(v))
    }
}

impl From<bool> for Operand {
    fn from(v: bool) -> Self {
        Self::Other(Value::Bool(v))
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        match v {
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Number(Number::Int(i)),
                (None, Some(f)) => Self::Number(Number::Float(f)),
                (None, None) => Self::Other(Value::Number(n)),
            },
            other => Self::Other(other),
        }
    }
}

/// One of the four arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Returned by [`Operation::from_str`] for an unrecognized name or symbol.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operation: {0}")]
pub struct ParseOperationError(pub String);

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == s || op.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseOperationError(s.to_owned()))
    }
}
