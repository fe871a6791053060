//! The four arithmetic operations.
//!
//! Each operation is available as a free function and as a variant of
//! [`Operation`], which is what a [`Calculation`](super::Calculation) stores.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, Result};

/// Add two numbers.
pub fn add(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_add(b).ok_or(CalcError::Overflow { operation: "add" })
}

/// Subtract `b` from `a`.
pub fn subtract(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_sub(b).ok_or(CalcError::Overflow {
        operation: "subtract",
    })
}

/// Multiply two numbers.
pub fn multiply(a: Decimal, b: Decimal) -> Result<Decimal> {
    a.checked_mul(b).ok_or(CalcError::Overflow {
        operation: "multiply",
    })
}

/// Divide `a` by `b`.
///
/// Fails with [`CalcError::DivisionByZero`] when `b` is zero.
pub fn divide(a: Decimal, b: Decimal) -> Result<Decimal> {
    if b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }
    a.checked_div(b).ok_or(CalcError::Overflow {
        operation: "divide",
    })
}

/// One of the four supported operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Apply the operation to two operands.
    pub fn apply(self, a: Decimal, b: Decimal) -> Result<Decimal> {
        match self {
            Self::Add => add(a, b),
            Self::Subtract => subtract(a, b),
            Self::Multiply => multiply(a, b),
            Self::Divide => divide(a, b),
        }
    }

    /// Function name, as used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Infix symbol.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Look up an operation by its infix symbol.
    ///
    /// Besides the ASCII symbols, `x`, `×` and `÷` are accepted.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|op| op.name() == lower)
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}
