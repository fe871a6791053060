//! A single calculation: two operands and the operation to apply to them.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use super::operations::Operation;
use crate::error::Result;

/// An immutable record pairing two operands with one operation.
///
/// The calculation is not executed on creation; [`Calculation::perform`]
/// applies the operation on demand and may be called any number of times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Calculation {
    operand_a: Decimal,
    operand_b: Decimal,
    operation: Operation,
}

impl Calculation {
    /// Create a new calculation without performing it.
    pub fn create(operand_a: Decimal, operand_b: Decimal, operation: Operation) -> Self {
        Self {
            operand_a,
            operand_b,
            operation,
        }
    }

    /// Apply the stored operation to the stored operands.
    pub fn perform(&self) -> Result<Decimal> {
        self.operation.apply(self.operand_a, self.operand_b)
    }

    pub fn operand_a(&self) -> Decimal {
        self.operand_a
    }

    pub fn operand_b(&self) -> Decimal {
        self.operand_b
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Infix form, e.g. `2 + 3`.
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            self.operand_a,
            self.operation.symbol(),
            self.operand_b
        )
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Calculation({}, {}, {})",
            self.operand_a, self.operand_b, self.operation
        )
    }
}
