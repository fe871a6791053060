//! Calculator front end that records every calculation it runs.

use rust_decimal::Decimal;
use tracing::debug;

use super::calculation::Calculation;
use super::history::History;
use super::operations::Operation;
use crate::error::Result;

/// Dispatches operations and keeps a [`History`] of them.
///
/// Each call creates a [`Calculation`], appends it to the history and then
/// performs it. A calculation that fails (division by zero) is still
/// recorded.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    history: History,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, a: Decimal, b: Decimal) -> Result<Decimal> {
        self.calculate(a, b, Operation::Add)
    }

    pub fn subtract(&mut self, a: Decimal, b: Decimal) -> Result<Decimal> {
        self.calculate(a, b, Operation::Subtract)
    }

    pub fn multiply(&mut self, a: Decimal, b: Decimal) -> Result<Decimal> {
        self.calculate(a, b, Operation::Multiply)
    }

    pub fn divide(&mut self, a: Decimal, b: Decimal) -> Result<Decimal> {
        self.calculate(a, b, Operation::Divide)
    }

    /// Record and perform `a <operation> b`.
    pub fn calculate(&mut self, a: Decimal, b: Decimal, operation: Operation) -> Result<Decimal> {
        let calculation = Calculation::create(a, b, operation);
        self.history.push(calculation);
        debug!(
            %a,
            %b,
            operation = operation.name(),
            entries = self.history.len(),
            "performing calculation"
        );
        calculation.perform()
    }

    /// All calculations performed so far, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clear_history(&mut self) {
        debug!(entries = self.history.len(), "clearing history");
        self.history.clear();
    }
}
