//! Calculator core.
//!
//! This module provides:
//! - The four arithmetic operations over decimals
//! - `Calculation` records and the `History` log they are kept in
//! - A `Calculator` that records every calculation it performs
//! - Parsing and evaluating `<number> <op> <number>` expressions
//! - Copying results to the clipboard

mod calculation;
mod clipboard;
mod detection;
mod dispatcher;
mod evaluation;
mod history;
mod operations;

pub use calculation::Calculation;
pub use clipboard::copy_to_clipboard;
pub use detection::{Expression, looks_like_expression, parse_expression, parse_operand};
pub use dispatcher::Calculator;
pub use evaluation::{CalcResult, evaluate_expression, format_clipboard, format_display};
pub use history::History;
pub use operations::{Operation, add, divide, multiply, subtract};
