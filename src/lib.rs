//! A four-function decimal calculator that records every calculation.
//!
//! ```
//! use calc_history::calculator::Calculator;
//! use rust_decimal::Decimal;
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.add(Decimal::from(2), Decimal::from(2)), Ok(Decimal::from(4)));
//! assert_eq!(calc.history().len(), 1);
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod logging;

pub use calculator::{Calculation, Calculator, History, Operation, add, divide, multiply, subtract};
pub use error::CalcError;
