//! Expression evaluation and result formatting.
//!
//! Runs parsed expressions through a [`Calculator`] so they end up in its
//! history, and formats results for display and for the clipboard.

use rust_decimal::{Decimal, RoundingStrategy};

use super::detection::parse_expression;
use super::dispatcher::Calculator;
use crate::config::DisplayConfig;
use crate::error::CalcError;

/// Result of evaluating a calculator expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcResult {
    /// Successful calculation.
    Success {
        /// The original expression.
        expression: String,
        /// The numeric value.
        value: Decimal,
        /// Formatted for display (with thousand separators).
        display_result: String,
        /// Formatted for clipboard (raw number).
        clipboard_result: String,
    },
    /// Expression parsed but the calculation failed.
    Error {
        /// The original expression.
        expression: String,
        /// Error message to display.
        message: String,
    },
}

impl CalcResult {
    /// Wrap the outcome of a calculation.
    pub fn from_outcome(
        expression: String,
        outcome: Result<Decimal, CalcError>,
        config: &DisplayConfig,
    ) -> Self {
        match outcome {
            Ok(value) => Self::Success {
                expression,
                display_result: format_display(value, config),
                clipboard_result: format_clipboard(value, config),
                value,
            },
            Err(err) => Self::Error {
                expression,
                message: err.short_message().to_string(),
            },
        }
    }

    /// Get the expression that was evaluated.
    pub fn expression(&self) -> &str {
        match self {
            Self::Success { expression, .. } => expression,
            Self::Error { expression, .. } => expression,
        }
    }

    /// Check if this is a successful result.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Get the numeric value (only for successful results).
    pub fn value(&self) -> Option<Decimal> {
        match self {
            Self::Success { value, .. } => Some(*value),
            Self::Error { .. } => None,
        }
    }

    /// Get the display string (result or error message).
    pub fn display(&self) -> &str {
        match self {
            Self::Success { display_result, .. } => display_result,
            Self::Error { message, .. } => message,
        }
    }

    /// Get the clipboard string (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        match self {
            Self::Success {
                clipboard_result, ..
            } => Some(clipboard_result),
            Self::Error { .. } => None,
        }
    }
}

/// Evaluate a `<number> <operator> <number>` expression.
///
/// Returns `None` if the input cannot be parsed; nothing is recorded in
/// that case. Otherwise the calculation is dispatched through `calculator`
/// and recorded in its history, whether or not it succeeds.
pub fn evaluate_expression(
    calculator: &mut Calculator,
    input: &str,
    config: &DisplayConfig,
) -> Option<CalcResult> {
    let parsed = parse_expression(input)?;
    let expression = input.trim().to_string();
    let outcome = calculator.calculate(parsed.a, parsed.b, parsed.operation);

    Some(CalcResult::from_outcome(expression, outcome, config))
}

/// Format a number for display, with thousand separators if enabled.
pub fn format_display(value: Decimal, config: &DisplayConfig) -> String {
    let plain = format_clipboard(value, config);
    if !config.thousands_separators {
        return plain;
    }

    match plain.split_once('.') {
        Some((int_part, dec_part)) => format!("{}.{}", format_with_separators(int_part), dec_part),
        None => format_with_separators(&plain),
    }
}

/// Format a number for clipboard (raw number, no separators).
///
/// Midpoints round away from zero.
pub fn format_clipboard(value: Decimal, config: &DisplayConfig) -> String {
    value
        .round_dp_with_strategy(
            config.max_decimal_places,
            RoundingStrategy::MidpointAwayFromZero,
        )
        .normalize()
        .to_string()
}

/// Insert thousand separators into a (possibly negative) integer string.
fn format_with_separators(digits: &str) -> String {
    let (sign, abs_digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut result = String::new();
    for (i, c) in abs_digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    let formatted: String = result.chars().rev().collect();
    format!("{}{}", sign, formatted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn config() -> DisplayConfig {
        DisplayConfig::default()
    }

    #[test]
    fn test_basic_evaluation() {
        let mut calc = Calculator::new();
        let result = evaluate_expression(&mut calc, "2 + 2", &config()).unwrap();
        assert!(result.is_success());
        assert_eq!(result.display(), "4");
        assert_eq!(result.clipboard(), Some("4"));
        assert_eq!(result.expression(), "2 + 2");
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_thousand_separators() {
        let mut calc = Calculator::new();
        let result = evaluate_expression(&mut calc, "1000 * 1000", &config()).unwrap();
        assert_eq!(result.display(), "1,000,000");
        assert_eq!(result.clipboard(), Some("1000000"));

        let result = evaluate_expression(&mut calc, "-1234567.5 * 1", &config()).unwrap();
        assert_eq!(result.display(), "-1,234,567.5");
    }

    #[test]
    fn test_separators_disabled() {
        let config = DisplayConfig {
            thousands_separators: false,
            ..DisplayConfig::default()
        };
        let mut calc = Calculator::new();
        let result = evaluate_expression(&mut calc, "1000 * 1000", &config).unwrap();
        assert_eq!(result.display(), "1000000");
    }

    #[test]
    fn test_decimal_result() {
        let mut calc = Calculator::new();
        let result = evaluate_expression(&mut calc, "1 / 3", &config()).unwrap();
        assert!(result.is_success());
        // Rounded to the configured places, no trailing zeros
        assert_eq!(result.display(), "0.3333333333");

        let result = evaluate_expression(&mut calc, "2.50 * 2", &config()).unwrap();
        assert_eq!(result.display(), "5");
        assert_eq!(result.value(), Some(Decimal::from(5)));
    }

    #[test]
    fn test_division_by_zero() {
        let mut calc = Calculator::new();
        let result = evaluate_expression(&mut calc, "5 / 0", &config()).unwrap();
        assert!(!result.is_success());
        assert_eq!(result.display(), "Division by zero");
        assert_eq!(result.clipboard(), None);
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_invalid_expression() {
        let mut calc = Calculator::new();
        assert!(evaluate_expression(&mut calc, "2 +* 2", &config()).is_none());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_format_clipboard_precision() {
        let config = DisplayConfig {
            max_decimal_places: 2,
            ..DisplayConfig::default()
        };
        let value = Decimal::from_str("3.14159").unwrap();
        assert_eq!(format_clipboard(value, &config), "3.14");
        assert_eq!(format_display(Decimal::from(-999), &config), "-999");
    }

    #[test]
    fn test_midpoints_round_away_from_zero() {
        let config = config();
        let d = |s: &str| Decimal::from_str(s).unwrap();
        assert_eq!(format_clipboard(d("0.00000000005"), &config), "0.0000000001");
        assert_eq!(format_clipboard(d("0.00000000015"), &config), "0.0000000002");
        assert_eq!(format_clipboard(d("-0.00000000005"), &config), "-0.0000000001");

        let whole = DisplayConfig {
            max_decimal_places: 0,
            ..DisplayConfig::default()
        };
        assert_eq!(format_display(d("2.5"), &whole), "3");
        assert_eq!(format_display(d("1234.5"), &whole), "1,235");
    }
}
