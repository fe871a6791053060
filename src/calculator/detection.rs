//! Expression detection and parsing.
//!
//! Recognizes input of the form `<number> <operator> <number>`, such as
//! `2 + 3`, `-1.5*4` or `1,000 / 8`.

use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use super::operations::Operation;

lazy_static! {
    /// Matches strings containing only math-safe characters.
    /// Allows: digits, whitespace, operators, dots, commas.
    static ref MATH_SAFE_CHARS: Regex = Regex::new(
        r"^[\d\s\.\,\+\-−\*/xX×÷]+$"
    ).unwrap();

    /// A single operand: one optional sign, digits grouped by threes or not
    /// at all, optional fraction.
    static ref OPERAND: Regex = Regex::new(
        r"^(?P<sign>[+\-])?(?P<int>\d{1,3}(?:,\d{3})+|\d*)(?P<frac>\.\d+)?$"
    ).unwrap();

    /// A full binary expression with optionally signed operands.
    static ref BINARY_EXPRESSION: Regex = Regex::new(
        r"^\s*(?P<a>[+\-]?\s*[\d,]*\.?\d+)\s*(?P<op>[+\-−*/xX×÷])\s*(?P<b>[+\-]?\s*[\d,]*\.?\d+)\s*$"
    ).unwrap();
}

/// A parsed binary expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Expression {
    pub a: Decimal,
    pub operation: Operation,
    pub b: Decimal,
}

/// Check if input looks like a potential calculator expression.
///
/// Returns `true` if the input:
/// 1. Contains only math-safe characters
/// 2. Has at least one binary operator
/// 3. Is not just a plain number
///
/// This is a fast pre-check before attempting actual parsing.
pub fn looks_like_expression(input: &str) -> bool {
    let trimmed = input.trim();

    if trimmed.len() < 3 {
        return false;
    }

    if !MATH_SAFE_CHARS.is_match(trimmed) {
        return false;
    }

    if is_plain_number(trimmed) {
        return false;
    }

    has_operator(trimmed)
}

/// Parse `<number> <operator> <number>`.
///
/// Returns `None` if the input is not a single binary expression or an
/// operand is not a valid decimal.
pub fn parse_expression(input: &str) -> Option<Expression> {
    let caps = BINARY_EXPRESSION.captures(input)?;
    let a = parse_operand(&caps["a"])?;
    let b = parse_operand(&caps["b"])?;
    let operation = caps["op"].chars().next().and_then(Operation::from_symbol)?;

    Some(Expression { a, operation, b })
}

/// Parse a single operand.
///
/// Whitespace is ignored. At most one leading sign is accepted, and commas
/// are only accepted as three-digit group separators (`12,345.5`).
pub fn parse_operand(input: &str) -> Option<Decimal> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let caps = OPERAND.captures(&cleaned)?;

    let int_part = caps.name("int").map_or("", |m| m.as_str());
    let frac_part = caps.name("frac").map_or("", |m| m.as_str());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let sign = match caps.name("sign").map(|m| m.as_str()) {
        Some("-") => "-",
        _ => "",
    };
    // ".5" -> "0.5"
    let int_digits = if int_part.is_empty() {
        "0".to_string()
    } else {
        int_part.replace(',', "")
    };

    Decimal::from_str(&format!("{sign}{int_digits}{frac_part}")).ok()
}

/// Check if the input is just a plain number (no operations).
fn is_plain_number(input: &str) -> bool {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    // Allow optional leading minus for negative numbers
    let to_check = cleaned.strip_prefix('-').unwrap_or(&cleaned);

    !to_check.is_empty()
        && to_check
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
}

/// Check if input contains a binary operator.
fn has_operator(input: &str) -> bool {
    let chars: Vec<char> = input.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if i == 0 || Operation::from_symbol(c).is_none() {
            continue;
        }

        // Look back past any whitespace to find the previous non-space character
        let prev_non_space = chars[..i]
            .iter()
            .rev()
            .find(|&&ch| !ch.is_whitespace())
            .copied();

        // It's binary if it follows a digit (a sign follows another operator)
        if let Some(prev) = prev_non_space
            && prev.is_ascii_digit()
        {
            return true;
        }
    }

    false
}
