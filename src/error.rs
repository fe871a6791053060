//! Error type shared by the calculator library.

use thiserror::Error;

/// Errors produced while building or performing a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The divisor of a division was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in the decimal range.
    #[error("overflow while performing {operation}")]
    Overflow { operation: &'static str },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("config error: {0}")]
    Config(String),
}

impl CalcError {
    /// Short message shown in place of a result.
    pub fn short_message(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Division by zero",
            Self::Overflow { .. } => "Overflow",
            Self::UnknownOperation(_) => "Unknown operation",
            Self::Clipboard(_) => "Clipboard unavailable",
            Self::Config(_) => "Invalid config",
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
