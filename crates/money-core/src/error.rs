//! # Error Types
//!
//! Error types for the Money value type.
//!
//! ## Error Taxonomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         MoneyError                                      │
//! │                                                                         │
//! │  InvalidArgument  - Money::from_major_minor(7, 101)                    │
//! │                   - Money::from_dollars(f64::NAN)                      │
//! │                                                                         │
//! │  InvalidFormat    - "$100.0", "$100.", "$100.000", "12abc"             │
//! │                                                                         │
//! │  Overflow         - i64::MAX cents + 1 cent                            │
//! │                   - "$99,999,999,999,999,999.99"                       │
//! │                                                                         │
//! │  DivisionByZero   - amount / 0, amount.split(0)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending input in parse errors
//! 3. Never clamp or wrap: every failure is a typed error

use thiserror::Error;

/// Errors raised while constructing, parsing or combining [`Money`](crate::Money).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// A constructor argument is out of its allowed range.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A string could not be parsed as a money amount.
    ///
    /// ## When This Occurs
    /// - Wrong number of digits after the decimal point
    /// - Characters other than digits, `$`, `,`, `.` and a sign
    /// - Empty input (or input made only of `$` and `,`)
    #[error("Invalid money format '{input}': {reason}")]
    InvalidFormat { input: String, reason: String },

    /// The result does not fit in a signed 64-bit count of cents.
    #[error("Money overflow during {operation}")]
    Overflow { operation: &'static str },

    /// Division (or split) by zero.
    #[error("Cannot divide money by zero")]
    DivisionByZero,
}

impl MoneyError {
    pub(crate) fn invalid_format(input: &str, reason: &str) -> Self {
        MoneyError::InvalidFormat {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) const fn overflow(operation: &'static str) -> Self {
        MoneyError::Overflow { operation }
    }
}

/// Convenience type alias for Results with MoneyError.
pub type MoneyResult<T> = Result<T, MoneyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MoneyError::invalid_format("$100.0", "expected exactly two digits after '.'");
        assert_eq!(
            err.to_string(),
            "Invalid money format '$100.0': expected exactly two digits after '.'"
        );

        assert_eq!(
            MoneyError::overflow("addition").to_string(),
            "Money overflow during addition"
        );
        assert_eq!(
            MoneyError::DivisionByZero.to_string(),
            "Cannot divide money by zero"
        );
    }
}
