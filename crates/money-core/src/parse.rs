//! # Parsing
//!
//! Turns human-readable strings into [`Money`].
//!
//! ## Accepted Grammar
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input                   Cleaned            Cents                       │
//! │  ─────────────────────   ────────────────   ─────────────               │
//! │  "$10,000,123.45"    ──► "10000123.45"  ──► 1000012345                  │
//! │  "-$0.01"            ──► "-0.01"        ──► -1                          │
//! │  "$-0.01"            ──► "-0.01"        ──► -1                          │
//! │  "1,234.56"          ──► "1234.56"      ──► 123456                      │
//! │  "$5"                ──► "5"            ──► 500      (whole dollars)    │
//! │                                                                         │
//! │  "$100.0"   ✗ one fractional digit                                      │
//! │  "$100."    ✗ no fractional digits                                      │
//! │  "$100.000" ✗ three fractional digits                                   │
//! │  "12abc"    ✗ not a number                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every `$` and `,` is dropped wherever it appears. The sign is never
//! dropped, so it may sit before or after the currency symbol.
//!
//! The digits left after removing the decimal point are read as a single
//! i64 count of cents; dollars and cents are never parsed separately.

use std::num::IntErrorKind;
use std::str::FromStr;

use crate::error::{MoneyError, MoneyResult};
use crate::money::Money;

const OPERATION: &str = "parsing";

impl Money {
    /// Parses a money string such as `"-$1,234.56"`.
    ///
    /// ## Errors
    /// - [`MoneyError::InvalidFormat`] for a fractional part that is not
    ///   exactly two digits, or any non-numeric leftover
    /// - [`MoneyError::Overflow`] when the amount does not fit in i64 cents
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// assert_eq!(Money::parse("$10,000,123.45")?.as_cents(), 1000012345);
    /// assert_eq!(Money::parse("-$0.01")?.as_cents(), -1);
    /// assert!(Money::parse("$100.0").is_err());
    /// # Ok::<(), money_core::MoneyError>(())
    /// ```
    pub fn parse(input: &str) -> MoneyResult<Self> {
        let cleaned: String = input.chars().filter(|c| !matches!(c, '$' | ',')).collect();

        if cleaned.is_empty() {
            return Err(MoneyError::invalid_format(input, "no digits"));
        }

        let (digits, whole_dollars) = match cleaned.split_once('.') {
            Some((integral, fractional)) => {
                if fractional.len() != 2 {
                    return Err(MoneyError::invalid_format(
                        input,
                        "expected exactly two digits after '.'",
                    ));
                }
                if !fractional.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(MoneyError::invalid_format(
                        input,
                        "fractional part must be digits",
                    ));
                }
                (format!("{integral}{fractional}"), false)
            }
            None => (cleaned, true),
        };

        let amount = digits.parse::<i64>().map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                MoneyError::overflow(OPERATION)
            }
            _ => MoneyError::invalid_format(input, "not a number"),
        })?;

        let cents = if whole_dollars {
            amount
                .checked_mul(100)
                .ok_or(MoneyError::overflow(OPERATION))?
        } else {
            amount
        };

        Ok(Money::from_cents(cents))
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents(input: &str) -> i64 {
        input.parse::<Money>().unwrap().as_cents()
    }

    fn is_invalid_format(input: &str) -> bool {
        matches!(Money::parse(input), Err(MoneyError::InvalidFormat { .. }))
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(cents("$0.00"), 0);
        assert_eq!(cents("$0.01"), 1);
        assert_eq!(cents("$10000123.45"), 1000012345);
        assert_eq!(cents("$10,000,123.45"), 1000012345);
        assert_eq!(cents("$1,234.56"), 123456);
        assert_eq!(cents("1234.56"), 123456);
    }

    #[test]
    fn test_parse_sign_position() {
        assert_eq!(cents("-$0.01"), -1);
        assert_eq!(cents("$-0.01"), -1);
        assert_eq!(cents("-0.01"), -1);
        assert_eq!(cents("-$70,123.45"), -7012345);
        assert_eq!(cents("-$0.00"), 0);

        let v2 = Money::parse("-$0.01").unwrap();
        let v3 = Money::parse("$0.01").unwrap();
        assert!(v2 < Money::zero());
        assert!(v3 > Money::zero());
        assert_eq!(v2 + v3, Money::zero());
    }

    #[test]
    fn test_parse_whole_dollars() {
        assert_eq!(cents("$5"), 500);
        assert_eq!(cents("-$1,000"), -100000);
    }

    #[test]
    fn test_parse_rejects_bad_fraction() {
        assert!(is_invalid_format("$100.0"));
        assert!(is_invalid_format("$100."));
        assert!(is_invalid_format("$100.000"));
        assert!(is_invalid_format("$1.2.3"));
        assert!(is_invalid_format("$1.-5"));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(is_invalid_format(""));
        assert!(is_invalid_format("$"));
        assert!(is_invalid_format("$,"));
        assert!(is_invalid_format("-"));
        assert!(is_invalid_format("12abc"));
        assert!(is_invalid_format("$ 1.00"));
        assert!(is_invalid_format("--1.00"));
        assert!(is_invalid_format("1.0x"));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            Money::parse("$99,999,999,999,999,999.99"),
            Err(MoneyError::overflow(OPERATION))
        );
        assert_eq!(
            Money::parse("-$99,999,999,999,999,999.99"),
            Err(MoneyError::overflow(OPERATION))
        );
        // fits as cents, not as whole dollars
        assert_eq!(
            Money::parse("$92233720368547759"),
            Err(MoneyError::overflow(OPERATION))
        );

        assert_eq!(cents("$92,233,720,368,547,758.07"), i64::MAX);
        assert_eq!(cents("-$92,233,720,368,547,758.08"), i64::MIN);
    }

    #[test]
    fn test_round_trip() {
        let mut values: Vec<i64> = (-10_000_000..10_000_000).step_by(7_919).collect();
        values.extend((1_000..10_000_000).step_by(99_991));
        values.extend([0, 1, -1, 999, -1000, i64::MAX, i64::MIN]);

        for c in values {
            let expected = Money::from_cents(c);
            let parsed: Money = expected.to_string().parse().unwrap();
            assert_eq!(parsed, expected, "round trip of {expected}");
        }
    }
}
