//! Fixed-point rounding for the lossy Money paths.
//!
//! Every helper here rounds **half away from zero**:
//!
//! ```text
//!  2.5 ──►  3      -2.5 ──► -3
//!  2.4 ──►  2      -2.4 ──► -2
//! ```
//!
//! Floats are converted to [`Decimal`] before any arithmetic so the cents
//! value is computed in base 10, not on the raw double.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{MoneyError, MoneyResult};

const STRATEGY: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Converts a finite f64 to a decimal, or explains why it cannot be.
fn to_decimal(value: f64, what: &str, operation: &'static str) -> MoneyResult<Decimal> {
    if !value.is_finite() {
        return Err(MoneyError::InvalidArgument {
            reason: format!("{what} must be finite, got {value}"),
        });
    }

    Decimal::from_f64(value).ok_or(MoneyError::overflow(operation))
}

/// Rounds a decimal cents amount to a whole i64 count of cents.
fn to_whole_cents(cents: Decimal, operation: &'static str) -> MoneyResult<i64> {
    cents
        .round_dp_with_strategy(0, STRATEGY)
        .to_i64()
        .ok_or(MoneyError::overflow(operation))
}

/// Dollars as f64 → cents, rounded to 2 decimal places.
pub(crate) fn dollars_to_cents(dollars: f64) -> MoneyResult<i64> {
    const OPERATION: &str = "dollar conversion";

    let dollars = to_decimal(dollars, "dollar amount", OPERATION)?;
    let cents = dollars
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(MoneyError::overflow(OPERATION))?;

    to_whole_cents(cents, OPERATION)
}

/// cents × factor, rounded to whole cents.
pub(crate) fn scale_cents(cents: i64, factor: f64) -> MoneyResult<i64> {
    const OPERATION: &str = "scaling";

    let factor = to_decimal(factor, "scale factor", OPERATION)?;
    let scaled = Decimal::from(cents)
        .checked_mul(factor)
        .ok_or(MoneyError::overflow(OPERATION))?;

    to_whole_cents(scaled, OPERATION)
}

/// Integer division of cents with the remainder rounded half away from zero.
pub(crate) fn div_half_away_from_zero(cents: i64, divisor: i64) -> MoneyResult<i64> {
    if divisor == 0 {
        return Err(MoneyError::DivisionByZero);
    }

    // i128 keeps `2 * remainder` and `i64::MIN / -1` in range
    let numerator = i128::from(cents);
    let divisor = i128::from(divisor);

    let mut quotient = numerator / divisor;
    let remainder = numerator % divisor;
    if 2 * remainder.abs() >= divisor.abs() {
        quotient += numerator.signum() * divisor.signum();
    }

    i64::try_from(quotient).map_err(|_| MoneyError::overflow("division"))
}
