//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    10000123.45 * 100 = 1000012344.9999999  ❌ truncates to ...44        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    i64 cents is the ONLY stored state                                   │
//! │    dollars(), cents_part(), Display are always computed                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overflow Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checked_add / checked_sub / checked_mul / checked_scale / checked_div  │
//! │      └──► MoneyResult<Money>, Err(MoneyError::Overflow) on overflow     │
//! │                                                                         │
//! │  + - * / operators                                                      │
//! │      └──► panic with the MoneyError message (never wrap silently)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! The two lossy paths, float scaling and integer division, both round
//! **half away from zero**. `from_dollars` uses the same mode.
//!
//! ## Usage
//! ```rust
//! use money_core::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//!
//! let doubled = price * 2;                     // $21.98
//! let total = price + Money::from_cents(500);  // $15.99
//! let taxed = price * 1.08;                    // $11.87
//!
//! assert_eq!(doubled.as_cents(), 2198);
//! assert_eq!(total.as_cents(), 1599);
//! assert_eq!(taxed.as_cents(), 1187);
//! ```

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::error::{MoneyError, MoneyResult};
use crate::rounding;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value stored as a signed count of cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Copy**: Arithmetic always yields a new value; only `+=`/`-=` mutate
///
/// ## Thread Safety
/// `Money` is `Send + Sync` and has no interior mutability. A value shared
/// behind `&` can be read from any number of threads. The in-place
/// `+=` / `-=` operators need `&mut`, so an accumulator shared between
/// threads must sit behind a lock (`Mutex<Money>`).
///
/// ## Ordering
/// Comparison is plain integer comparison of the cents value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// Every `i64` is a valid amount.
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.as_cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a dollar count and a cents remainder.
    ///
    /// `cents` is always an unsigned magnitude in `0..=99`. When `dollars`
    /// is negative the remainder pushes further below zero:
    ///
    /// ```text
    /// from_major_minor( 1, 50) ──►  1 * 100 + 50 =  150
    /// from_major_minor(-1, 50) ──► -1 * 100 - 50 = -150   (NOT -50)
    /// from_major_minor( 0, 50) ──►  0 * 100 + 50 =   50
    /// ```
    ///
    /// There is no way to express -$0.50 through this constructor because
    /// there is no negative zero dollars; use [`Money::from_cents`] instead.
    ///
    /// ## Errors
    /// - [`MoneyError::InvalidArgument`] when `cents > 99`
    /// - [`MoneyError::Overflow`] when the total does not fit in i64 cents
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// let price = Money::from_major_minor(12345, 99)?;
    /// assert_eq!(price.as_cents(), 1234599);
    ///
    /// let refund = Money::from_major_minor(-1, 50)?;
    /// assert_eq!(refund.as_cents(), -150);
    ///
    /// assert!(Money::from_major_minor(7, 101).is_err());
    /// # Ok::<(), money_core::MoneyError>(())
    /// ```
    pub fn from_major_minor(dollars: i64, cents: u8) -> MoneyResult<Self> {
        if cents > 99 {
            return Err(MoneyError::InvalidArgument {
                reason: format!("cents value must be between 0..99, got {cents}"),
            });
        }

        let whole = dollars
            .checked_mul(100)
            .ok_or(MoneyError::overflow("construction"))?;
        let remainder = i64::from(cents);

        let total = if dollars < 0 {
            whole.checked_sub(remainder)
        } else {
            whole.checked_add(remainder)
        };

        total
            .map(Money)
            .ok_or(MoneyError::overflow("construction"))
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Creates a Money value from a floating point dollar amount.
    ///
    /// The double is first converted to its shortest decimal form and then
    /// rounded to whole cents, half away from zero. It is never multiplied
    /// by 100 as a double, which would let binary representation error leak
    /// into the cents value.
    ///
    /// ## Errors
    /// - [`MoneyError::InvalidArgument`] for NaN or infinite input
    /// - [`MoneyError::Overflow`] when the amount does not fit in i64 cents
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// assert_eq!(Money::from_dollars(10000123.45)?.as_cents(), 1000012345);
    /// assert_eq!(Money::from_dollars(-123.33)?.as_cents(), -12333);
    /// assert_eq!(Money::from_dollars(0.125)?.as_cents(), 13);
    /// # Ok::<(), money_core::MoneyError>(())
    /// ```
    pub fn from_dollars(dollars: f64) -> MoneyResult<Self> {
        rounding::dollars_to_cents(dollars).map(Money)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the total value in cents.
    #[inline]
    pub const fn as_cents(&self) -> i64 {
        self.0
    }

    /// Returns the value in dollars as a float.
    ///
    /// For display and interop only; the result is subject to normal
    /// floating point representation error.
    #[inline]
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the whole dollar component, truncated toward zero.
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).dollars(), 10);
    /// assert_eq!(Money::from_cents(-1234567).dollars(), -12345);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents component, carrying the sign of the total.
    ///
    /// `dollars() * 100 + cents_part()` always equals `as_cents()`.
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// assert_eq!(Money::from_cents(1099).cents_part(), 99);
    /// assert_eq!(Money::from_cents(-1234567).cents_part(), -67);
    /// ```
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        self.0 % 100
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    ///
    /// ## Panics
    /// Panics for `Money::from_cents(i64::MIN)`, whose magnitude has no i64
    /// representation. Use [`Money::checked_abs`] to get an error instead.
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// let refund = Money::from_cents(-550);
    /// assert_eq!(refund.abs().as_cents(), 550);
    /// ```
    #[inline]
    #[track_caller]
    pub fn abs(&self) -> Self {
        unwrap_op(self.checked_abs())
    }

    // =========================================================================
    // Checked Arithmetic
    // =========================================================================

    /// Returns the absolute value, or an overflow error for `i64::MIN` cents.
    #[inline]
    pub fn checked_abs(&self) -> MoneyResult<Self> {
        self.0
            .checked_abs()
            .map(Money)
            .ok_or(MoneyError::overflow("absolute value"))
    }

    /// Negates the amount.
    #[inline]
    pub fn checked_neg(&self) -> MoneyResult<Self> {
        self.0
            .checked_neg()
            .map(Money)
            .ok_or(MoneyError::overflow("negation"))
    }

    /// Adds two amounts, failing instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// let a = Money::from_cents(1000);
    /// assert_eq!(a.checked_add(Money::from_cents(500))?.as_cents(), 1500);
    /// assert!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)).is_err());
    /// # Ok::<(), money_core::MoneyError>(())
    /// ```
    #[inline]
    pub fn checked_add(self, other: Self) -> MoneyResult<Self> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or(MoneyError::overflow("addition"))
    }

    /// Subtracts `other` from `self`, failing instead of wrapping.
    #[inline]
    pub fn checked_sub(self, other: Self) -> MoneyResult<Self> {
        self.0
            .checked_sub(other.0)
            .map(Money)
            .ok_or(MoneyError::overflow("subtraction"))
    }

    /// Multiplies by a whole quantity. Exact.
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// assert_eq!(unit_price.checked_mul(3)?.as_cents(), 897);
    /// # Ok::<(), money_core::MoneyError>(())
    /// ```
    #[inline]
    pub fn checked_mul(self, quantity: i64) -> MoneyResult<Self> {
        self.0
            .checked_mul(quantity)
            .map(Money)
            .ok_or(MoneyError::overflow("multiplication"))
    }

    /// Scales by a floating point factor such as a tax or discount rate.
    ///
    /// The factor is converted to its shortest decimal form and multiplied
    /// with the exact cents value in fixed point; the product is rounded to
    /// whole cents, half away from zero. This is a lossy operation.
    ///
    /// ```text
    /// $1.00 × 1.1  = 110.0 cents ──► $1.10
    /// $1.00 × 0.95 =  95.0 cents ──► $0.95
    /// $0.05 × 0.5  =   2.5 cents ──► $0.03
    /// ```
    ///
    /// ## Errors
    /// - [`MoneyError::InvalidArgument`] for a NaN or infinite factor
    /// - [`MoneyError::Overflow`] when the result does not fit in i64 cents
    pub fn checked_scale(self, factor: f64) -> MoneyResult<Self> {
        rounding::scale_cents(self.0, factor).map(Money)
    }

    /// Divides by a whole number, rounding half away from zero.
    ///
    /// This is a lossy operation: `$10.00 / 3` is `$3.33` and the lost
    /// cent is NOT carried anywhere. Use [`Money::split`] when the shares
    /// must add back up to the original amount.
    ///
    /// ## Errors
    /// - [`MoneyError::DivisionByZero`] when `divisor == 0`
    /// - [`MoneyError::Overflow`] for `i64::MIN` cents divided by -1
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// assert_eq!(Money::from_cents(10000).checked_div(2)?.as_cents(), 5000);
    /// assert_eq!(Money::from_cents(1000).checked_div(3)?.as_cents(), 333);
    /// assert_eq!(Money::from_cents(1001).checked_div(2)?.as_cents(), 501);
    /// # Ok::<(), money_core::MoneyError>(())
    /// ```
    pub fn checked_div(self, divisor: i64) -> MoneyResult<Self> {
        rounding::div_half_away_from_zero(self.0, divisor).map(Money)
    }

    /// Splits the amount into `parts` shares that add up exactly.
    ///
    /// Shares differ by at most one cent; the leftover cents go to the
    /// first shares.
    ///
    /// ```text
    /// $10.00 split 3 ──► [$3.34, $3.33, $3.33]   (sum: $10.00)
    /// -$0.05 split 2 ──► [-$0.03, -$0.02]       (sum: -$0.05)
    /// ```
    ///
    /// ## Errors
    /// [`MoneyError::DivisionByZero`] when `parts == 0`.
    pub fn split(self, parts: u32) -> MoneyResult<Vec<Self>> {
        if parts == 0 {
            return Err(MoneyError::DivisionByZero);
        }

        let divisor = i64::from(parts);
        let base = self.0 / divisor;
        // |leftover| < parts, so it always fits in usize
        let leftover = (self.0 % divisor).unsigned_abs() as usize;
        let step = self.0.signum();

        Ok((0..parts as usize)
            .map(|i| {
                if i < leftover {
                    Money(base + step)
                } else {
                    Money(base)
                }
            })
            .collect())
    }

    /// Sums an iterator of amounts, failing on the first overflow.
    ///
    /// ## Example
    /// ```rust
    /// use money_core::Money;
    ///
    /// let lines = [Money::from_cents(129999), Money::from_cents(5990)];
    /// assert_eq!(Money::checked_sum(lines)?.as_cents(), 135989);
    /// # Ok::<(), money_core::MoneyError>(())
    /// ```
    pub fn checked_sum<I>(amounts: I) -> MoneyResult<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), Money::checked_add)
    }
}

/// Unwraps the result of a checked operation inside an operator impl.
///
/// Operators cannot return `Result`, so an overflow panics with the
/// error message, the same contract as `std::time::Duration`.
#[inline]
#[track_caller]
fn unwrap_op(result: MoneyResult<Money>) -> Money {
    match result {
        Ok(money) => money,
        Err(err) => panic!("{err}"),
    }
}

// =============================================================================
// Operator Implementations
// =============================================================================

/// Addition of two Money values.
///
/// Panics on overflow; see [`Money::checked_add`].
impl Add for Money {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn add(self, other: Self) -> Self {
        unwrap_op(self.checked_add(other))
    }
}

/// Addition assignment (+=).
///
/// One of the two mutating paths on `Money`.
impl AddAssign for Money {
    #[inline]
    #[track_caller]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn sub(self, other: Self) -> Self {
        unwrap_op(self.checked_sub(other))
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    #[track_caller]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn neg(self) -> Self {
        unwrap_op(self.checked_neg())
    }
}

/// Multiplication by integer (for quantity calculations). Narrower integer
/// types widen with `i64::from`, so `price * 3` infers a single impl.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn mul(self, qty: i64) -> Self {
        unwrap_op(self.checked_mul(qty))
    }
}

/// Scaling by a rate; see [`Money::checked_scale`].
impl Mul<f64> for Money {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn mul(self, factor: f64) -> Self {
        unwrap_op(self.checked_scale(factor))
    }
}

/// Division by integer, rounding half away from zero; see [`Money::checked_div`].
impl Div<i64> for Money {
    type Output = Self;

    #[inline]
    #[track_caller]
    fn div(self, divisor: i64) -> Self {
        unwrap_op(self.checked_div(divisor))
    }
}

impl Sum for Money {
    #[track_caller]
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> Sum<&'a Money> for Money {
    #[track_caller]
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic spread of cents values across the i64 range.
    fn sample_cents() -> Vec<i64> {
        let mut values: Vec<i64> = (-100_000_000..100_000_000).step_by(999_983).collect();
        values.extend([
            0,
            1,
            -1,
            99,
            -99,
            100,
            -100,
            i64::MAX,
            i64::MIN,
            i64::MAX - 1,
            i64::MIN + 1,
        ]);
        values
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.as_cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(12345, 99).unwrap().as_cents(), 1234599);
        assert_eq!(Money::from_major_minor(-12345, 99).unwrap().as_cents(), -1234599);
        assert_eq!(Money::from_major_minor(-1, 50).unwrap().as_cents(), -150);
        assert_eq!(Money::from_major_minor(0, 50).unwrap().as_cents(), 50);
        assert_eq!(
            Money::from_major_minor(12345, 0).unwrap(),
            Money::from_cents(1234500)
        );
    }

    #[test]
    fn test_from_major_minor_rejects_large_remainder() {
        let err = Money::from_major_minor(7, 101).unwrap_err();
        assert!(matches!(err, MoneyError::InvalidArgument { .. }));

        assert!(Money::from_major_minor(7, 100).is_err());
        assert!(Money::from_major_minor(7, 99).is_ok());
    }

    #[test]
    fn test_from_major_minor_overflow() {
        assert_eq!(
            Money::from_major_minor(i64::MAX, 0),
            Err(MoneyError::overflow("construction"))
        );
        let max_dollars = i64::MAX / 100;
        assert_eq!(
            Money::from_major_minor(max_dollars, 7).unwrap().as_cents(),
            i64::MAX
        );
        assert!(Money::from_major_minor(max_dollars, 8).is_err());
    }

    #[test]
    fn test_dollars_and_cents_part_recombine() {
        for cents in sample_cents() {
            let money = Money::from_cents(cents);
            assert_eq!(money.dollars() * 100 + money.cents_part(), cents);
        }

        let negative = Money::from_cents(-1234567);
        assert_eq!(negative.dollars(), -12345);
        assert_eq!(negative.cents_part(), -67);
    }

    #[test]
    fn test_from_dollars() {
        assert_eq!(Money::from_dollars(12345.01).unwrap().as_cents(), 1234501);
        assert_eq!(Money::from_dollars(5432.0).unwrap().as_cents(), 543200);
        assert_eq!(Money::from_dollars(-123.33).unwrap().as_cents(), -12333);
        assert_eq!(Money::from_dollars(-123.00).unwrap().as_cents(), -12300);
        assert_eq!(Money::from_dollars(342.45).unwrap().as_cents(), 34245);
        assert_eq!(Money::from_dollars(10000123.45).unwrap().as_cents(), 1000012345);
        assert_eq!(Money::from_dollars(-70123.45).unwrap().as_cents(), -7012345);
        assert_eq!(Money::from_dollars(0.0).unwrap(), Money::zero());
    }

    #[test]
    fn test_from_dollars_rounds_half_away_from_zero() {
        assert_eq!(Money::from_dollars(0.125).unwrap().as_cents(), 13);
        assert_eq!(Money::from_dollars(-0.125).unwrap().as_cents(), -13);
        assert_eq!(Money::from_dollars(0.124).unwrap().as_cents(), 12);
    }

    #[test]
    fn test_from_dollars_rejects_non_finite() {
        assert!(matches!(
            Money::from_dollars(f64::NAN),
            Err(MoneyError::InvalidArgument { .. })
        ));
        assert!(Money::from_dollars(f64::INFINITY).is_err());
        assert!(matches!(
            Money::from_dollars(1e30),
            Err(MoneyError::Overflow { .. })
        ));
    }

    #[test]
    fn test_as_dollars() {
        assert_eq!(Money::zero().as_dollars(), 0.0);
        assert_eq!(Money::from_cents(-1).as_dollars(), -0.01);
        assert_eq!(Money::from_cents(1).as_dollars(), 0.01);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).as_cents(), 1500);
        assert_eq!((a - b).as_cents(), 500);
        assert_eq!(a * 3, Money::from_cents(3000));
        assert_eq!(a * 3_i64, Money::from_cents(3000));
        assert_eq!(a * i64::from(3_u32), Money::from_cents(3000));
        assert_eq!(Money::from_cents(100) * -1, Money::from_cents(-100));
        assert_eq!(-a, Money::from_cents(-1000));
    }

    #[test]
    fn test_integer_literal_operands_infer() {
        let tripled = Money::from_cents(100) * 3;
        assert_eq!(tripled.as_cents(), 300);

        let halved = Money::from_cents(10_000) / 2;
        assert_eq!(halved.as_cents(), 5000);
        assert!(halved.is_positive());
    }

    #[test]
    fn test_identity_and_inverse() {
        for cents in sample_cents() {
            let money = Money::from_cents(cents);
            assert_eq!(money + Money::zero(), money);
            assert_eq!(money - money, Money::zero());
        }
    }

    #[test]
    fn test_neighbours() {
        let one = Money::from_cents(1);
        let minus_one = Money::from_cents(-1);

        for cents in (-100_000_000..100_000_000).step_by(1_999_993) {
            let value = Money::from_cents(cents);
            let above = Money::from_cents(cents + 1);
            let below = Money::from_cents(cents - 1);

            assert!(above > value);
            assert_eq!(above - one, value);
            assert_eq!(above + minus_one, value);
            assert!(below < value);
            assert_eq!(below + one, value);
            assert_eq!(below - minus_one, value);
        }
    }

    #[test]
    fn test_ordering_matches_integers() {
        let values = sample_cents();
        for &a in &values {
            for &b in values.iter().step_by(17) {
                let (ma, mb) = (Money::from_cents(a), Money::from_cents(b));
                assert_eq!(ma < mb, a < b);
                assert_eq!(ma > mb, a > b);
                assert_eq!(ma <= mb, a <= b);
                assert_eq!(ma >= mb, a >= b);
                assert_eq!(ma == mb, a == b);
                assert_eq!(ma != mb, a != b);
            }
        }
    }

    #[test]
    fn test_checked_overflow() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);
        let one = Money::from_cents(1);

        assert_eq!(max.checked_add(one), Err(MoneyError::overflow("addition")));
        assert_eq!(min.checked_sub(one), Err(MoneyError::overflow("subtraction")));
        assert_eq!(max.checked_mul(2), Err(MoneyError::overflow("multiplication")));
        assert!(min.checked_neg().is_err());
        assert!(min.checked_abs().is_err());
        assert!(min.checked_div(-1).is_err());
    }

    #[test]
    #[should_panic(expected = "Money overflow during addition")]
    fn test_add_operator_panics_on_overflow() {
        let _ = Money::from_cents(i64::MAX) + Money::from_cents(1);
    }

    #[test]
    #[should_panic(expected = "Cannot divide money by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = Money::from_cents(100) / 0;
    }

    #[test]
    fn test_accumulate_in_place() {
        let mut total = Money::zero();
        total += Money::from_cents(250);
        total += Money::from_cents(750);
        total -= Money::from_cents(100);
        assert_eq!(total.as_cents(), 900);
    }

    #[test]
    fn test_float_scaling() {
        let p4 = Money::from_cents(100);
        assert_eq!(p4 * 1.1, Money::from_cents(110));
        assert_eq!(p4 * 0.95, Money::from_cents(95));

        // 1299.99 at 8% = 103.9992 -> 104.00
        let laptop = Money::from_cents(129999);
        assert_eq!((laptop * 0.08).as_cents(), 10400);

        // 2.5 cents rounds away from zero in both directions
        assert_eq!((Money::from_cents(5) * 0.5).as_cents(), 3);
        assert_eq!((Money::from_cents(-5) * 0.5).as_cents(), -3);
    }

    #[test]
    fn test_float_scaling_rejects_non_finite() {
        let price = Money::from_cents(100);
        assert!(matches!(
            price.checked_scale(f64::NAN),
            Err(MoneyError::InvalidArgument { .. })
        ));
        assert!(price.checked_scale(f64::INFINITY).is_err());
        assert!(matches!(
            Money::from_cents(i64::MAX).checked_scale(2.0),
            Err(MoneyError::Overflow { .. })
        ));
    }

    #[test]
    fn test_division_rounds_half_away_from_zero() {
        assert_eq!(Money::from_dollars(100.0).unwrap() / 2, Money::from_cents(5000));
        assert_eq!(Money::from_cents(1000) / 3, Money::from_cents(333));
        assert_eq!(Money::from_cents(2000) / 3, Money::from_cents(667));
        assert_eq!(Money::from_cents(1001) / 2, Money::from_cents(501));
        assert_eq!(Money::from_cents(-1001) / 2, Money::from_cents(-501));
        assert_eq!(Money::from_cents(1001) / -2, Money::from_cents(-501));
        assert_eq!(Money::from_cents(1001) / 2_i64, Money::from_cents(501));
    }

    /// $10.00 / 3 × 3 loses a cent; split() does not.
    #[test]
    fn test_division_precision_loss_documented() {
        let ten_dollars = Money::from_cents(1000);
        let one_third = ten_dollars / 3;
        let reconstructed = one_third * 3;

        assert_eq!(reconstructed.as_cents(), 999);
        assert_eq!((ten_dollars - reconstructed).as_cents(), 1);

        let shares = ten_dollars.split(3).unwrap();
        assert_eq!(
            shares,
            vec![
                Money::from_cents(334),
                Money::from_cents(333),
                Money::from_cents(333)
            ]
        );
        assert_eq!(shares.iter().sum::<Money>(), ten_dollars);
    }

    #[test]
    fn test_split() {
        let shares = Money::from_cents(-5).split(2).unwrap();
        assert_eq!(shares, vec![Money::from_cents(-3), Money::from_cents(-2)]);

        assert_eq!(Money::zero().split(4).unwrap(), vec![Money::zero(); 4]);
        assert_eq!(Money::from_cents(100).split(0), Err(MoneyError::DivisionByZero));

        for cents in sample_cents() {
            let money = Money::from_cents(cents);
            let shares = money.split(7).unwrap();
            assert_eq!(shares.len(), 7);
            assert_eq!(Money::checked_sum(shares.iter().copied()).unwrap(), money);
        }
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());
        assert_eq!(zero, Money::default());

        let positive = Money::from_cents(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), positive);
    }

    #[test]
    fn test_checked_sum() {
        let amounts = vec![Money::from_cents(100), Money::from_cents(250)];
        assert_eq!(Money::checked_sum(amounts).unwrap().as_cents(), 350);
        assert_eq!(Money::checked_sum(Vec::new()).unwrap(), Money::zero());

        let overflowing = vec![Money::from_cents(i64::MAX), Money::from_cents(1)];
        assert!(Money::checked_sum(overflowing).is_err());
    }
}
