//! Canonical display form: `-$10,000,123.45`.
//!
//! Grouping is done here, every three digits from the right, so output
//! never depends on the process locale.

use std::fmt;

use crate::money::Money;

/// Display implementation shows money as `[-]$<grouped dollars>.<cents>`.
///
/// Width and alignment flags apply to the whole string, so
/// `format!("{:>12}", money)` lines up in tables.
///
/// ## Example
/// ```rust
/// use money_core::Money;
///
/// assert_eq!(Money::from_cents(1000012345).to_string(), "$10,000,123.45");
/// assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
/// assert_eq!(format!("{:>8}|", Money::from_cents(500)), "   $5.00|");
/// ```
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.as_cents();
        // unsigned_abs: i64::MIN has no positive i64 counterpart
        let magnitude = cents.unsigned_abs();
        let sign = if cents < 0 { "-" } else { "" };

        let rendered = format!(
            "{sign}${}.{:02}",
            group_thousands(magnitude / 100),
            magnitude % 100
        );
        f.pad(&rendered)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}
