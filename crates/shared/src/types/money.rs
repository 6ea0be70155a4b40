//! Money amounts in minor currency units.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Ledger amounts are integer minor units (cents); conversion to major units
//! for display goes through `rust_decimal::Decimal`.

use rust_decimal::Decimal;

/// Signed amount in minor currency units (e.g., cents).
pub type Cents = i64;

/// Converts minor units to a major-unit decimal with scale 2.
#[must_use]
pub fn to_major(cents: Cents) -> Decimal {
    Decimal::new(cents, 2)
}

/// Formats minor units as a major-unit string with exactly two decimals.
///
/// `123456` becomes `"1234.56"`, `-5` becomes `"-0.05"`.
#[must_use]
pub fn format_major(cents: Cents) -> String {
    format!("{:.2}", to_major(cents))
}
