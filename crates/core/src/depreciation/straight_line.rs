//! Straight-line (term) depreciation of asset lots.
//!
//! Each lot's original cost is spread evenly over its term. The period charge
//! brings the lot's balance down to exactly `original_cost - cumulative_allowed`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use writedown_shared::types::Cents;

use crate::fiscal::months_inclusive;

/// Amounts for one lot in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotAmounts {
    /// Months from acquisition to period end, both inclusive.
    pub elapsed_months: i64,
    /// Depreciation allowed from acquisition through the period end.
    pub cumulative_allowed: Cents,
    /// Lot balance before this run.
    pub balance_before: Cents,
    /// Depreciation for this period.
    pub depreciation: Cents,
    /// Lot balance after this run.
    pub balance_after: Cents,
}

/// `original_cost * elapsed / term`, truncating, capped at the original cost.
#[must_use]
pub fn cumulative_allowed(original_cost: Cents, elapsed_months: i64, term_months: u32) -> Cents {
    let elapsed = i128::from(elapsed_months.max(0));
    let allowed = i128::from(original_cost) * elapsed / i128::from(term_months.max(1));
    if allowed.abs() > i128::from(original_cost).abs() {
        return original_cost;
    }
    Cents::try_from(allowed).unwrap_or(original_cost)
}

/// Computes the period depreciation of a lot as of `period_end`.
#[must_use]
pub fn lot_amounts(
    acquired: NaiveDate,
    original_cost: Cents,
    term_months: u32,
    balance: Cents,
    period_end: NaiveDate,
) -> LotAmounts {
    let elapsed_months = months_inclusive(acquired, period_end);
    let allowed = cumulative_allowed(original_cost, elapsed_months, term_months);
    let depreciation = allowed - original_cost + balance;

    LotAmounts {
        elapsed_months,
        cumulative_allowed: allowed,
        balance_before: balance,
        depreciation,
        balance_after: balance - depreciation,
    }
}

/// Description of the asset-side leg.
#[must_use]
pub fn source_description(lot_description: &str) -> String {
    format!("Straight-line depreciation {lot_description}")
}

/// Description of the depreciation-account leg.
#[must_use]
pub fn contra_description(lot_description: &str, account: &str) -> String {
    format!("Straight-line depreciation {lot_description} on account {account}")
}
