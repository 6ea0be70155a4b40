//! Declining-balance depreciation.
//!
//! `depreciation = round(balance * rate / 100)`, rounded half away from zero
//! on minor units, applied to the whole account or independently to each
//! cost center.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use writedown_shared::types::Cents;
use writedown_shared::types::money::format_major;

use crate::reports::rate_text;

/// Result of applying the rate to one balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecliningAmounts {
    /// Balance before depreciation.
    pub balance: Cents,
    /// Depreciation for the period.
    pub depreciation: Cents,
    /// Balance after depreciation.
    pub remaining: Cents,
}

/// Applies a declining-balance rate to a balance.
///
/// Returns `None` if the result does not fit in minor units.
#[must_use]
pub fn apply_rate(balance: Cents, rate_percent: Decimal) -> Option<DecliningAmounts> {
    let exact = Decimal::from(balance).checked_mul(rate_percent)? / Decimal::ONE_HUNDRED;
    let depreciation = exact
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()?;

    Some(DecliningAmounts {
        balance,
        depreciation,
        remaining: balance.checked_sub(depreciation)?,
    })
}

/// Description of the asset-side leg.
#[must_use]
pub fn source_description(
    rate_percent: Decimal,
    amounts: &DecliningAmounts,
    cost_center: Option<&str>,
) -> String {
    let target = cost_center.map(|name| format!("{name} ")).unwrap_or_default();
    format!(
        "Declining-balance depreciation {} {target}balance before {}, after {}",
        rate_text(rate_percent),
        format_major(amounts.balance),
        format_major(amounts.remaining),
    )
}

/// Description of the depreciation-account leg.
#[must_use]
pub fn contra_description(account: &str, cost_center: Option<&str>) -> String {
    match cost_center {
        Some(name) => format!("Declining-balance depreciation of account {account} {name}"),
        None => format!("Declining-balance depreciation of account {account}"),
    }
}
