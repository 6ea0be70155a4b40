//! Depreciation domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use writedown_shared::types::{AccountId, Cents, LedgerLineId};

use crate::ledger::{AccountRef, CostCenterRef, PostingPair};
use crate::reports::ReportRow;

/// How an account is depreciated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum DepreciationMethod {
    /// A fixed percentage of the remaining balance each period.
    DecliningBalance {
        /// Percentage of the balance written off per run.
        rate_percent: Decimal,
    },
    /// Each asset lot's original cost spread evenly over its term.
    StraightLine,
    /// Not subject to depreciation.
    NotDepreciable,
}

impl DepreciationMethod {
    /// Returns true for the depreciable classifications.
    #[must_use]
    pub const fn is_depreciable(&self) -> bool {
        !matches!(self, Self::NotDepreciable)
    }
}

/// A chart-of-accounts entry with its depreciation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciableAccount {
    /// The account ID.
    pub id: AccountId,
    /// Display number.
    pub number: u32,
    /// Display name.
    pub name: String,
    /// Depreciation classification.
    pub method: DepreciationMethod,
    /// Number of the account depreciation is charged to.
    pub contra_account: Option<u32>,
    /// Whether depreciation is split by cost center.
    #[serde(default)]
    pub uses_cost_centers: bool,
}

impl DepreciableAccount {
    /// Reference used on posting legs.
    #[must_use]
    pub fn to_ref(&self) -> AccountRef {
        AccountRef {
            id: self.id,
            number: self.number,
            name: self.name.clone(),
        }
    }
}

/// An individually tracked acquisition on a straight-line account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetLot {
    /// The acquisition posting this lot originates from.
    pub origin: LedgerLineId,
    /// Acquisition date.
    pub acquired: NaiveDate,
    /// Original cost in minor units (signed).
    pub original_cost: Cents,
    /// Amortization term in months; lots without one are not depreciated.
    pub term_months: Option<u32>,
    /// Net balance as of the period end.
    pub balance: Cents,
    /// Free-text description.
    pub description: String,
    /// Cost center of the acquisition posting.
    pub cost_center: Option<CostCenterRef>,
}

impl AssetLot {
    /// Returns the term when one is configured.
    #[must_use]
    pub fn term(&self) -> Option<u32> {
        self.term_months.filter(|&months| months > 0)
    }
}

/// Output of one depreciation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationResult {
    /// Report rows in display order.
    pub rows: Vec<ReportRow>,
    /// Balanced posting pairs in generation order.
    pub postings: Vec<PostingPair>,
}

impl DepreciationResult {
    /// Returns true if there is nothing to post.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Sum of all posting pair amounts.
    #[must_use]
    pub fn total_amount(&self) -> Cents {
        self.postings.iter().map(PostingPair::amount).sum()
    }
}
