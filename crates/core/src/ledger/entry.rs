//! Ledger leg domain types.

use serde::{Deserialize, Serialize};
use writedown_shared::types::{AccountId, Cents, CostCenterId, LedgerLineId};

/// Type of ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Debit entry (increases assets/expenses).
    Debit,
    /// Credit entry (decreases assets/expenses).
    Credit,
}

/// A resolved reference to an account in the chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    /// The account ID.
    pub id: AccountId,
    /// Display number (e.g. 1120).
    pub number: u32,
    /// Display name.
    pub name: String,
}

impl std::fmt::Display for AccountRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.name)
    }
}

/// A resolved reference to a cost center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenterRef {
    /// The cost center ID.
    pub id: CostCenterId,
    /// Display name.
    pub name: String,
}

/// One side of a posting pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingLeg {
    /// The account affected by this leg.
    pub account: AccountRef,
    /// Whether this is a debit or credit.
    pub entry_type: EntryType,
    /// Amount in minor units, never negative.
    pub amount: Cents,
    /// Cost center the leg is allocated to.
    pub cost_center: Option<CostCenterRef>,
    /// Originating lot posting, for straight-line depreciation.
    pub lot: Option<LedgerLineId>,
    /// Generated line description.
    pub description: String,
}

impl PostingLeg {
    /// Returns the signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Cents {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => -self.amount,
        }
    }
}
