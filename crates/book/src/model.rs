//! Persistent book model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use writedown_core::depreciation::DepreciableAccount;
use writedown_core::fiscal::FiscalPeriod;
use writedown_core::ledger::{EntryType, VoucherAttachment};
use writedown_shared::types::{
    AccountId, Cents, CostCenterId, FiscalPeriodId, LedgerLineId, VoucherId,
};

/// A cost center lines can be allocated to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenter {
    /// The cost center ID.
    pub id: CostCenterId,
    /// Display name.
    pub name: String,
}

/// A single posted ledger line.
///
/// A debit line on a straight-line account that does not itself reference a
/// lot opens a new asset lot; later lines referencing it through `lot`
/// adjust that lot's balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerLine {
    /// The line ID.
    pub id: LedgerLineId,
    /// Voucher the line was posted in, if any.
    #[serde(default)]
    pub voucher: Option<VoucherId>,
    /// Posting date.
    pub date: NaiveDate,
    /// Account posted to.
    pub account: AccountId,
    /// Debit or credit.
    pub entry_type: EntryType,
    /// Amount in minor units, never negative.
    pub amount: Cents,
    /// Cost center allocation.
    #[serde(default)]
    pub cost_center: Option<CostCenterId>,
    /// Lot this line adjusts.
    #[serde(default)]
    pub lot: Option<LedgerLineId>,
    /// Amortization term of the lot this line opens.
    #[serde(default)]
    pub term_months: Option<u32>,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl LedgerLine {
    /// Creates an unvouchered line.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        account: AccountId,
        entry_type: EntryType,
        amount: Cents,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: LedgerLineId::new(),
            voucher: None,
            date,
            account,
            entry_type,
            amount,
            cost_center: None,
            lot: None,
            term_months: None,
            description: description.into(),
        }
    }

    /// Sets the cost center.
    #[must_use]
    pub fn with_cost_center(mut self, cost_center: CostCenterId) -> Self {
        self.cost_center = Some(cost_center);
        self
    }

    /// Sets the lot reference.
    #[must_use]
    pub fn with_lot(mut self, lot: LedgerLineId) -> Self {
        self.lot = Some(lot);
        self
    }

    /// Sets the amortization term.
    #[must_use]
    pub fn with_term(mut self, months: u32) -> Self {
        self.term_months = Some(months);
        self
    }

    /// Signed amount (positive for debit, negative for credit).
    #[must_use]
    pub fn signed_amount(&self) -> Cents {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => -self.amount,
        }
    }

    /// Returns true if this line opens an asset lot.
    #[must_use]
    pub fn opens_lot(&self) -> bool {
        self.entry_type == EntryType::Debit && self.lot.is_none()
    }
}

/// A committed voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherRecord {
    /// The voucher ID.
    pub id: VoucherId,
    /// Posting date.
    pub date: NaiveDate,
    /// Free-text header.
    pub header: String,
    /// Fiscal period whose depreciation this voucher records.
    #[serde(default)]
    pub depreciation_period: Option<FiscalPeriodId>,
    /// Supporting documents.
    #[serde(default)]
    pub attachments: Vec<VoucherAttachment>,
}

/// Everything stored in a book file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookData {
    /// Chart of accounts in chart order.
    pub accounts: Vec<DepreciableAccount>,
    /// Cost centers.
    pub cost_centers: Vec<CostCenter>,
    /// Posted lines in posting order.
    pub lines: Vec<LedgerLine>,
    /// Fiscal periods.
    pub periods: Vec<FiscalPeriod>,
    /// Committed vouchers.
    pub vouchers: Vec<VoucherRecord>,
}
