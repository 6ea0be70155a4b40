//! Collaborator traits for the depreciation run.
//!
//! These traits are implemented by the storage layer (see the `writedown-book`
//! crate) and by presentation front ends. All calls are synchronous and are
//! not retried: a failure propagates as a run failure.

use chrono::NaiveDate;
use writedown_shared::types::{AccountId, Cents, VoucherId};

use super::error::DepreciationError;
use super::types::{AssetLot, DepreciableAccount};
use crate::ledger::{AccountRef, CostCenterBalance, DebitCreditTotals, Voucher};
use crate::reports::DepreciationReport;

/// Read-only access to the chart of accounts.
pub trait ChartOfAccounts {
    /// All accounts in chart order, with depreciation configuration.
    fn accounts(&self) -> Result<Vec<DepreciableAccount>, DepreciationError>;

    /// Resolves an account number; `None` when no valid account exists.
    fn account_by_number(&self, number: u32) -> Result<Option<AccountRef>, DepreciationError>;
}

/// Read-only balance queries.
pub trait BalanceLookup {
    /// Signed balance (debit - credit) of an account as of a date, inclusive.
    fn balance(&self, account: AccountId, as_of: NaiveDate) -> Result<Cents, DepreciationError>;

    /// Balances of an account grouped by cost center, ordered by cost center id.
    fn cost_center_balances(
        &self,
        account: AccountId,
        as_of: NaiveDate,
    ) -> Result<Vec<CostCenterBalance>, DepreciationError>;

    /// Debit and credit totals over all depreciable accounts as of a date.
    fn depreciable_totals(&self, as_of: NaiveDate) -> Result<DebitCreditTotals, DepreciationError>;
}

/// Selection of asset lots on straight-line accounts.
pub trait LotSelection {
    /// Lots of an account ordered by acquisition date.
    ///
    /// With `closed_only` false, only lots with a non-zero balance as of the
    /// date are returned; with it true, only fully written-off lots.
    fn lots(
        &self,
        account: AccountId,
        closed_only: bool,
        as_of: NaiveDate,
    ) -> Result<Vec<AssetLot>, DepreciationError>;
}

/// Commits vouchers atomically.
pub trait PostingSink {
    /// Commits the voucher, returning its new id.
    ///
    /// Implementations must apply all postings or none, and record the
    /// voucher on its depreciation period in the same commit.
    fn commit(&mut self, voucher: &Voucher) -> Result<VoucherId, DepreciationError>;
}

/// Presents a depreciation schedule. Purely presentational.
pub trait ReportSink {
    /// Renders or prints the report.
    fn render(&mut self, report: &DepreciationReport) -> Result<(), DepreciationError>;
}
