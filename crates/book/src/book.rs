//! The ledger book: an in-memory store backed by a JSON file.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};
use writedown_core::depreciation::DepreciableAccount;
use writedown_core::fiscal::FiscalPeriod;
use writedown_shared::types::{AccountId, CostCenterId, FiscalPeriodId, LedgerLineId};

use crate::error::BookError;
use crate::model::{BookData, CostCenter, LedgerLine, VoucherRecord};

/// In-memory ledger book.
///
/// Lookups and commits go through the collaborator trait impls in
/// [`crate::lookup`] and [`crate::sink`].
#[derive(Debug, Clone, Default)]
pub struct LedgerBook {
    pub(crate) data: BookData,
}

impl LedgerBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the underlying data.
    #[must_use]
    pub fn data(&self) -> &BookData {
        &self.data
    }

    /// Loads a book from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BookError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let data: BookData = serde_json::from_str(&raw)?;
        info!(
            path = %path.display(),
            accounts = data.accounts.len(),
            lines = data.lines.len(),
            "Book loaded"
        );
        Ok(Self { data })
    }

    /// Saves the book as pretty-printed JSON.
    ///
    /// Writes to a sibling temporary file first and renames it over the
    /// target, so a failed save leaves the previous file intact.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BookError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.data)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        info!(path = %path.display(), "Book saved");
        Ok(())
    }

    // ========== Chart of accounts ==========

    /// Adds an account to the end of the chart.
    pub fn add_account(&mut self, account: DepreciableAccount) -> Result<AccountId, BookError> {
        if self.account_numbered(account.number).is_some() {
            return Err(BookError::DuplicateAccountNumber(account.number));
        }
        let id = account.id;
        debug!(number = account.number, name = %account.name, "Account added");
        self.data.accounts.push(account);
        Ok(id)
    }

    /// Finds an account by id.
    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<&DepreciableAccount> {
        self.data.accounts.iter().find(|a| a.id == id)
    }

    /// Finds an account by its display number.
    #[must_use]
    pub fn account_numbered(&self, number: u32) -> Option<&DepreciableAccount> {
        self.data.accounts.iter().find(|a| a.number == number)
    }

    // ========== Cost centers ==========

    /// Adds a cost center.
    pub fn add_cost_center(&mut self, name: impl Into<String>) -> CostCenterId {
        let id = CostCenterId::new();
        self.data.cost_centers.push(CostCenter {
            id,
            name: name.into(),
        });
        id
    }

    /// Finds a cost center by id.
    #[must_use]
    pub fn cost_center(&self, id: CostCenterId) -> Option<&CostCenter> {
        self.data.cost_centers.iter().find(|c| c.id == id)
    }

    // ========== Lines ==========

    /// Posts a single line after checking its references.
    pub fn post_line(&mut self, line: LedgerLine) -> Result<LedgerLineId, BookError> {
        self.check_line(&line)?;
        let id = line.id;
        self.data.lines.push(line);
        Ok(id)
    }

    /// Finds a line by id.
    #[must_use]
    pub fn line(&self, id: LedgerLineId) -> Option<&LedgerLine> {
        self.data.lines.iter().find(|l| l.id == id)
    }

    /// Lines of an account dated on or before `as_of`.
    pub fn lines_of(&self, account: AccountId, as_of: NaiveDate) -> impl Iterator<Item = &LedgerLine> {
        self.data
            .lines
            .iter()
            .filter(move |l| l.account == account && l.date <= as_of)
    }

    pub(crate) fn check_line(&self, line: &LedgerLine) -> Result<(), BookError> {
        if line.amount < 0 {
            return Err(BookError::NegativeAmount(line.amount));
        }
        if self.account(line.account).is_none() {
            return Err(BookError::AccountNotFound(line.account));
        }
        if let Some(cc) = line.cost_center
            && self.cost_center(cc).is_none()
        {
            return Err(BookError::CostCenterNotFound(cc));
        }
        if let Some(lot) = line.lot
            && self.line(lot).is_none()
        {
            return Err(BookError::LotNotFound(lot));
        }
        Ok(())
    }

    // ========== Periods ==========

    /// Adds a fiscal period.
    pub fn add_period(&mut self, period: FiscalPeriod) -> FiscalPeriodId {
        let id = period.id;
        self.data.periods.push(period);
        id
    }

    /// Finds a period by id.
    #[must_use]
    pub fn period(&self, id: FiscalPeriodId) -> Option<&FiscalPeriod> {
        self.data.periods.iter().find(|p| p.id == id)
    }

    /// Finds the period ending on the given date.
    #[must_use]
    pub fn period_ending(&self, end_date: NaiveDate) -> Option<&FiscalPeriod> {
        self.data.periods.iter().find(|p| p.end_date == end_date)
    }

    pub(crate) fn period_mut(&mut self, id: FiscalPeriodId) -> Option<&mut FiscalPeriod> {
        self.data.periods.iter_mut().find(|p| p.id == id)
    }

    // ========== Vouchers ==========

    /// Committed vouchers in commit order.
    #[must_use]
    pub fn vouchers(&self) -> &[VoucherRecord] {
        &self.data.vouchers
    }
}
