//! Vouchers: a dated set of posting pairs committed atomically.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use writedown_shared::types::{Cents, FiscalPeriodId};

use super::error::LedgerError;
use super::posting::PostingPair;
use crate::reports::DepreciationReport;

/// A report attached to a voucher as supporting documentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherAttachment {
    /// Attachment name.
    pub name: String,
    /// The attached report.
    pub report: DepreciationReport,
}

/// A voucher ready to be handed to the posting sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    /// Posting date.
    pub date: NaiveDate,
    /// Free-text header.
    pub header: String,
    /// Posting pairs in generation order.
    pub postings: Vec<PostingPair>,
    /// Fiscal period whose depreciation this voucher records.
    pub depreciation_period: Option<FiscalPeriodId>,
    /// Supporting documents.
    pub attachments: Vec<VoucherAttachment>,
}

impl Voucher {
    /// Total debit amount across all postings.
    #[must_use]
    pub fn total_debit(&self) -> Cents {
        self.postings.iter().map(|p| p.debit.amount).sum()
    }

    /// Total credit amount across all postings.
    #[must_use]
    pub fn total_credit(&self) -> Cents {
        self.postings.iter().map(|p| p.credit.amount).sum()
    }

    /// Validates every posting pair and the voucher totals.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.postings.is_empty() {
            return Err(LedgerError::EmptyVoucher);
        }
        self.postings.iter().try_for_each(PostingPair::validate)?;

        let (debit, credit) = (self.total_debit(), self.total_credit());
        if debit != credit {
            return Err(LedgerError::UnbalancedPosting { debit, credit });
        }
        Ok(())
    }
}
