//! Period close orchestration: pending check, preparation, and commit.

use tracing::info;
use writedown_shared::types::VoucherId;

use super::engine::DepreciationEngine;
use super::error::DepreciationError;
use super::ports::{BalanceLookup, ChartOfAccounts, LotSelection, PostingSink};
use super::types::DepreciationResult;
use crate::fiscal::FiscalPeriod;
use crate::ledger::{Voucher, VoucherAttachment};
use crate::reports::{DepreciationReport, date_text};

/// Name under which the schedule is attached to the voucher.
pub const REPORT_ATTACHMENT_NAME: &str = "Depreciation schedule";

/// Period close service for depreciation.
///
/// This service contains pure business logic with no storage dependencies.
/// Preparation has no side effects; only [`Self::commit`] touches the sink.
pub struct PeriodCloseService;

impl PeriodCloseService {
    /// Returns true if the period has unrecognized depreciation to run.
    ///
    /// Depreciable accounts must carry a non-zero net balance as of the
    /// period end, and the period must not have its depreciation voucher yet.
    pub fn has_pending_depreciation<L: BalanceLookup>(
        period: &FiscalPeriod,
        ledger: &L,
    ) -> Result<bool, DepreciationError> {
        if period.is_depreciation_posted() {
            return Ok(false);
        }
        let totals = ledger.depreciable_totals(period.end_date)?;
        Ok(totals.debit != totals.credit)
    }

    /// Computes the period's depreciation over the whole chart of accounts.
    pub fn prepare<L>(period: &FiscalPeriod, ledger: &L) -> Result<DepreciationResult, DepreciationError>
    where
        L: ChartOfAccounts + BalanceLookup + LotSelection,
    {
        let accounts = ledger.accounts()?;
        DepreciationEngine::new(ledger).run(period, &accounts)
    }

    /// Voucher header for a period, e.g. `Planned depreciation 01.01.2024 - 31.12.2024`.
    #[must_use]
    pub fn voucher_header(period: &FiscalPeriod) -> String {
        format!(
            "Planned depreciation {} - {}",
            date_text(period.start_date),
            date_text(period.end_date)
        )
    }

    /// Builds the voucher dated at period end with the schedule attached.
    #[must_use]
    pub fn build_voucher(
        period: &FiscalPeriod,
        result: DepreciationResult,
        report: DepreciationReport,
    ) -> Voucher {
        Voucher {
            date: period.end_date,
            header: Self::voucher_header(period),
            postings: result.postings,
            depreciation_period: Some(period.id),
            attachments: vec![VoucherAttachment {
                name: REPORT_ATTACHMENT_NAME.to_string(),
                report,
            }],
        }
    }

    /// Commits a prepared result through the sink.
    ///
    /// Returns `Ok(None)` when there is nothing to post. On success the
    /// period records the new voucher.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyPosted` if the period already has its depreciation,
    /// a ledger error if a posting does not balance, or the sink's error.
    pub fn commit<S: PostingSink>(
        period: &mut FiscalPeriod,
        result: DepreciationResult,
        report: DepreciationReport,
        sink: &mut S,
    ) -> Result<Option<VoucherId>, DepreciationError> {
        if let Some(voucher) = period.depreciation_voucher {
            return Err(DepreciationError::AlreadyPosted {
                period_end: period.end_date,
                voucher,
            });
        }
        if result.is_empty() {
            info!(period_end = %period.end_date, "nothing to post");
            return Ok(None);
        }

        let voucher = Self::build_voucher(period, result, report);
        voucher.validate()?;

        let voucher_id = sink.commit(&voucher)?;
        period.depreciation_voucher = Some(voucher_id);
        info!(
            period_end = %period.end_date,
            voucher = %voucher_id,
            postings = voucher.postings.len(),
            total = voucher.total_debit(),
            "depreciation posted"
        );
        Ok(Some(voucher_id))
    }
}
