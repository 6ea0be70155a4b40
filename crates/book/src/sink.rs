//! Posting sink: commits depreciation vouchers into the book.

use tracing::info;
use writedown_core::depreciation::{DepreciationError, PostingSink};
use writedown_core::ledger::{PostingLeg, Voucher};
use writedown_shared::types::{LedgerLineId, VoucherId};

use crate::book::LedgerBook;
use crate::error::{BookError, persistence};
use crate::model::{LedgerLine, VoucherRecord};

fn leg_line(leg: &PostingLeg, voucher: &Voucher, voucher_id: VoucherId) -> LedgerLine {
    LedgerLine {
        id: LedgerLineId::new(),
        voucher: Some(voucher_id),
        date: voucher.date,
        account: leg.account.id,
        entry_type: leg.entry_type,
        amount: leg.amount,
        cost_center: leg.cost_center.as_ref().map(|cc| cc.id),
        lot: leg.lot,
        term_months: None,
        description: leg.description.clone(),
    }
}

impl LedgerBook {
    /// Commits a voucher: every line, the voucher record, and the period mark.
    ///
    /// Nothing is changed unless every check passes.
    pub fn commit_voucher(&mut self, voucher: &Voucher) -> Result<VoucherId, BookError> {
        if let Some(period_id) = voucher.depreciation_period {
            let period = self
                .period(period_id)
                .ok_or(BookError::PeriodNotFound(period_id))?;
            if period.is_depreciation_posted() {
                return Err(BookError::PeriodAlreadyPosted(period_id));
            }
        }

        let voucher_id = VoucherId::new();
        let lines: Vec<LedgerLine> = voucher
            .postings
            .iter()
            .flat_map(|pair| pair.legs())
            .map(|leg| leg_line(leg, voucher, voucher_id))
            .collect();
        for line in &lines {
            self.check_line(line)?;
        }

        let line_count = lines.len();
        self.data.lines.extend(lines);
        self.data.vouchers.push(VoucherRecord {
            id: voucher_id,
            date: voucher.date,
            header: voucher.header.clone(),
            depreciation_period: voucher.depreciation_period,
            attachments: voucher.attachments.clone(),
        });
        if let Some(period) = voucher
            .depreciation_period
            .and_then(|id| self.period_mut(id))
        {
            period.depreciation_voucher = Some(voucher_id);
        }

        info!(voucher = %voucher_id, lines = line_count, "Voucher committed to book");
        Ok(voucher_id)
    }
}

impl PostingSink for LedgerBook {
    fn commit(&mut self, voucher: &Voucher) -> Result<VoucherId, DepreciationError> {
        self.commit_voucher(voucher).map_err(persistence)
    }
}
