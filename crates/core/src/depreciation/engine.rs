//! The depreciation engine: one pass over the chart at period close.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};
use writedown_shared::types::Cents;

use super::declining::{self, apply_rate};
use super::error::DepreciationError;
use super::ports::{BalanceLookup, ChartOfAccounts, LotSelection};
use super::straight_line::{self, lot_amounts};
use super::types::{DepreciableAccount, DepreciationMethod, DepreciationResult};
use crate::fiscal::FiscalPeriod;
use crate::ledger::{AccountRef, DepreciationPosting};
use crate::reports::{ReportCell, ReportRow, rate_text, term_text};

/// Computes a period's depreciation over a set of accounts.
///
/// The engine performs no I/O of its own beyond the read-only collaborator
/// calls. A run either returns a complete result or fails outright.
pub struct DepreciationEngine<'a, L> {
    ledger: &'a L,
}

impl<'a, L> DepreciationEngine<'a, L>
where
    L: ChartOfAccounts + BalanceLookup + LotSelection,
{
    /// Creates an engine reading from the given ledger.
    #[must_use]
    pub const fn new(ledger: &'a L) -> Self {
        Self { ledger }
    }

    /// Runs depreciation for `period` over `accounts`, in the given order.
    ///
    /// Accounts that are not depreciable or have a zero balance at period end
    /// are skipped. The first account without a valid contra-account aborts
    /// the whole run.
    #[tracing::instrument(skip_all, fields(period_end = %period.end_date, accounts = accounts.len()))]
    pub fn run(
        &self,
        period: &FiscalPeriod,
        accounts: &[DepreciableAccount],
    ) -> Result<DepreciationResult, DepreciationError> {
        let end = period.end_date;
        let mut out = DepreciationResult::default();

        for account in accounts.iter().filter(|a| a.method.is_depreciable()) {
            let balance = self.ledger.balance(account.id, end)?;
            if balance == 0 {
                debug!(account = account.number, "zero balance, skipping");
                continue;
            }

            let contra = self.resolve_contra(account)?;

            match account.method {
                DepreciationMethod::DecliningBalance { rate_percent } => {
                    self.declining_balance(account, &contra, rate_percent, balance, end, &mut out)?;
                }
                DepreciationMethod::StraightLine => {
                    self.straight_line(account, &contra, end, &mut out)?;
                }
                DepreciationMethod::NotDepreciable => {}
            }
            out.rows.push(ReportRow::blank());
        }

        info!(
            postings = out.postings.len(),
            total = out.total_amount(),
            "depreciation computed"
        );
        Ok(out)
    }

    fn resolve_contra(&self, account: &DepreciableAccount) -> Result<AccountRef, DepreciationError> {
        let resolved = match account.contra_account {
            Some(number) => self.ledger.account_by_number(number)?,
            None => None,
        };

        resolved.ok_or_else(|| {
            warn!(
                account = account.number,
                contra = ?account.contra_account,
                "no valid depreciation posting account"
            );
            DepreciationError::InvalidContraAccount {
                account_number: account.number,
                contra_number: account.contra_account,
            }
        })
    }

    fn declining_balance(
        &self,
        account: &DepreciableAccount,
        contra: &AccountRef,
        rate_percent: Decimal,
        balance: Cents,
        end: NaiveDate,
        out: &mut DepreciationResult,
    ) -> Result<(), DepreciationError> {
        let out_of_range = || DepreciationError::AmountOutOfRange(account.number);
        let whole = apply_rate(balance, rate_percent).ok_or_else(out_of_range)?;
        let source = account.to_ref();
        let source_text = source.to_string();

        out.rows.push(
            ReportRow::new(vec![
                account_link(account),
                ReportCell::Text(account.name.clone()),
                ReportCell::Amount(whole.balance),
                ReportCell::Text(rate_text(rate_percent)),
                ReportCell::Amount(whole.depreciation),
                ReportCell::Amount(whole.remaining),
            ])
            .bolded(),
        );

        if !account.uses_cost_centers {
            debug!(account = account.number, amount = whole.depreciation, "declining balance");
            push_posting(
                out,
                DepreciationPosting {
                    source,
                    contra: contra.clone(),
                    amount: whole.depreciation,
                    cost_center: None,
                    lot: None,
                    source_description: declining::source_description(rate_percent, &whole, None),
                    contra_description: declining::contra_description(&source_text, None),
                },
            );
            return Ok(());
        }

        // Each cost center is rounded on its own; drift against `whole` is accepted.
        for group in self.ledger.cost_center_balances(account.id, end)? {
            let amounts = apply_rate(group.balance, rate_percent).ok_or_else(out_of_range)?;
            let name = group.display_name().to_string();
            debug!(
                account = account.number,
                cost_center = %name,
                amount = amounts.depreciation,
                "declining balance by cost center"
            );

            out.rows.push(ReportRow::new(vec![
                ReportCell::Empty,
                ReportCell::Text(name.clone()),
                ReportCell::Amount(amounts.balance),
                ReportCell::Text(rate_text(rate_percent)),
                ReportCell::Amount(amounts.depreciation),
                ReportCell::Amount(amounts.remaining),
            ]));

            push_posting(
                out,
                DepreciationPosting {
                    source: source.clone(),
                    contra: contra.clone(),
                    amount: amounts.depreciation,
                    cost_center: group.cost_center,
                    lot: None,
                    source_description: declining::source_description(
                        rate_percent,
                        &amounts,
                        Some(&name),
                    ),
                    contra_description: declining::contra_description(&source_text, Some(&name)),
                },
            );
        }
        Ok(())
    }

    fn straight_line(
        &self,
        account: &DepreciableAccount,
        contra: &AccountRef,
        end: NaiveDate,
        out: &mut DepreciationResult,
    ) -> Result<(), DepreciationError> {
        let source = account.to_ref();
        let source_text = source.to_string();

        out.rows.push(
            ReportRow::new(vec![account_link(account), ReportCell::Text(account.name.clone())])
                .bolded(),
        );

        for lot in self.ledger.lots(account.id, false, end)? {
            let Some(term) = lot.term() else {
                debug!(account = account.number, lot = %lot.origin, "no term, skipping lot");
                continue;
            };

            let amounts = lot_amounts(lot.acquired, lot.original_cost, term, lot.balance, end);
            debug!(
                account = account.number,
                lot = %lot.origin,
                elapsed = amounts.elapsed_months,
                amount = amounts.depreciation,
                "straight line"
            );

            out.rows.push(ReportRow::new(vec![
                ReportCell::Date(lot.acquired),
                ReportCell::Text(lot.description.clone()),
                ReportCell::Amount(amounts.balance_before),
                ReportCell::Text(term_text(term)),
                ReportCell::Amount(amounts.depreciation),
                ReportCell::Amount(amounts.balance_after),
            ]));

            push_posting(
                out,
                DepreciationPosting {
                    source: source.clone(),
                    contra: contra.clone(),
                    amount: amounts.depreciation,
                    cost_center: lot.cost_center,
                    lot: Some(lot.origin),
                    source_description: straight_line::source_description(&lot.description),
                    contra_description: straight_line::contra_description(
                        &lot.description,
                        &source_text,
                    ),
                },
            );
        }
        Ok(())
    }
}

fn account_link(account: &DepreciableAccount) -> ReportCell {
    ReportCell::AccountLink {
        account_id: account.id,
        text: account.number.to_string(),
    }
}

fn push_posting(out: &mut DepreciationResult, posting: DepreciationPosting) {
    if let Some(pair) = posting.into_pair() {
        out.postings.push(pair);
    }
}
