//! Read-side collaborator implementations.

use chrono::NaiveDate;
use writedown_core::depreciation::{
    AssetLot, BalanceLookup, ChartOfAccounts, DepreciableAccount, DepreciationError, LotSelection,
};
use writedown_core::ledger::{
    AccountRef, CostCenterBalance, CostCenterRef, DebitCreditTotals, group_by_cost_center,
};
use writedown_shared::types::{AccountId, Cents, CostCenterId};

use crate::book::LedgerBook;
use crate::error::{BookError, lookup};
use crate::model::LedgerLine;

impl LedgerBook {
    fn cost_center_ref(&self, id: CostCenterId) -> Result<CostCenterRef, BookError> {
        self.cost_center(id)
            .map(|cc| CostCenterRef {
                id: cc.id,
                name: cc.name.clone(),
            })
            .ok_or(BookError::CostCenterNotFound(id))
    }

    /// Balance of a lot as of a date: its own line plus later adjustments.
    fn lot_balance(&self, origin: &LedgerLine, as_of: NaiveDate) -> Cents {
        origin.signed_amount()
            + self
                .data
                .lines
                .iter()
                .filter(|l| l.lot == Some(origin.id) && l.date <= as_of)
                .map(LedgerLine::signed_amount)
                .sum::<Cents>()
    }
}

impl ChartOfAccounts for LedgerBook {
    fn accounts(&self) -> Result<Vec<DepreciableAccount>, DepreciationError> {
        Ok(self.data.accounts.clone())
    }

    fn account_by_number(&self, number: u32) -> Result<Option<AccountRef>, DepreciationError> {
        Ok(self.account_numbered(number).map(DepreciableAccount::to_ref))
    }
}

impl BalanceLookup for LedgerBook {
    fn balance(&self, account: AccountId, as_of: NaiveDate) -> Result<Cents, DepreciationError> {
        if self.account(account).is_none() {
            return Err(lookup(BookError::AccountNotFound(account)));
        }
        Ok(self.lines_of(account, as_of).map(LedgerLine::signed_amount).sum())
    }

    fn cost_center_balances(
        &self,
        account: AccountId,
        as_of: NaiveDate,
    ) -> Result<Vec<CostCenterBalance>, DepreciationError> {
        let groups = group_by_cost_center(
            self.lines_of(account, as_of)
                .map(|l| (l.cost_center, l.entry_type, l.amount)),
        );

        groups
            .into_iter()
            .map(|(cost_center, totals)| {
                let cost_center = cost_center
                    .map(|id| self.cost_center_ref(id))
                    .transpose()
                    .map_err(lookup)?;
                Ok(CostCenterBalance {
                    cost_center,
                    balance: totals.balance(),
                })
            })
            .collect()
    }

    fn depreciable_totals(&self, as_of: NaiveDate) -> Result<DebitCreditTotals, DepreciationError> {
        let mut totals = DebitCreditTotals::default();
        for account in self.data.accounts.iter().filter(|a| a.method.is_depreciable()) {
            for line in self.lines_of(account.id, as_of) {
                totals.add(line.entry_type, line.amount);
            }
        }
        Ok(totals)
    }
}

impl LotSelection for LedgerBook {
    fn lots(
        &self,
        account: AccountId,
        closed_only: bool,
        as_of: NaiveDate,
    ) -> Result<Vec<AssetLot>, DepreciationError> {
        let mut origins: Vec<&LedgerLine> = self
            .lines_of(account, as_of)
            .filter(|l| l.opens_lot())
            .collect();
        origins.sort_by_key(|l| (l.date, l.id));

        let mut lots = Vec::with_capacity(origins.len());
        for origin in origins {
            let balance = self.lot_balance(origin, as_of);
            if (balance == 0) != closed_only {
                continue;
            }
            let cost_center = origin
                .cost_center
                .map(|id| self.cost_center_ref(id))
                .transpose()
                .map_err(lookup)?;
            lots.push(AssetLot {
                origin: origin.id,
                acquired: origin.date,
                original_cost: origin.signed_amount(),
                term_months: origin.term_months,
                balance,
                description: origin.description.clone(),
                cost_center,
            });
        }
        Ok(lots)
    }
}
