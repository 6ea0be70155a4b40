//! In-memory collaborator double for depreciation tests.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use writedown_shared::types::{AccountId, Cents, CostCenterId, LedgerLineId, VoucherId};

use super::error::DepreciationError;
use super::ports::{BalanceLookup, ChartOfAccounts, LotSelection, PostingSink};
use super::types::{AssetLot, DepreciableAccount, DepreciationMethod};
use crate::ledger::{AccountRef, CostCenterBalance, CostCenterRef, DebitCreditTotals, Voucher};

pub const CONTRA_NUMBER: u32 = 6810;

#[derive(Default)]
pub struct FakeLedger {
    pub accounts: Vec<DepreciableAccount>,
    pub balances: HashMap<AccountId, Cents>,
    pub cost_centers: HashMap<AccountId, Vec<CostCenterBalance>>,
    pub lots: HashMap<AccountId, Vec<AssetLot>>,
    pub committed: Vec<Voucher>,
    pub reject_commit: Option<String>,
    pub fail_lookups: bool,
}

impl FakeLedger {
    pub fn new() -> Self {
        let mut ledger = Self::default();
        ledger.accounts.push(DepreciableAccount {
            id: AccountId::new(),
            number: CONTRA_NUMBER,
            name: "Depreciation expense".to_string(),
            method: DepreciationMethod::NotDepreciable,
            contra_account: None,
            uses_cost_centers: false,
        });
        ledger
    }

    pub fn declining(&mut self, number: u32, rate: Decimal, balance: Cents) -> AccountId {
        self.add_account(
            number,
            DepreciationMethod::DecliningBalance { rate_percent: rate },
            balance,
        )
    }

    pub fn straight_line(&mut self, number: u32, balance: Cents) -> AccountId {
        self.add_account(number, DepreciationMethod::StraightLine, balance)
    }

    pub fn add_account(&mut self, number: u32, method: DepreciationMethod, balance: Cents) -> AccountId {
        let id = AccountId::new();
        self.accounts.push(DepreciableAccount {
            id,
            number,
            name: format!("Asset {number}"),
            method,
            contra_account: Some(CONTRA_NUMBER),
            uses_cost_centers: false,
        });
        self.balances.insert(id, balance);
        id
    }

    pub fn account_mut(&mut self, id: AccountId) -> &mut DepreciableAccount {
        self.accounts.iter_mut().find(|a| a.id == id).unwrap()
    }

    pub fn split(&mut self, id: AccountId, groups: &[(&str, Cents)]) {
        self.account_mut(id).uses_cost_centers = true;
        let groups = groups
            .iter()
            .map(|&(name, balance)| CostCenterBalance {
                cost_center: Some(CostCenterRef {
                    id: CostCenterId::new(),
                    name: name.to_string(),
                }),
                balance,
            })
            .collect();
        self.cost_centers.insert(id, groups);
    }

    pub fn add_lot(
        &mut self,
        id: AccountId,
        acquired: NaiveDate,
        cost: Cents,
        term: Option<u32>,
        balance: Cents,
    ) -> LedgerLineId {
        let origin = LedgerLineId::new();
        let description = format!("Lot {}", self.lots.values().map(Vec::len).sum::<usize>() + 1);
        self.lots.entry(id).or_default().push(AssetLot {
            origin,
            acquired,
            original_cost: cost,
            term_months: term,
            balance,
            description,
            cost_center: None,
        });
        origin
    }

    fn check(&self) -> Result<(), DepreciationError> {
        if self.fail_lookups {
            return Err(DepreciationError::Lookup("connection reset".to_string()));
        }
        Ok(())
    }
}

impl ChartOfAccounts for FakeLedger {
    fn accounts(&self) -> Result<Vec<DepreciableAccount>, DepreciationError> {
        self.check()?;
        Ok(self.accounts.clone())
    }

    fn account_by_number(&self, number: u32) -> Result<Option<AccountRef>, DepreciationError> {
        self.check()?;
        Ok(self
            .accounts
            .iter()
            .find(|a| a.number == number)
            .map(DepreciableAccount::to_ref))
    }
}

impl BalanceLookup for FakeLedger {
    fn balance(&self, account: AccountId, _as_of: NaiveDate) -> Result<Cents, DepreciationError> {
        self.check()?;
        Ok(self.balances.get(&account).copied().unwrap_or_default())
    }

    fn cost_center_balances(
        &self,
        account: AccountId,
        _as_of: NaiveDate,
    ) -> Result<Vec<CostCenterBalance>, DepreciationError> {
        self.check()?;
        Ok(self.cost_centers.get(&account).cloned().unwrap_or_default())
    }

    fn depreciable_totals(&self, _as_of: NaiveDate) -> Result<DebitCreditTotals, DepreciationError> {
        self.check()?;
        let balance: Cents = self
            .accounts
            .iter()
            .filter(|a| a.method.is_depreciable())
            .filter_map(|a| self.balances.get(&a.id))
            .sum();
        Ok(DebitCreditTotals {
            debit: balance,
            credit: 0,
        })
    }
}

impl LotSelection for FakeLedger {
    fn lots(
        &self,
        account: AccountId,
        closed_only: bool,
        _as_of: NaiveDate,
    ) -> Result<Vec<AssetLot>, DepreciationError> {
        self.check()?;
        Ok(self
            .lots
            .get(&account)
            .into_iter()
            .flatten()
            .filter(|lot| (lot.balance == 0) == closed_only)
            .cloned()
            .collect())
    }
}

impl PostingSink for FakeLedger {
    fn commit(&mut self, voucher: &Voucher) -> Result<VoucherId, DepreciationError> {
        if let Some(message) = &self.reject_commit {
            return Err(DepreciationError::Persistence(message.clone()));
        }
        self.committed.push(voucher.clone());
        Ok(VoucherId::new())
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
