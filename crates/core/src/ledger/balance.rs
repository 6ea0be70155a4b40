//! Balance accumulation over raw ledger lines.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use writedown_shared::types::{Cents, CostCenterId};

use super::entry::{CostCenterRef, EntryType};

/// Debit and credit totals over a set of ledger lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebitCreditTotals {
    /// Total debit amount.
    pub debit: Cents,
    /// Total credit amount.
    pub credit: Cents,
}

impl DebitCreditTotals {
    /// Adds a line amount on the given side.
    pub fn add(&mut self, entry_type: EntryType, amount: Cents) {
        match entry_type {
            EntryType::Debit => self.debit += amount,
            EntryType::Credit => self.credit += amount,
        }
    }

    /// Signed balance: debit minus credit.
    #[must_use]
    pub fn balance(&self) -> Cents {
        self.debit - self.credit
    }
}

/// Balance of one cost center on an account as of a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenterBalance {
    /// The cost center, `None` for lines without one.
    pub cost_center: Option<CostCenterRef>,
    /// Signed balance (debit - credit) in minor units.
    pub balance: Cents,
}

impl CostCenterBalance {
    /// Name shown in reports and descriptions.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.cost_center
            .as_ref()
            .map_or("Unallocated", |cc| cc.name.as_str())
    }
}

/// Sums ledger lines grouped by cost center, ordered by cost center id.
///
/// Lines without a cost center form their own group, ordered first.
pub fn group_by_cost_center<I>(lines: I) -> BTreeMap<Option<CostCenterId>, DebitCreditTotals>
where
    I: IntoIterator<Item = (Option<CostCenterId>, EntryType, Cents)>,
{
    let mut groups: BTreeMap<Option<CostCenterId>, DebitCreditTotals> = BTreeMap::new();
    for (cost_center, entry_type, amount) in lines {
        groups.entry(cost_center).or_default().add(entry_type, amount);
    }
    groups
}
