//! Balanced debit/credit posting pairs.

use serde::{Deserialize, Serialize};
use writedown_shared::types::{Cents, LedgerLineId};

use super::entry::{AccountRef, CostCenterRef, EntryType, PostingLeg};
use super::error::LedgerError;

/// A balanced pair of ledger legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingPair {
    /// The debit leg.
    pub debit: PostingLeg,
    /// The credit leg.
    pub credit: PostingLeg,
}

impl PostingPair {
    /// Returns the pair amount (equal on both legs when balanced).
    #[must_use]
    pub fn amount(&self) -> Cents {
        self.debit.amount
    }

    /// Returns true if debit amount equals credit amount.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.debit.amount == self.credit.amount
    }

    /// Checks the pair invariants: sides, non-negative amounts and balance.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.debit.entry_type != EntryType::Debit || self.credit.entry_type != EntryType::Credit {
            return Err(LedgerError::InvalidEntryType);
        }
        for leg in [&self.debit, &self.credit] {
            if leg.amount < 0 {
                return Err(LedgerError::NegativeAmount(leg.amount));
            }
        }
        if !self.is_balanced() {
            return Err(LedgerError::UnbalancedPosting {
                debit: self.debit.amount,
                credit: self.credit.amount,
            });
        }
        Ok(())
    }

    /// Returns both legs, debit first.
    pub fn legs(&self) -> impl Iterator<Item = &PostingLeg> {
        [&self.debit, &self.credit].into_iter()
    }
}

/// A depreciation charge moving value from an asset account to its
/// depreciation account.
///
/// A positive amount credits the source and debits the contra account. A
/// negative amount is posted with the sides swapped so both legs stay
/// non-negative.
#[derive(Debug, Clone)]
pub struct DepreciationPosting {
    /// The depreciated asset account.
    pub source: AccountRef,
    /// The account depreciation is charged to.
    pub contra: AccountRef,
    /// Signed depreciation amount in minor units.
    pub amount: Cents,
    /// Cost center tagged on both legs.
    pub cost_center: Option<CostCenterRef>,
    /// Originating lot, tagged on the source leg.
    pub lot: Option<LedgerLineId>,
    /// Description of the source leg.
    pub source_description: String,
    /// Description of the contra leg.
    pub contra_description: String,
}

impl DepreciationPosting {
    /// Builds the posting pair, or `None` when the amount is zero.
    #[must_use]
    pub fn into_pair(self) -> Option<PostingPair> {
        if self.amount == 0 {
            return None;
        }
        let amount = self.amount.abs();
        let source_side = if self.amount > 0 {
            EntryType::Credit
        } else {
            EntryType::Debit
        };

        let source = PostingLeg {
            account: self.source,
            entry_type: source_side,
            amount,
            cost_center: self.cost_center.clone(),
            lot: self.lot,
            description: self.source_description,
        };
        let contra = PostingLeg {
            account: self.contra,
            entry_type: opposite(source_side),
            amount,
            cost_center: self.cost_center,
            lot: None,
            description: self.contra_description,
        };

        Some(match source_side {
            EntryType::Credit => PostingPair {
                debit: contra,
                credit: source,
            },
            EntryType::Debit => PostingPair {
                debit: source,
                credit: contra,
            },
        })
    }
}

const fn opposite(entry_type: EntryType) -> EntryType {
    match entry_type {
        EntryType::Debit => EntryType::Credit,
        EntryType::Credit => EntryType::Debit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use writedown_shared::types::{AccountId, CostCenterId};

    fn account(number: u32, name: &str) -> AccountRef {
        AccountRef {
            id: AccountId::new(),
            number,
            name: name.to_string(),
        }
    }

    fn posting(amount: Cents) -> DepreciationPosting {
        DepreciationPosting {
            source: account(1120, "Machinery"),
            contra: account(6810, "Depreciation expense"),
            amount,
            cost_center: Some(CostCenterRef {
                id: CostCenterId::new(),
                name: "Workshop".to_string(),
            }),
            lot: Some(LedgerLineId::new()),
            source_description: "source".to_string(),
            contra_description: "contra".to_string(),
        }
    }

    #[test]
    fn test_positive_amount_credits_source() {
        let pair = posting(25_000).into_pair().unwrap();
        assert_eq!(pair.credit.account.number, 1120);
        assert_eq!(pair.debit.account.number, 6810);
        assert_eq!(pair.amount(), 25_000);
        assert!(pair.credit.lot.is_some());
        assert!(pair.debit.lot.is_none());
        assert_eq!(pair.credit.description, "source");
        assert!(pair.validate().is_ok());
    }

    #[test]
    fn test_negative_amount_swaps_sides() {
        let pair = posting(-4_000).into_pair().unwrap();
        assert_eq!(pair.debit.account.number, 1120);
        assert_eq!(pair.credit.account.number, 6810);
        assert_eq!(pair.debit.amount, 4_000);
        assert_eq!(pair.credit.amount, 4_000);
        assert!(pair.debit.lot.is_some());
        assert!(pair.validate().is_ok());
    }

    #[test]
    fn test_zero_amount_produces_no_pair() {
        assert!(posting(0).into_pair().is_none());
    }

    #[test]
    fn test_cost_center_on_both_legs() {
        let pair = posting(100).into_pair().unwrap();
        assert_eq!(pair.debit.cost_center, pair.credit.cost_center);
        assert_eq!(pair.debit.cost_center.unwrap().name, "Workshop");
    }

    #[test]
    fn test_validate_rejects_unbalanced() {
        let mut pair = posting(100).into_pair().unwrap();
        pair.debit.amount = 99;
        assert_eq!(
            pair.validate(),
            Err(LedgerError::UnbalancedPosting {
                debit: 99,
                credit: 100
            })
        );
    }

    #[test]
    fn test_validate_rejects_swapped_sides() {
        let mut pair = posting(100).into_pair().unwrap();
        std::mem::swap(&mut pair.debit, &mut pair.credit);
        assert_eq!(pair.validate(), Err(LedgerError::InvalidEntryType));
    }

    #[test]
    fn test_signed_legs_sum_to_zero() {
        let pair = posting(-321).into_pair().unwrap();
        let sum: Cents = pair.legs().map(PostingLeg::signed_amount).sum();
        assert_eq!(sum, 0);
    }
}
