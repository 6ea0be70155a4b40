//! Property-based tests for the depreciation engine.
//!
//! Feature: period-close, engine-wide invariants over generated charts.

use proptest::prelude::*;
use rust_decimal::Decimal;
use writedown_shared::types::Cents;

use super::error::DepreciationError;
use super::service::PeriodCloseService;
use super::testing::{FakeLedger, date};
use crate::fiscal::FiscalPeriod;

/// One generated depreciable account.
#[derive(Debug, Clone)]
enum GenAccount {
    Declining {
        rate: u32,
        balance: Cents,
        split: Vec<Cents>,
    },
    StraightLine {
        lots: Vec<(u32, Cents, u32, Cents)>,
    },
}

fn balance_strategy() -> impl Strategy<Value = Cents> {
    -10_000_000i64..10_000_000i64
}

fn account_strategy() -> impl Strategy<Value = GenAccount> {
    prop_oneof![
        (
            1u32..=100,
            balance_strategy(),
            prop::collection::vec(balance_strategy(), 0..4)
        )
            .prop_map(|(rate, balance, split)| GenAccount::Declining {
                rate,
                balance,
                split
            }),
        prop::collection::vec(
            // (months before period end, original cost, term, already written off)
            (0u32..120, 1i64..10_000_000, 1u32..120, 0i64..10_000_000),
            1..4
        )
        .prop_map(|lots| GenAccount::StraightLine { lots }),
    ]
}

fn build(accounts: &[GenAccount]) -> FakeLedger {
    let end = date(2024, 12, 31);
    let mut ledger = FakeLedger::new();
    for (i, account) in accounts.iter().enumerate() {
        let number = 1100 + u32::try_from(i).unwrap();
        match account {
            GenAccount::Declining { rate, balance, split } => {
                let id = ledger.declining(number, Decimal::from(*rate), *balance);
                if !split.is_empty() {
                    let groups: Vec<(&str, Cents)> = split.iter().map(|&b| ("cc", b)).collect();
                    ledger.split(id, &groups);
                }
            }
            GenAccount::StraightLine { lots } => {
                let total: Cents = lots.iter().map(|&(_, cost, _, off)| cost - off.min(cost)).sum();
                let id = ledger.straight_line(number, total.max(1));
                for &(months_ago, cost, term, off) in lots {
                    let acquired = end - chrono::Months::new(months_ago);
                    ledger.add_lot(id, acquired, cost, Some(term), cost - off.min(cost));
                }
            }
        }
    }
    ledger
}

fn period() -> FiscalPeriod {
    FiscalPeriod::new(date(2024, 1, 1), date(2024, 12, 31))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every emitted posting pair is balanced with non-negative legs.
    #[test]
    fn prop_every_pair_balanced(accounts in prop::collection::vec(account_strategy(), 0..6)) {
        let ledger = build(&accounts);
        let result = PeriodCloseService::prepare(&period(), &ledger).unwrap();

        for pair in &result.postings {
            prop_assert!(pair.is_balanced());
            prop_assert!(pair.debit.amount > 0);
            prop_assert!(pair.validate().is_ok());
        }
    }

    /// Each account block ends with exactly one blank separator row.
    #[test]
    fn prop_one_separator_per_account(accounts in prop::collection::vec(account_strategy(), 0..6)) {
        let ledger = build(&accounts);
        let result = PeriodCloseService::prepare(&period(), &ledger).unwrap();

        let qualifying = accounts
            .iter()
            .filter(|a| match a {
                GenAccount::Declining { balance, .. } => *balance != 0,
                GenAccount::StraightLine { .. } => true,
            })
            .count();
        let blanks = result.rows.iter().filter(|r| r.is_blank()).count();
        prop_assert_eq!(blanks, qualifying);
        prop_assert!(result.rows.last().is_none_or(|r| r.is_blank()));
    }

    /// A single misconfigured account anywhere aborts with zero postings and names it.
    #[test]
    fn prop_misconfigured_account_aborts(
        accounts in prop::collection::vec(account_strategy(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut ledger = build(&accounts);
        let depreciable: Vec<_> = ledger
            .accounts
            .iter()
            .filter(|a| a.method.is_depreciable())
            .map(|a| a.id)
            .collect();
        let bad = depreciable[pick.index(depreciable.len())];
        ledger.balances.insert(bad, 1_000);
        ledger.account_mut(bad).contra_account = Some(1);
        let bad_number = ledger.account_mut(bad).number;

        let err = PeriodCloseService::prepare(&period(), &ledger).unwrap_err();

        match err {
            DepreciationError::InvalidContraAccount { account_number, .. } => {
                // The first misconfigured account in chart order is reported.
                prop_assert_eq!(account_number, bad_number);
            }
            other => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Split accounts post one pair per non-zero cost center, whatever the whole-account figure.
    #[test]
    fn prop_split_rounding_drift_is_tolerated(
        rate in 1u32..=100,
        split in prop::collection::vec(1i64..1_000, 1..6),
    ) {
        let total: Cents = split.iter().sum();
        let accounts = vec![GenAccount::Declining { rate, balance: total, split: split.clone() }];
        let ledger = build(&accounts);
        let result = PeriodCloseService::prepare(&period(), &ledger).unwrap();

        let expected: Cents = split
            .iter()
            .map(|&b| super::declining::apply_rate(b, Decimal::from(rate)).unwrap().depreciation)
            .sum();
        prop_assert_eq!(result.total_amount(), expected);
    }
}
