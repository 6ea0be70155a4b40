//! Shared fixtures for book integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use writedown_book::{LedgerBook, LedgerLine};
use writedown_core::depreciation::{DepreciableAccount, DepreciationMethod};
use writedown_core::fiscal::FiscalPeriod;
use writedown_core::ledger::EntryType;
use writedown_shared::types::{AccountId, FiscalPeriodId, LedgerLineId};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub struct Fixture {
    pub book: LedgerBook,
    pub machinery: AccountId,
    pub equipment: AccountId,
    pub expense: AccountId,
    pub cash: AccountId,
    pub lot: LedgerLineId,
    pub period: FiscalPeriodId,
}

fn account(number: u32, name: &str, method: DepreciationMethod, contra: Option<u32>) -> DepreciableAccount {
    DepreciableAccount {
        id: AccountId::new(),
        number,
        name: name.to_string(),
        method,
        contra_account: contra,
        uses_cost_centers: false,
    }
}

/// Machinery at 25 % declining balance with 1 000.00 on the books, and one
/// 1 200.00 equipment lot on a 24-month term, both acquired 2022-01-01.
/// The period is the first half of 2022.
pub fn fixture() -> Fixture {
    let mut book = LedgerBook::new();
    let machinery = book
        .add_account(account(
            1120,
            "Machinery",
            DepreciationMethod::DecliningBalance { rate_percent: dec!(25) },
            Some(6810),
        ))
        .unwrap();
    let equipment = book
        .add_account(account(1160, "Equipment", DepreciationMethod::StraightLine, Some(6810)))
        .unwrap();
    let cash = book
        .add_account(account(1910, "Cash", DepreciationMethod::NotDepreciable, None))
        .unwrap();
    let expense = book
        .add_account(account(6810, "Depreciation expense", DepreciationMethod::NotDepreciable, None))
        .unwrap();

    let acquired = date(2022, 1, 1);
    book.post_line(LedgerLine::new(acquired, machinery, EntryType::Debit, 100_000, "Press"))
        .unwrap();
    let lot = book
        .post_line(
            LedgerLine::new(acquired, equipment, EntryType::Debit, 120_000, "Forklift").with_term(24),
        )
        .unwrap();
    book.post_line(LedgerLine::new(acquired, cash, EntryType::Credit, 220_000, "Purchases"))
        .unwrap();

    let period = book.add_period(FiscalPeriod::new(date(2022, 1, 1), date(2022, 6, 30)));

    Fixture {
        book,
        machinery,
        equipment,
        expense,
        cash,
        lot,
        period,
    }
}
