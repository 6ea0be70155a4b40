//! Fiscal period types.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use writedown_shared::types::{FiscalPeriodId, VoucherId};

/// A fiscal period closed by a depreciation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalPeriod {
    /// Unique identifier.
    pub id: FiscalPeriodId,
    /// Start date of the period.
    pub start_date: NaiveDate,
    /// End date of the period; the valuation and posting date.
    pub end_date: NaiveDate,
    /// Voucher holding this period's depreciation, once posted.
    #[serde(default)]
    pub depreciation_voucher: Option<VoucherId>,
}

impl FiscalPeriod {
    /// Creates a period with no depreciation posted yet.
    #[must_use]
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: FiscalPeriodId::new(),
            start_date,
            end_date,
            depreciation_voucher: None,
        }
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns true if the two periods share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.contains_date(other.start_date)
            || self.contains_date(other.end_date)
            || other.contains_date(self.start_date)
    }

    /// Returns true once the period's depreciation voucher is recorded.
    #[must_use]
    pub fn is_depreciation_posted(&self) -> bool {
        self.depreciation_voucher.is_some()
    }
}

/// Calendar months from `from` to `to`, counting both endpoint months.
///
/// January to June of the same year is 6.
#[must_use]
pub fn months_inclusive(from: NaiveDate, to: NaiveDate) -> i64 {
    let month_index = |d: NaiveDate| i64::from(d.year()) * 12 + i64::from(d.month());
    month_index(to) - month_index(from) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contains_date() {
        let period = FiscalPeriod::new(date(2024, 1, 1), date(2024, 12, 31));
        assert!(period.contains_date(date(2024, 1, 1)));
        assert!(period.contains_date(date(2024, 12, 31)));
        assert!(!period.contains_date(date(2025, 1, 1)));
        assert!(!period.is_depreciation_posted());
    }

    #[rstest]
    #[case::same(date(2024, 1, 1), date(2024, 12, 31), true)]
    #[case::shares_last_day(date(2024, 12, 31), date(2025, 6, 30), true)]
    #[case::inside(date(2024, 3, 1), date(2024, 3, 31), true)]
    #[case::encloses(date(2023, 7, 1), date(2025, 6, 30), true)]
    #[case::adjacent(date(2025, 1, 1), date(2025, 12, 31), false)]
    #[case::before(date(2023, 1, 1), date(2023, 12, 31), false)]
    fn test_overlaps(#[case] start: NaiveDate, #[case] end: NaiveDate, #[case] expected: bool) {
        let year = FiscalPeriod::new(date(2024, 1, 1), date(2024, 12, 31));
        let other = FiscalPeriod::new(start, end);
        assert_eq!(year.overlaps(&other), expected);
        assert_eq!(other.overlaps(&year), expected);
    }

    #[rstest]
    #[case(date(2022, 1, 15), date(2022, 6, 30), 6)]
    #[case(date(2022, 6, 1), date(2022, 6, 30), 1)]
    #[case(date(2021, 11, 30), date(2022, 2, 1), 4)]
    #[case(date(2020, 1, 1), date(2022, 12, 31), 36)]
    #[case(date(2023, 1, 1), date(2022, 12, 31), 0)]
    fn test_months_inclusive(#[case] from: NaiveDate, #[case] to: NaiveDate, #[case] expected: i64) {
        assert_eq!(months_inclusive(from, to), expected);
    }
}
