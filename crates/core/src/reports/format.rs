//! Text formatting for report cells and posting descriptions.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Formats a date as `dd.mm.yyyy`.
#[must_use]
pub fn date_text(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Formats a declining-balance rate, e.g. `"25 %"` or `"12.5 %"`.
#[must_use]
pub fn rate_text(rate_percent: Decimal) -> String {
    format!("{} %", rate_percent.normalize())
}

/// Formats an amortization term, e.g. `"2 years"` or `"1 years 6 months"`.
#[must_use]
pub fn term_text(term_months: u32) -> String {
    let (years, months) = (term_months / 12, term_months % 12);
    if months == 0 {
        format!("{years} years")
    } else {
        format!("{years} years {months} months")
    }
}
