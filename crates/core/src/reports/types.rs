//! Report data types.
//!
//! Rows are presentation-neutral: cells carry typed values and the renderer
//! decides alignment and formatting from the column definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use writedown_shared::types::{AccountId, Cents};

use super::format::date_text;
use crate::fiscal::FiscalPeriod;

/// Kind of a report column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Account number or date, fixed width.
    AccountOrDate,
    /// Description, takes the remaining width.
    Flexible,
    /// Currency amount, right aligned.
    Currency,
    /// Rule text (rate or term), right aligned.
    RuleText,
}

/// Report column definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportColumn {
    /// Header title.
    pub title: String,
    /// Column kind.
    pub kind: ColumnKind,
}

/// A single report cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ReportCell {
    /// Empty cell.
    Empty,
    /// Plain text.
    Text(String),
    /// Account number linked to the account.
    AccountLink {
        /// Linked account.
        account_id: AccountId,
        /// Display text.
        text: String,
    },
    /// A date.
    Date(NaiveDate),
    /// Amount in minor units.
    Amount(Cents),
}

/// A report row. A row with no cells is a blank separator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Cells in column order.
    pub cells: Vec<ReportCell>,
    /// Render in bold.
    #[serde(default)]
    pub bold: bool,
}

impl ReportRow {
    /// Creates a row from cells.
    #[must_use]
    pub fn new(cells: Vec<ReportCell>) -> Self {
        Self { cells, bold: false }
    }

    /// Creates a blank separator row.
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Marks the row bold.
    #[must_use]
    pub fn bolded(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Returns true for separator rows.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The depreciation schedule handed to the report sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationReport {
    /// Report title.
    pub title: String,
    /// Period text shown under the title.
    pub period_text: String,
    /// Column definitions.
    pub columns: Vec<ReportColumn>,
    /// Body rows.
    pub rows: Vec<ReportRow>,
}

impl DepreciationReport {
    /// Default report title.
    pub const TITLE: &'static str = "DEPRECIATION SCHEDULE";

    /// Builds the report for a period from engine rows.
    #[must_use]
    pub fn new(title: impl Into<String>, period: &FiscalPeriod, rows: Vec<ReportRow>) -> Self {
        Self {
            title: title.into(),
            period_text: date_text(period.end_date),
            columns: Self::columns(),
            rows,
        }
    }

    /// Column layout of the depreciation schedule.
    #[must_use]
    pub fn columns() -> Vec<ReportColumn> {
        [
            ("Account/Date", ColumnKind::AccountOrDate),
            ("Description", ColumnKind::Flexible),
            ("Balance before", ColumnKind::Currency),
            ("Depreciation rule", ColumnKind::RuleText),
            ("Depreciation", ColumnKind::Currency),
            ("Balance after", ColumnKind::Currency),
        ]
        .into_iter()
        .map(|(title, kind)| ReportColumn {
            title: title.to_string(),
            kind,
        })
        .collect()
    }
}
