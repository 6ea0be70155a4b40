//! Report renderers for the terminal.

use std::io::Write;

use writedown_core::depreciation::{DepreciationError, ReportSink};
use writedown_core::reports::{ColumnKind, DepreciationReport, ReportCell, date_text};
use writedown_shared::types::money::format_major;

const COLUMN_GAP: &str = "  ";

fn output_error(err: impl std::fmt::Display) -> DepreciationError {
    DepreciationError::Report(err.to_string())
}

/// Plain-text table renderer.
pub struct TextRenderer<W> {
    out: W,
    currency_symbol: String,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W, currency_symbol: impl Into<String>) -> Self {
        Self {
            out,
            currency_symbol: currency_symbol.into(),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn cell_text(&self, cell: &ReportCell) -> String {
        match cell {
            ReportCell::Empty => String::new(),
            ReportCell::Text(text) | ReportCell::AccountLink { text, .. } => text.clone(),
            ReportCell::Date(date) => date_text(*date),
            ReportCell::Amount(cents) => format!("{} {}", format_major(*cents), self.currency_symbol),
        }
    }
}

fn pad(text: &str, width: usize, kind: ColumnKind) -> String {
    match kind {
        ColumnKind::Currency | ColumnKind::RuleText => format!("{text:>width$}"),
        ColumnKind::AccountOrDate | ColumnKind::Flexible => format!("{text:<width$}"),
    }
}

fn write_line<W: Write>(out: &mut W, cells: &[String]) -> std::io::Result<()> {
    writeln!(out, "{}", cells.join(COLUMN_GAP).trim_end())
}

impl<W: Write> ReportSink for TextRenderer<W> {
    fn render(&mut self, report: &DepreciationReport) -> Result<(), DepreciationError> {
        let rows: Vec<Vec<String>> = report
            .rows
            .iter()
            .map(|row| row.cells.iter().map(|c| self.cell_text(c)).collect())
            .collect();

        let widths: Vec<usize> = report
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                rows.iter()
                    .filter_map(|cells| cells.get(i))
                    .map(|text| text.chars().count())
                    .chain(std::iter::once(column.title.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let out = &mut self.out;
        writeln!(out, "{}", report.title).map_err(output_error)?;
        writeln!(out, "{}", report.period_text).map_err(output_error)?;
        writeln!(out).map_err(output_error)?;

        let header: Vec<String> = report
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, &width)| pad(&column.title, width, column.kind))
            .collect();
        write_line(out, &header).map_err(output_error)?;
        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        write_line(out, &rule).map_err(output_error)?;

        for cells in &rows {
            let padded: Vec<String> = report
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (column, &width))| {
                    pad(cells.get(i).map_or("", String::as_str), width, column.kind)
                })
                .collect();
            write_line(out, &padded).map_err(output_error)?;
        }
        out.flush().map_err(output_error)
    }
}

/// JSON renderer.
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonRenderer<W> {
    fn render(&mut self, report: &DepreciationReport) -> Result<(), DepreciationError> {
        serde_json::to_writer_pretty(&mut self.out, report).map_err(output_error)?;
        writeln!(self.out).map_err(output_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use writedown_core::fiscal::FiscalPeriod;
    use writedown_core::reports::ReportRow;
    use writedown_shared::types::AccountId;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_report() -> DepreciationReport {
        let period = FiscalPeriod::new(date(2022, 1, 1), date(2022, 6, 30));
        let rows = vec![
            ReportRow::new(vec![
                ReportCell::AccountLink {
                    account_id: AccountId::new(),
                    text: "1160".into(),
                },
                ReportCell::Text("Equipment".into()),
            ])
            .bolded(),
            ReportRow::new(vec![
                ReportCell::Date(date(2022, 1, 1)),
                ReportCell::Text("Forklift".into()),
                ReportCell::Amount(120_000),
                ReportCell::Text("2 years".into()),
                ReportCell::Amount(30_000),
                ReportCell::Amount(90_000),
            ]),
            ReportRow::blank(),
        ];
        DepreciationReport::new(DepreciationReport::TITLE, &period, rows)
    }

    #[test]
    fn test_text_renderer_layout() {
        let mut renderer = TextRenderer::new(Vec::new(), "€");
        renderer.render(&sample_report()).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "DEPRECIATION SCHEDULE");
        assert_eq!(lines[1], "30.06.2022");
        assert!(lines[3].starts_with("Account/Date"));
        assert!(lines[3].ends_with("Balance after"));
        assert!(lines[4].starts_with("------------"));
        assert!(lines[5].starts_with("1160"));
        assert!(lines[5].contains("Equipment"));
        assert!(lines[6].starts_with("01.01.2022"));
        assert!(lines[6].contains("1200.00 €"));
        assert!(lines[6].ends_with("900.00 €"));
        assert_eq!(lines[7], "");
    }

    #[test]
    fn test_amounts_right_aligned() {
        let mut renderer = TextRenderer::new(Vec::new(), "EUR");
        renderer.render(&sample_report()).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        // Header and row end at the same column.
        assert_eq!(lines[3].chars().count(), lines[6].chars().count());
    }

    #[test]
    fn test_json_renderer_round_trips() {
        let report = sample_report();
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.render(&report).unwrap();
        let parsed: DepreciationReport = serde_json::from_slice(&renderer.into_inner()).unwrap();
        assert_eq!(parsed, report);
    }
}
