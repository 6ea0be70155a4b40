//! Depreciation schedule report.
//!
//! This module defines the row and column contract consumed by report
//! renderers. Rendering itself lives outside the core.

pub mod format;
pub mod types;

pub use format::{date_text, rate_text, term_text};
pub use types::{ColumnKind, DepreciationReport, ReportCell, ReportColumn, ReportRow};
