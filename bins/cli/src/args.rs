//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Runs the depreciation close for one fiscal period of a ledger book.
#[derive(Debug, Clone, Parser)]
#[command(name = "writedown")]
#[command(about = "Fiscal-period depreciation for a ledger book")]
pub struct Cli {
    /// Ledger book file; overrides the configured path.
    #[arg(short, long)]
    pub book: Option<PathBuf>,

    /// Last day of the fiscal period (YYYY-MM-DD).
    #[arg(long)]
    pub end: NaiveDate,

    /// First day of the period; adds the period when the book has none ending on --end.
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Post the depreciation voucher and save the book.
    #[arg(long)]
    pub commit: bool,

    /// Print the schedule as JSON instead of a text table.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
