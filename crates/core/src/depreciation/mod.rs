//! Fiscal-period depreciation (write-off) calculation.
//!
//! This module implements the period-close depreciation run:
//! - Declining-balance depreciation, optionally split by cost center
//! - Straight-line depreciation of individual asset lots
//! - Balanced posting pairs and report rows for each unit of work
//! - Collaborator traits for lookups and posting
//! - The period close service tying the run to a voucher

pub mod declining;
pub mod engine;
pub mod error;
pub mod ports;
pub mod service;
pub mod straight_line;
pub mod types;

#[cfg(test)]
mod engine_props;
#[cfg(test)]
mod testing;

pub use declining::DecliningAmounts;
pub use engine::DepreciationEngine;
pub use error::DepreciationError;
pub use ports::{BalanceLookup, ChartOfAccounts, LotSelection, PostingSink, ReportSink};
pub use service::PeriodCloseService;
pub use straight_line::LotAmounts;
pub use types::{AssetLot, DepreciableAccount, DepreciationMethod, DepreciationResult};
