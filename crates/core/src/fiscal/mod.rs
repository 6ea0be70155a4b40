//! Fiscal period management.

pub mod period;

pub use period::{FiscalPeriod, months_inclusive};
