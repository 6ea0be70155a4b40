//! In-memory ledger book for Writedown.
//!
//! This crate provides:
//! - The book model: accounts, cost centers, ledger lines, periods, vouchers
//! - JSON load and save
//! - Implementations of the core collaborator traits (lookups and posting sink)

pub mod book;
pub mod error;
pub mod lookup;
pub mod model;
pub mod sink;

pub use book::LedgerBook;
pub use error::BookError;
pub use model::{BookData, CostCenter, LedgerLine, VoucherRecord};
