//! Double-entry bookkeeping primitives used by the depreciation run.
//!
//! - Posting legs and account/cost-center references
//! - Balanced posting pairs
//! - Balance accumulation and cost-center grouping
//! - Vouchers handed to the posting sink
//! - Error types for ledger validation

pub mod balance;
pub mod entry;
pub mod error;
pub mod posting;
pub mod voucher;

pub use balance::{CostCenterBalance, DebitCreditTotals, group_by_cost_center};
pub use entry::{AccountRef, CostCenterRef, EntryType, PostingLeg};
pub use error::LedgerError;
pub use posting::{DepreciationPosting, PostingPair};
pub use voucher::{Voucher, VoucherAttachment};
