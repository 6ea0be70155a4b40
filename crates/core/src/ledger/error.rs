//! Ledger error types.

use thiserror::Error;
use writedown_shared::types::Cents;

/// Errors raised when validating postings before they leave the core.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// A posting pair does not balance.
    #[error("Posting is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedPosting {
        /// Debit amount in minor units.
        debit: Cents,
        /// Credit amount in minor units.
        credit: Cents,
    },

    /// A leg carries a negative amount.
    #[error("Posting leg amount cannot be negative: {0}")]
    NegativeAmount(Cents),

    /// A leg is on the wrong side of its pair.
    #[error("Posting leg is on the wrong side of its pair")]
    InvalidEntryType,

    /// A voucher has no postings.
    #[error("Voucher must have at least one posting")]
    EmptyVoucher,
}

impl LedgerError {
    /// Returns the error code for structured output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnbalancedPosting { .. } => "UNBALANCED_POSTING",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::InvalidEntryType => "INVALID_ENTRY_TYPE",
            Self::EmptyVoucher => "EMPTY_VOUCHER",
        }
    }
}
