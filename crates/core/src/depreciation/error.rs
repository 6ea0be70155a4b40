//! Depreciation run error types.

use chrono::NaiveDate;
use thiserror::Error;
use writedown_shared::AppError;
use writedown_shared::types::VoucherId;

use crate::ledger::LedgerError;

/// Errors that abort a depreciation run or its commit.
#[derive(Debug, Error)]
pub enum DepreciationError {
    // ========== Configuration Errors ==========
    /// A depreciable account has no valid account to post depreciation to.
    #[error(
        "Depreciation cannot be posted because account {account_number} has no valid depreciation posting account"
    )]
    InvalidContraAccount {
        /// Number of the misconfigured depreciable account.
        account_number: u32,
        /// The configured contra-account number, if any.
        contra_number: Option<u32>,
    },

    // ========== Collaborator Errors ==========
    /// A balance, account, or lot lookup failed.
    #[error("Lookup failed: {0}")]
    Lookup(String),

    /// The posting sink rejected the voucher.
    #[error("Saving depreciation failed because of a storage error: {0}")]
    Persistence(String),

    // ========== State Errors ==========
    /// The period already has its depreciation posted.
    #[error("Depreciation for the period ending {period_end} is already posted in voucher {voucher}")]
    AlreadyPosted {
        /// Period end date.
        period_end: NaiveDate,
        /// The existing voucher.
        voucher: VoucherId,
    },

    /// The report sink could not present the schedule.
    #[error("Report output failed: {0}")]
    Report(String),

    /// A computed amount does not fit in minor units.
    #[error("Depreciation amount out of range on account {0}")]
    AmountOutOfRange(u32),

    /// Generated postings failed ledger validation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl DepreciationError {
    /// Returns the error code for structured output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidContraAccount { .. } => "INVALID_CONTRA_ACCOUNT",
            Self::Lookup(_) => "LOOKUP_FAILED",
            Self::Persistence(_) => "PERSISTENCE_ERROR",
            Self::AlreadyPosted { .. } => "ALREADY_POSTED",
            Self::Report(_) => "REPORT_FAILED",
            Self::AmountOutOfRange(_) => "AMOUNT_OUT_OF_RANGE",
            Self::Ledger(err) => err.error_code(),
        }
    }

    /// Returns true for configuration errors the user must fix before re-running.
    #[must_use]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::InvalidContraAccount { .. })
    }
}

impl From<DepreciationError> for AppError {
    fn from(err: DepreciationError) -> Self {
        match err {
            DepreciationError::InvalidContraAccount { .. }
            | DepreciationError::AmountOutOfRange(_) => Self::Validation(err.to_string()),
            DepreciationError::AlreadyPosted { .. } => Self::BusinessRule(err.to_string()),
            DepreciationError::Lookup(_)
            | DepreciationError::Persistence(_)
            | DepreciationError::Report(_) => Self::Persistence(err.to_string()),
            DepreciationError::Ledger(_) => Self::Internal(err.to_string()),
        }
    }
}
