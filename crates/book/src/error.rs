//! Book error types.

use thiserror::Error;
use writedown_core::depreciation::DepreciationError;
use writedown_shared::AppError;
use writedown_shared::types::{AccountId, CostCenterId, FiscalPeriodId, LedgerLineId};

/// Errors raised by the ledger book.
#[derive(Debug, Error)]
pub enum BookError {
    /// Reading or writing the book file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The book file is not valid JSON for the book model.
    #[error("Malformed book: {0}")]
    Json(#[from] serde_json::Error),

    /// Account number already used in the chart.
    #[error("Account number {0} already exists")]
    DuplicateAccountNumber(u32),

    /// Account not found.
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Cost center not found.
    #[error("Cost center not found: {0}")]
    CostCenterNotFound(CostCenterId),

    /// Lot origin line not found.
    #[error("Lot not found: {0}")]
    LotNotFound(LedgerLineId),

    /// Fiscal period not found.
    #[error("Fiscal period not found: {0}")]
    PeriodNotFound(FiscalPeriodId),

    /// The period's depreciation is already recorded.
    #[error("Fiscal period {0} already has its depreciation voucher")]
    PeriodAlreadyPosted(FiscalPeriodId),

    /// Line amounts must be non-negative.
    #[error("Line amount cannot be negative: {0}")]
    NegativeAmount(i64),
}

impl BookError {
    /// Returns the error code for structured output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "MALFORMED_BOOK",
            Self::DuplicateAccountNumber(_) => "DUPLICATE_ACCOUNT_NUMBER",
            Self::AccountNotFound(_) => "ACCOUNT_NOT_FOUND",
            Self::CostCenterNotFound(_) => "COST_CENTER_NOT_FOUND",
            Self::LotNotFound(_) => "LOT_NOT_FOUND",
            Self::PeriodNotFound(_) => "PERIOD_NOT_FOUND",
            Self::PeriodAlreadyPosted(_) => "PERIOD_ALREADY_POSTED",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
        }
    }
}

impl From<BookError> for AppError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::Io(_) => Self::Persistence(err.to_string()),
            BookError::Json(_) | BookError::NegativeAmount(_) => Self::Validation(err.to_string()),
            BookError::DuplicateAccountNumber(_) | BookError::PeriodAlreadyPosted(_) => {
                Self::BusinessRule(err.to_string())
            }
            BookError::AccountNotFound(_)
            | BookError::CostCenterNotFound(_)
            | BookError::LotNotFound(_)
            | BookError::PeriodNotFound(_) => Self::NotFound(err.to_string()),
        }
    }
}

/// Lookup failures surface to the engine as `Lookup`.
pub(crate) fn lookup(err: BookError) -> DepreciationError {
    DepreciationError::Lookup(err.to_string())
}

/// Commit failures surface to the engine as `Persistence`.
pub(crate) fn persistence(err: BookError) -> DepreciationError {
    DepreciationError::Persistence(err.to_string())
}
