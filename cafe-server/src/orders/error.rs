//! Ledger error type

use shared::error::ErrorCode;
use thiserror::Error;

use crate::db::repository::RepoError;
use crate::utils::validation::ValidationError;

/// Errors returned by [`OrderLedger`](super::OrderLedger) operations
///
/// Every variant is either a validation failure or a missing entity, except
/// [`LedgerError::Repo`] which wraps storage failures. A failed precondition
/// is always reported before anything is written.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Table {table_no} is out of range (1..={max})")]
    TableOutOfRange { table_no: i32, max: i32 },

    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("Order line {0} not found")]
    LineNotFound(i64),

    #[error("Invalid payment amount: {0}")]
    InvalidPayment(String),

    #[error("Payment {paid:.2} exceeds line total {line_total:.2}")]
    PaymentExceedsTotal { paid: f64, line_total: f64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl LedgerError {
    /// Input was rejected (the caller can correct and retry)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LedgerError::TableOutOfRange { .. }
                | LedgerError::InvalidPayment(_)
                | LedgerError::PaymentExceedsTotal { .. }
                | LedgerError::Validation(_)
                | LedgerError::Repo(RepoError::Validation(_))
        )
    }

    /// A referenced product or line does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LedgerError::ProductNotFound(_)
                | LedgerError::LineNotFound(_)
                | LedgerError::Repo(RepoError::NotFound(_))
        )
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LedgerError::TableOutOfRange { .. } => ErrorCode::TableOutOfRange,
            LedgerError::ProductNotFound(_) => ErrorCode::ProductNotFound,
            LedgerError::LineNotFound(_) => ErrorCode::OrderLineNotFound,
            LedgerError::InvalidPayment(_) => ErrorCode::PaymentInvalidAmount,
            LedgerError::PaymentExceedsTotal { .. } => ErrorCode::PaymentExceedsLineTotal,
            LedgerError::Validation(_) => ErrorCode::ValidationFailed,
            LedgerError::Repo(RepoError::NotFound(_)) => ErrorCode::NotFound,
            LedgerError::Repo(RepoError::Validation(_)) => ErrorCode::ValidationFailed,
            LedgerError::Repo(RepoError::Database(_)) => ErrorCode::DatabaseError,
        }
    }
}

impl From<sqlx::Error> for LedgerError {
    fn from(err: sqlx::Error) -> Self {
        LedgerError::Repo(err.into())
    }
}

/// Result type for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;
