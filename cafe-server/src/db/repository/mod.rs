//! Repository Module
//!
//! Free functions over a sqlx executor, one module per table. Functions take
//! any [`sqlx::SqliteExecutor`] so the same query runs on the pool or inside
//! a ledger transaction (`&mut *tx`).

pub mod order_line;
pub mod product;

use thiserror::Error;

use crate::utils::validation::ValidationError;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => RepoError::NotFound("Row not found".into()),
            other => RepoError::Database(other.to_string()),
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(err: ValidationError) -> Self {
        RepoError::Validation(err.0)
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
