//! 统一错误处理
//!
//! Re-exports the shared error types and maps the server's internal error
//! layers onto them:
//!
//! | Source | Error code |
//! |--------|------------|
//! | [`RepoError::NotFound`] | E0003 |
//! | [`RepoError::Validation`] / [`ValidationError`] | E0002 |
//! | [`RepoError::Database`] | E9002 |
//! | [`LedgerError`] | see [`LedgerError::code`] |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::with_message(ErrorCode::TableEmpty, "Table 3 has no orders"))
//!
//! // 返回成功响应
//! Ok(ok(lines))
//! ```

use axum::Json;
use serde::Serialize;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

use crate::db::repository::RepoError;
use crate::orders::LedgerError;
use crate::utils::validation::ValidationError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.0)
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Repo(repo) => repo.into(),
            LedgerError::TableOutOfRange { table_no, max } => {
                AppError::with_message(ErrorCode::TableOutOfRange, err.to_string())
                    .with_detail("table_no", table_no)
                    .with_detail("max", max)
            }
            LedgerError::ProductNotFound(id) => {
                AppError::with_message(ErrorCode::ProductNotFound, err.to_string())
                    .with_detail("product_id", id)
            }
            LedgerError::LineNotFound(id) => {
                AppError::with_message(ErrorCode::OrderLineNotFound, err.to_string())
                    .with_detail("line_id", id)
            }
            _ => AppError::with_message(err.code(), err.to_string()),
        }
    }
}

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success_with_message(message, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_repo_error_mapping() {
        let err: AppError = RepoError::Database("disk I/O error".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.http_status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: AppError = RepoError::Validation("name must not be empty".into()).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_ledger_error_mapping() {
        let err: AppError = LedgerError::TableOutOfRange { table_no: 16, max: 15 }.into();
        assert_eq!(err.code, ErrorCode::TableOutOfRange);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
        let details = err.details.unwrap();
        assert_eq!(details["table_no"], 16);

        let err: AppError = LedgerError::LineNotFound(42).into();
        assert_eq!(err.code, ErrorCode::OrderLineNotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);

        let err: AppError = LedgerError::PaymentExceedsTotal {
            paid: 130.0,
            line_total: 120.0,
        }
        .into();
        assert_eq!(err.code, ErrorCode::PaymentExceedsLineTotal);
        assert!(err.message.contains("130.00"));
    }

    #[test]
    fn test_ok_wraps_in_envelope() {
        let Json(resp) = ok(vec![3, 5]);
        assert_eq!(resp.code, Some(0));
        assert_eq!(resp.data, Some(vec![3, 5]));

        let Json(resp) = ok_with_message(1, "Table closed");
        assert_eq!(resp.message, "Table closed");
    }
}
