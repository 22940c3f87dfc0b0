//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound | Self::OrderLineNotFound | Self::ProductNotFound => {
                StatusCode::NOT_FOUND
            }

            // 503 Service Unavailable (client can retry)
            Self::PrinterNotAvailable => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::DatabaseError | Self::PrintFailed | Self::StorageFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation and rule violations)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
