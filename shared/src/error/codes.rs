//! Unified error codes for the café ledger
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order line errors
//! - 5xxx: Payment errors
//! - 6xxx: Product errors
//! - 7xxx: Table errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,

    // ==================== 4xxx: Order line ====================
    /// Order line does not exist
    OrderLineNotFound = 4006,

    // ==================== 5xxx: Payment ====================
    /// Payment amount is negative or not a number
    PaymentInvalidAmount = 5002,
    /// Payment amount exceeds the order line total
    PaymentExceedsLineTotal = 5005,

    // ==================== 6xxx: Product ====================
    ProductNotFound = 6001,

    // ==================== 7xxx: Table ====================
    /// Table number outside the configured range
    TableOutOfRange = 7001,
    /// Table has no open order lines
    TableEmpty = 7003,

    // ==================== 9xxx: System ====================
    DatabaseError = 9002,
    PrinterNotAvailable = 9201,
    PrintFailed = 9202,
    StorageFailed = 9401,
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",

            // Order line
            ErrorCode::OrderLineNotFound => "Order line not found",

            // Payment
            ErrorCode::PaymentInvalidAmount => "Invalid payment amount",
            ErrorCode::PaymentExceedsLineTotal => "Payment exceeds the order line total",

            // Product
            ErrorCode::ProductNotFound => "Product not found",

            // Table
            ErrorCode::TableOutOfRange => "Table number is out of range",
            ErrorCode::TableEmpty => "Table has no open order lines",

            // System
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::PrinterNotAvailable => "Printer is not available",
            ErrorCode::PrintFailed => "Print failed",
            ErrorCode::StorageFailed => "Storage operation failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 value doesn't correspond to any ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),

            // Order line
            4006 => Ok(ErrorCode::OrderLineNotFound),

            // Payment
            5002 => Ok(ErrorCode::PaymentInvalidAmount),
            5005 => Ok(ErrorCode::PaymentExceedsLineTotal),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),

            // Table
            7001 => Ok(ErrorCode::TableOutOfRange),
            7003 => Ok(ErrorCode::TableEmpty),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9201 => Ok(ErrorCode::PrinterNotAvailable),
            9202 => Ok(ErrorCode::PrintFailed),
            9401 => Ok(ErrorCode::StorageFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::OrderLineNotFound.code(), 4006);
        assert_eq!(ErrorCode::PaymentExceedsLineTotal.code(), 5005);
        assert_eq!(ErrorCode::ProductNotFound.code(), 6001);
        assert_eq!(ErrorCode::TableOutOfRange.code(), 7001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(4006), Ok(ErrorCode::OrderLineNotFound));
        assert_eq!(ErrorCode::try_from(7003), Ok(ErrorCode::TableEmpty));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(ErrorCode::try_from(1), Err(InvalidErrorCode(1)));
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "6001");
        let back: ErrorCode = serde_json::from_str("7001").unwrap();
        assert_eq!(back, ErrorCode::TableOutOfRange);
        assert!(serde_json::from_str::<ErrorCode>("1234").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::Success.to_string(), "E0000");
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::TableEmpty.to_string(), "E7003");
    }
}
