//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! Limits are chosen based on:
//! - ESC/POS 80mm printer line width: 48 chars
//! - Reasonable UX limits for names and notes
//! - SQLite TEXT has no built-in length enforcement

use thiserror::Error;

/// Product names
pub const MAX_NAME_LEN: usize = 200;

/// Order line notes ("no sugar", "extra hot", ...)
pub const MAX_NOTE_LEN: usize = 500;

/// Upper bound for a unit price in currency unit
pub const MAX_PRICE: f64 = 1_000_000.0;

/// A rejected input value
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(
    value: &str,
    field: &str,
    max_len: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError(format!("{field} must not be empty")));
    }
    validate_text_len(value, field, max_len)
}

/// Validate that a string is within the length limit (empty is allowed).
pub fn validate_text_len(value: &str, field: &str, max_len: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(ValidationError(format!(
            "{field} is too long ({len} chars, max {max_len})"
        )));
    }
    Ok(())
}

/// Validate a unit price: finite, strictly positive, bounded.
pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if !price.is_finite() {
        return Err(ValidationError("price must be a finite number".into()));
    }
    if price <= 0.0 {
        return Err(ValidationError(format!("price must be positive, got {price}")));
    }
    if price > MAX_PRICE {
        return Err(ValidationError(format!(
            "price exceeds maximum allowed value of {MAX_PRICE}"
        )));
    }
    Ok(())
}
