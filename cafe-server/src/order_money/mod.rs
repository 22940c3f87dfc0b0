//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64`. Every total and every partial-payment step is
//! computed in `Decimal`, then converted back to `f64` rounded to 2 decimal
//! places for serialization.

use crate::orders::{LedgerError, LedgerResult};
use rust_decimal::prelude::*;
use shared::models::OrderLineView;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> LedgerResult<()> {
    if !value.is_finite() {
        return Err(LedgerError::InvalidPayment(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_else(|| {
            tracing::error!(value = %value, "Decimal out of f64 range, defaulting to zero");
            0.0
        })
}

/// unit price × quantity
pub fn line_total(unit_price: f64, quantity: i32) -> Decimal {
    to_decimal(unit_price) * Decimal::from(quantity)
}

/// Sum of line totals
pub fn lines_total(lines: &[OrderLineView]) -> Decimal {
    lines
        .iter()
        .map(|line| line_total(line.unit_price, line.quantity))
        .sum()
}

/// Fill in `line_total` on a view loaded from the store
pub fn with_line_total(mut line: OrderLineView) -> OrderLineView {
    line.line_total = to_f64(line_total(line.unit_price, line.quantity));
    line
}

/// What a partial payment does to a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaymentOutcome {
    /// Line is removed. `discarded` is the unpaid remainder that no longer
    /// covers a whole unit (zero when fully paid).
    Cleared { discarded: Decimal },
    /// Line keeps `quantity` whole units; `discarded` is the fractional
    /// remainder dropped by re-quantization.
    Requantized { quantity: i32, discarded: Decimal },
}

/// Apply a partial payment to a line of `quantity` × `unit_price`
///
/// The unpaid remainder is turned back into whole units, rounding down:
/// `quantity = floor((line_total - amount_paid) / unit_price)`. Fractions of
/// a unit are dropped, so a payment that leaves 0.99 of a unit clears the
/// line.
pub fn apply_partial_payment(
    unit_price: f64,
    quantity: i32,
    amount_paid: f64,
) -> LedgerResult<PaymentOutcome> {
    require_finite(amount_paid, "amount")?;
    if amount_paid < 0.0 {
        return Err(LedgerError::InvalidPayment(format!(
            "amount must be non-negative, got {}",
            amount_paid
        )));
    }

    let price = to_decimal(unit_price);
    let total = line_total(unit_price, quantity);
    let paid = to_decimal(amount_paid);

    if paid > total {
        return Err(LedgerError::PaymentExceedsTotal {
            paid: amount_paid,
            line_total: to_f64(total),
        });
    }

    let remaining = total - paid;
    if remaining <= Decimal::ZERO || price <= Decimal::ZERO {
        return Ok(PaymentOutcome::Cleared {
            discarded: remaining.max(Decimal::ZERO),
        });
    }

    let units = (remaining / price).floor();
    let discarded = remaining - units * price;
    match units.to_i32() {
        Some(0) | None => Ok(PaymentOutcome::Cleared { discarded }),
        Some(quantity) => Ok(PaymentOutcome::Requantized {
            quantity,
            discarded,
        }),
    }
}

#[cfg(test)]
mod tests;
