use super::*;

fn view(unit_price: f64, quantity: i32) -> OrderLineView {
    OrderLineView {
        id: 1,
        table_no: 1,
        product_id: 1,
        product_name: "Item".to_string(),
        unit_price,
        quantity,
        note: String::new(),
        line_total: 0.0,
    }
}

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    assert_ne!(a + b, 0.3);

    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_non_finite_defaults_to_zero() {
    assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
    assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
}

#[test]
fn test_to_f64_rounds_half_away_from_zero() {
    assert_eq!(to_f64(Decimal::new(12345, 3)), 12.35);
    assert_eq!(to_f64(Decimal::new(-12345, 3)), -12.35);
}

#[test]
fn test_lines_total() {
    let lines = vec![view(60.0, 2), view(70.0, 1), view(0.1, 3)];
    assert_eq!(to_f64(lines_total(&lines)), 190.3);
    assert_eq!(lines_total(&[]), Decimal::ZERO);
}

#[test]
fn test_with_line_total() {
    let line = with_line_total(view(10.99, 3));
    assert_eq!(line.line_total, 32.97);
}

#[test]
fn test_full_payment_clears() {
    let outcome = apply_partial_payment(60.0, 2, 120.0).unwrap();
    assert_eq!(
        outcome,
        PaymentOutcome::Cleared {
            discarded: Decimal::ZERO
        }
    );
}

#[test]
fn test_partial_payment_requantizes_down() {
    // 120 - 50 = 70 → one whole Espresso left, 10 dropped
    let outcome = apply_partial_payment(60.0, 2, 50.0).unwrap();
    assert_eq!(
        outcome,
        PaymentOutcome::Requantized {
            quantity: 1,
            discarded: Decimal::from(10),
        }
    );
}

#[test]
fn test_exact_unit_payment_keeps_remaining_units() {
    let outcome = apply_partial_payment(75.0, 3, 75.0).unwrap();
    assert_eq!(
        outcome,
        PaymentOutcome::Requantized {
            quantity: 2,
            discarded: Decimal::ZERO,
        }
    );
}

#[test]
fn test_remaining_below_one_unit_clears() {
    // 0.99 of a unit left over
    let outcome = apply_partial_payment(60.0, 1, 0.6).unwrap();
    match outcome {
        PaymentOutcome::Cleared { discarded } => assert_eq!(to_f64(discarded), 59.4),
        other => panic!("expected Cleared, got {:?}", other),
    }
}

#[test]
fn test_zero_payment_keeps_quantity() {
    let outcome = apply_partial_payment(65.0, 4, 0.0).unwrap();
    assert_eq!(
        outcome,
        PaymentOutcome::Requantized {
            quantity: 4,
            discarded: Decimal::ZERO,
        }
    );
}

#[test]
fn test_payment_exceeding_total_rejected() {
    let err = apply_partial_payment(60.0, 1, 60.01).unwrap_err();
    assert!(matches!(err, LedgerError::PaymentExceedsTotal { .. }));
    assert!(err.is_validation());
}

#[test]
fn test_invalid_amounts_rejected() {
    for amount in [-1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = apply_partial_payment(60.0, 1, amount).unwrap_err();
        assert!(
            matches!(err, LedgerError::InvalidPayment(_)),
            "amount {amount} should be rejected"
        );
    }
}

#[test]
fn test_float_noise_does_not_overcharge() {
    // 3 × 0.1 must accept exactly 0.3
    let outcome = apply_partial_payment(0.1, 3, 0.3).unwrap();
    assert_eq!(
        outcome,
        PaymentOutcome::Cleared {
            discarded: Decimal::ZERO
        }
    );
}

#[test]
fn test_payment_on_line_above_price_cap() {
    // 600 000 × 2: the line total exceeds the per-product price limit
    let outcome = apply_partial_payment(600_000.0, 2, 1_100_000.0).unwrap();
    assert_eq!(
        outcome,
        PaymentOutcome::Cleared {
            discarded: Decimal::from(100_000)
        }
    );

    let outcome = apply_partial_payment(600_000.0, 2, 1_200_000.0).unwrap();
    assert_eq!(
        outcome,
        PaymentOutcome::Cleared {
            discarded: Decimal::ZERO
        }
    );
}
