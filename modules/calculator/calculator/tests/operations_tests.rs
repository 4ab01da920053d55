#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Behavioral tests for the four operations, their validation and errors.

use calculator::{
    Calculator, CalculatorError, ErrorKind, InvalidInputError, Number, Operand, Operation,
};
use serde_json::json;

fn calc() -> Calculator {
    Calculator::new()
}

fn assert_close(actual: Number, expected: f64) {
    let diff = (actual.as_f64() - expected).abs();
    assert!(diff < 1e-9, "expected {expected}, got {actual}");
}

// =============================================================================
// Addition
// =============================================================================

#[test]
fn test_add_positive_numbers() {
    assert_eq!(calc().add(5, 3).unwrap(), Number::Int(8));
}

#[test]
fn test_add_negative_numbers() {
    assert_eq!(calc().add(-5, -3).unwrap(), Number::Int(-8));
}

#[test]
fn test_add_mixed_signs() {
    assert_eq!(calc().add(5, -3).unwrap(), Number::Int(2));
    assert_eq!(calc().add(-5, 3).unwrap(), Number::Int(-2));
}

#[test]
fn test_add_with_zero() {
    assert_eq!(calc().add(5, 0).unwrap(), Number::Int(5));
    assert_eq!(calc().add(0, 5).unwrap(), Number::Int(5));
}

#[test]
fn test_add_floats() {
    assert_close(calc().add(2.5, 3.7).unwrap(), 6.2);
}

// =============================================================================
// Subtraction, multiplication, division
// =============================================================================

#[test]
fn test_subtract() {
    assert_eq!(calc().subtract(10, 3).unwrap(), Number::Int(7));
    assert_eq!(calc().subtract(3, 10).unwrap(), Number::Int(-7));
    assert_close(calc().subtract(0.3, 0.1).unwrap(), 0.2);
}

#[test]
fn test_multiply() {
    assert_eq!(calc().multiply(7, 8).unwrap(), Number::Int(56));
    assert_eq!(calc().multiply(-7, 8).unwrap(), Number::Int(-56));
    assert_close(calc().multiply(1.5, 4).unwrap(), 6.0);
}

#[test]
fn test_divide() {
    assert_eq!(calc().divide(20, 5).unwrap(), Number::Float(4.0));
    assert_eq!(calc().divide(100, 4).unwrap(), Number::Int(25));
    assert_close(calc().divide(1, 3).unwrap(), 1.0 / 3.0);
}

#[test]
fn test_evaluate_matches_direct_calls() {
    let c = calc();
    for op in Operation::ALL {
        let via_eval = c.evaluate(op, 12, 4).unwrap();
        let direct = match op {
            Operation::Add => c.add(12, 4),
            Operation::Subtract => c.subtract(12, 4),
            Operation::Multiply => c.multiply(12, 4),
            Operation::Divide => c.divide(12, 4),
        }
        .unwrap();
        assert_eq!(via_eval, direct, "mismatch for {op}");
    }
}

// =============================================================================
// Invalid input
// =============================================================================

#[test]
fn test_non_numeric_operand_rejected_by_every_operation() {
    let c = calc();
    for op in Operation::ALL {
        let err = c.evaluate(op, "five", 3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "{op}");
        let err = c.evaluate(op, 3, "five").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput, "{op}");
    }
}

#[test]
fn test_numeric_string_is_not_a_number() {
    let err = calc().add("5", 3).unwrap_err();
    assert!(err.to_string().contains("not a valid number"));
}

#[test]
fn test_non_numeric_json_values_rejected() {
    for value in [json!(null), json!(true), json!([1]), json!({"a": 1})] {
        let err = calc().add(Operand::from(value.clone()), 1).unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InvalidInput(InvalidInputError::NotANumber {
                repr: value.to_string()
            })
        );
    }
}

#[test]
fn test_invalid_input_error_message() {
    let msg = calc().add("five", 3).unwrap_err().to_string();
    assert!(msg.starts_with("Input"));
    assert!(msg.contains("not a valid number"));
    assert_eq!(msg, "Input \"five\" is not a valid number");
}

#[test]
fn test_out_of_range_error_message() {
    let msg = calc().add(2e6, 0).unwrap_err().to_string();
    assert!(msg.starts_with("Input"));
    assert!(msg.contains("outside the valid range"));
    assert!(msg.ends_with(']'));
    assert_eq!(msg, "Input 2000000.0 is outside the valid range [-1000000, 1000000]");

    let msg = calc().add(0, 2_000_000).unwrap_err().to_string();
    assert_eq!(msg, "Input 2000000 is outside the valid range [-1000000, 1000000]");

    let msg = calc().add(1e20, 0).unwrap_err().to_string();
    assert_eq!(msg, "Input 1e20 is outside the valid range [-1000000, 1000000]");
}

#[test]
fn test_value_exceeds_max_and_below_min() {
    assert!(calc().add(2e6, 1).unwrap_err().is_invalid_input());
    assert!(calc().add(-2e6, 1).unwrap_err().is_invalid_input());
    assert!(calc().multiply(1, 2_000_000).unwrap_err().is_invalid_input());
}

#[test]
fn test_non_finite_operands_rejected() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = calc().subtract(v, 1).unwrap_err();
        assert!(err.to_string().contains("outside the valid range"));
    }
}

#[test]
fn test_first_invalid_operand_reports() {
    let err = calc().add("five", 2e6).unwrap_err();
    assert!(err.to_string().contains("not a valid number"));

    let err = calc().add(2e6, "five").unwrap_err();
    assert!(err.to_string().contains("outside the valid range"));
}

// =============================================================================
// Division by zero
// =============================================================================

#[test]
fn test_divide_by_zero() {
    let err = calc().divide(10, 0).unwrap_err();
    assert!(err.is_division_by_zero());
    assert!(!err.is_invalid_input());
    assert_eq!(err.to_string(), "Cannot divide by zero");
}

#[test]
fn test_divide_by_float_zero() {
    assert_eq!(
        calc().divide(10, 0.0).unwrap_err(),
        CalculatorError::DivisionByZero
    );
    assert_eq!(
        calc().divide(0, -0.0).unwrap_err(),
        CalculatorError::DivisionByZero
    );
}

#[test]
fn test_zero_dividend_is_fine() {
    assert_eq!(calc().divide(0, 5).unwrap(), Number::Float(0.0));
}

#[test]
fn test_out_of_range_divisor_reported_as_invalid_input() {
    let err = calc().divide(10, 2e6).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

// =============================================================================
// Boundary values
// =============================================================================

#[test]
fn test_add_at_max_value() {
    assert_eq!(calc().add(1e6, 0).unwrap(), Number::Float(1e6));
    assert_eq!(calc().add(1_000_000, 0).unwrap(), Number::Int(1_000_000));
}

#[test]
fn test_add_at_min_value() {
    assert_eq!(calc().add(-1e6, 0).unwrap(), Number::Float(-1e6));
    assert_eq!(calc().add(-1_000_000, 0).unwrap(), Number::Int(-1_000_000));
}

#[test]
fn test_add_just_over_max_value() {
    assert!(calc().add(1e6 + 1.0, 0).unwrap_err().is_invalid_input());
    assert!(calc().add(1_000_001, 0).unwrap_err().is_invalid_input());
}

#[test]
fn test_add_just_under_min_value() {
    assert!(calc().add(-1e6 - 1.0, 0).unwrap_err().is_invalid_input());
    assert!(calc().add(-1_000_001, 0).unwrap_err().is_invalid_input());
}

#[test]
fn test_result_may_exceed_range() {
    assert_eq!(
        calc().add(1_000_000, 1_000_000).unwrap(),
        Number::Int(2_000_000)
    );
    assert_eq!(
        calc().subtract(-1_000_000, 1_000_000).unwrap(),
        Number::Int(-2_000_000)
    );
}

// =============================================================================
// Client trait
// =============================================================================

#[test]
fn test_client_shares_semantics() {
    let c = calc();
    let client = c.client();
    let a = Operand::from(9);
    let b = Operand::from(3);
    assert_eq!(client.add(&a, &b).unwrap(), c.add(9, 3).unwrap());
    assert_eq!(client.divide(&a, &b).unwrap(), c.divide(9, 3).unwrap());
    assert_eq!(
        client.divide(&a, &Operand::from(0)).unwrap_err(),
        CalculatorError::DivisionByZero
    );
}

#[test]
fn test_client_is_usable_across_threads() {
    let client = calc().client();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let client = std::sync::Arc::clone(&client);
            std::thread::spawn(move || {
                client
                    .multiply(&Operand::from(i), &Operand::from(10))
                    .unwrap()
            })
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        let expected = i64::try_from(i).unwrap() * 10;
        assert_eq!(h.join().unwrap(), Number::Int(expected));
    }
}
