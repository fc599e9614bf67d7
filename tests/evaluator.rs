use memcalc::{error::EvalError, evaluate, operator::Operator};

fn assert_value(op: Operator, left: f64, right: Option<f64>, expected: f64) {
    match evaluate(op, left, right) {
        Ok(value) => assert_eq!(value, expected, "{left} {op} {right:?}"),
        Err(e) => panic!("{left} {op} {right:?} failed: {e}"),
    }
}

fn assert_invalid(op: Operator, left: f64, right: Option<f64>) {
    match evaluate(op, left, right) {
        Err(EvalError::InvalidOperands { .. }) => {},
        other => panic!("{left} {op} {right:?} should be invalid, got {other:?}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_value(Operator::Add, 10.0, Some(5.0), 15.0);
    assert_value(Operator::Subtract, 8.0, Some(5.0), 3.0);
    assert_value(Operator::Multiply, 7.0, Some(9.0), 63.0);
    assert_value(Operator::Divide, 10.0, Some(4.0), 2.5);
    assert_value(Operator::Add, -1.5, Some(0.25), -1.25);
}

#[test]
fn division_matches_host_floating_point() {
    let pairs = [(1.0, 3.0), (-7.5, 2.0), (0.0, -4.0), (1e300, 1e-10), (0.1, 0.7)];

    for (a, b) in pairs {
        assert_value(Operator::Divide, a, Some(b), a / b);
    }
}

#[test]
fn division_by_zero_is_always_an_error() {
    for a in [0.0, 1.0, -4.0, 1e308, f64::INFINITY] {
        assert_eq!(evaluate(Operator::Divide, a, Some(0.0)), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate(Operator::Divide, a, Some(-0.0)), Err(EvalError::DivisionByZero));
    }
}

#[test]
fn factorial_base_cases() {
    assert_value(Operator::Factorial, 0.0, None, 1.0);
    assert_value(Operator::Factorial, 1.0, None, 1.0);
    assert_value(Operator::Factorial, 7.0, None, 5040.0);
}

#[test]
fn factorial_recurrence_holds_for_every_accepted_operand() {
    let mut largest_accepted = 0;

    for n in 1..=40_u32 {
        let x = f64::from(n);
        match evaluate(Operator::Factorial, x, None) {
            Ok(current) => {
                assert_eq!(largest_accepted, n - 1, "{n}! accepted after a rejection");
                let previous = evaluate(Operator::Factorial, x - 1.0, None).unwrap();
                assert_eq!(current, x * previous, "{n}!");
                largest_accepted = n;
            },
            Err(EvalError::Overflow { .. }) => {},
            Err(e) => panic!("{n}! failed with {e}"),
        }
    }

    assert_eq!(largest_accepted, 22);
}

#[test]
fn factorial_rejects_negative_and_fractional_operands() {
    assert_invalid(Operator::Factorial, -1.0, None);
    assert_invalid(Operator::Factorial, -0.5, None);
    assert_invalid(Operator::Factorial, 2.5, None);
    assert_invalid(Operator::Factorial, f64::NAN, None);
    assert_invalid(Operator::Factorial, f64::INFINITY, None);
}

#[test]
fn factorial_reports_overflow() {
    assert_value(Operator::Factorial, 22.0, None, 1_124_000_727_777_607_680_000.0);
    for n in [23.0, 28.0, 34.0, 35.0, 170.0] {
        assert!(matches!(evaluate(Operator::Factorial, n, None),
                         Err(EvalError::Overflow { .. })),
                "{n}! should overflow");
    }
    assert!(matches!(evaluate(Operator::Factorial, 1e20, None),
                     Err(EvalError::Overflow { .. })));
}

#[test]
fn wrong_arity_is_invalid() {
    for op in Operator::ALL.into_iter().filter(|op| !op.is_unary()) {
        assert_invalid(op, 1.0, None);
    }
    assert_invalid(Operator::Factorial, 3.0, Some(1.0));
}

#[test]
fn operands_matching_arity_are_accepted() {
    for op in Operator::ALL {
        let right = (op.arity() == 2).then_some(2.0);
        assert!(evaluate(op, 3.0, right).is_ok(), "{op} with {right:?}");
    }
}

#[test]
fn power_uses_real_exponents() {
    assert_value(Operator::Power, 2.0, Some(10.0), 1024.0);
    assert_value(Operator::Power, 2.0, Some(-2.0), 0.25);
    assert_value(Operator::Power, 9.0, Some(0.5), 3.0);

    let irrational = evaluate(Operator::Power, 2.0, Some(0.5)).unwrap();
    assert!((irrational - std::f64::consts::SQRT_2).abs() < 1e-15);
}

#[test]
fn anything_to_the_zero_is_one() {
    for a in [1.0, -1.0, 0.5, -123.456, 1e300, f64::INFINITY] {
        assert_value(Operator::Power, a, Some(0.0), 1.0);
    }
}
