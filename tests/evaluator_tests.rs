use turbo_expr::evaluator::{EvalError, Evaluator, evaluate};

fn eval(expr: &str) -> f64 {
    evaluate(expr, 0.0).unwrap_or_else(|e| panic!("{} failed: {}", expr, e))
}

fn eval_x(expr: &str, x: f64) -> f64 {
    evaluate(expr, x).unwrap_or_else(|e| panic!("{} failed: {}", expr, e))
}

fn assert_malformed(expr: &str) {
    match evaluate(expr, 1.0) {
        Err(EvalError::MalformedExpression { expression, .. }) => assert_eq!(expression, expr),
        Ok(v) => panic!("Expected {:?} to be malformed, got {}", expr, v),
    }
}

// ============================================================================
// Precedence and Grouping
// ============================================================================

#[test]
fn test_precedence() {
    assert_eq!(eval("2+3*4"), 14.0);
    assert_eq!(eval("2*3+4"), 10.0);
    assert_eq!(eval("10-6/2"), 7.0);
    assert_eq!(eval("2*3^2"), 18.0);
    assert_eq!(eval("1+2^3*2"), 17.0);
}

#[test]
fn test_parentheses() {
    assert_eq!(eval("(2+3)*4"), 20.0);
    assert_eq!(eval("2*(3+4)"), 14.0);
    assert_eq!(eval("((1+2))"), 3.0);
    assert_eq!(eval("((2+3)*(4-1))^2"), 225.0);
    assert_eq!(eval("(((((7)))))"), 7.0);
}

#[test]
fn test_left_associativity() {
    assert_eq!(eval("10-4-3"), 3.0);
    assert_eq!(eval("100/10/5"), 2.0);
    assert_eq!(eval("8/2*4"), 16.0);
}

#[test]
fn test_power_is_left_associative() {
    // (2^3)^2, not 2^(3^2)
    assert_eq!(eval("2^3^2"), 64.0);
    assert_ne!(eval("2^3^2"), 512.0);
    assert_eq!(eval("2^(3^2)"), 512.0);
}

// ============================================================================
// Literals and the Variable
// ============================================================================

#[test]
fn test_decimal_literals() {
    assert_eq!(eval("1.5+2.5"), 4.0);
    assert_eq!(eval("0.25*4"), 1.0);
    assert_eq!(eval(".5+.5"), 1.0);
    assert_eq!(eval("123"), 123.0);
}

#[test]
fn test_variable_substitution() {
    assert_eq!(eval_x("x*x+1", 3.0), 10.0);
    assert_eq!(eval_x("x", -2.5), -2.5);
    assert_eq!(eval_x("x^2 + 2*x + 1", 4.0), 25.0);
    assert_eq!(eval_x("(x - 3) / 2", 9.0), 3.0);
    assert_eq!(eval_x("x-x", 1e300), 0.0);
}

#[test]
fn test_whitespace() {
    assert_eq!(eval_x("  x  *  2  ", 21.0), 42.0);
    assert_eq!(eval("( 1 + 2 ) * 3"), 9.0);
}

#[test]
fn test_idempotent() {
    let first = eval_x("x^2 / (x + 1)", 3.7);
    let second = eval_x("x^2 / (x + 1)", 3.7);
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn test_evaluator_struct() {
    let result = Evaluator::new("x * 10", 4.0).eval().unwrap();
    assert_eq!(result, 40.0);
}

// ============================================================================
// IEEE-754 Edge Cases
// ============================================================================

#[test]
fn test_division_by_zero_is_not_an_error() {
    assert_eq!(eval("1/0"), f64::INFINITY);
    assert_eq!(eval_x("x/0", -3.0), f64::NEG_INFINITY);
    assert!(eval("0/0").is_nan());
}

#[test]
fn test_power_domain() {
    assert_eq!(eval("4^0.5"), 2.0);
    assert_eq!(eval("2^0-1"), 0.0);
    assert_eq!(eval_x("x^3", -2.0), -8.0);
    assert!(eval_x("x^0.5", -4.0).is_nan());
}

// ============================================================================
// Malformed Input
// ============================================================================

#[test]
fn test_unbalanced_parentheses() {
    assert_malformed("(1+2");
    assert_malformed("1+2)");
    assert_malformed(")");
    assert_malformed("((x)");
}

#[test]
fn test_empty_input() {
    assert_malformed("");
    assert_malformed("   ");
    assert_malformed("()");
}

#[test]
fn test_missing_operands() {
    assert_malformed("1+");
    assert_malformed("*2");
    assert_malformed("-3");
    assert_malformed("2*-3");
    assert_malformed("(+)");
    assert_malformed("+2 3");
    assert_malformed("-3 4");
    assert_malformed("x 1 -");
    assert_malformed("2 3 +");
    assert_malformed("1 2 + 3 *");
}

#[test]
fn test_adjacent_operands() {
    assert_malformed("2x");
    assert_malformed("x2");
    assert_malformed("3 4");
    assert_malformed("(1)(2)");
    assert_malformed("(2 3 +)");
    assert_malformed("2x+");
    assert_malformed("x(1)");
}

#[test]
fn test_operator_position_with_variable() {
    for expr in ["x 1 -", "2x+", "- x 1"] {
        assert!(evaluate(expr, 5.0).is_err(), "Expected {:?} to be malformed", expr);
    }
    assert_eq!(eval_x("x - 1", 5.0), 4.0);
}

#[test]
fn test_bad_tokens() {
    assert_malformed("1.2.3+x");
    assert_malformed(".");
    assert_malformed("sqrt(x)");
    assert_malformed("x > 5");
    assert_malformed("y+1");
}

#[test]
fn test_error_message() {
    let err = evaluate("(1+2", 0.0).unwrap_err();
    assert_eq!(err.to_string(), "malformed expression '(1+2': unmatched '('");

    let err = evaluate("", 0.0).unwrap_err();
    assert_eq!(err.to_string(), "malformed expression '': no value");

    let err = evaluate("1+", 0.0).unwrap_err();
    assert_eq!(err.to_string(), "malformed expression '1+': missing operand for '+'");

    let err = evaluate("2 3 +", 0.0).unwrap_err();
    assert_eq!(err.to_string(), "malformed expression '2 3 +': expected an operator, found '3'");

    let err = evaluate("+2 3", 0.0).unwrap_err();
    assert_eq!(err.to_string(), "malformed expression '+2 3': expected an operand, found '+'");
}
