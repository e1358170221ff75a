use zenfractal_compute::expr::{Node, MAX_NESTING_DEPTH};
use zenfractal_compute::{parse_symbolic, Complex, ExprError, Runtime, SyntaxError, SyntaxErrorKind};

fn c(re: f64, im: f64) -> Complex<f64> {
    Complex::new(re, im)
}

fn runtime_with(bindings: &[(char, Complex<f64>)]) -> Runtime<f64> {
    let mut rt = Runtime::new();
    for (letter, value) in bindings {
        rt.set_value(*letter, *value).unwrap();
    }
    rt
}

fn syntax(source: &str) -> SyntaxError {
    match Runtime::<f64>::new().eval(source) {
        Err(ExprError::Syntax(e)) => e,
        other => panic!("expected syntax error for {source:?}, got {other:?}"),
    }
}

// ============================================================================
// Precedence and associativity
// ============================================================================

#[test]
fn multiplication_binds_tighter_than_addition() {
    let rt = runtime_with(&[('a', c(2.0, 0.0)), ('b', c(3.0, 0.0)), ('d', c(4.0, 0.0))]);
    assert_eq!(rt.eval("a+b*d").unwrap(), c(14.0, 0.0));
    assert_eq!(rt.eval("a*b+d").unwrap(), c(10.0, 0.0));
}

#[test]
fn subtraction_is_left_associative() {
    let rt = runtime_with(&[('a', c(10.0, 0.0)), ('b', c(3.0, 0.0)), ('d', c(2.0, 0.0))]);
    // (10 - 3) - 2, not 10 - (3 - 2)
    assert_eq!(rt.eval("a-b-d").unwrap(), c(5.0, 0.0));
    assert_eq!(parse_symbolic::<f64>("a-b-d").unwrap().to_string(), "((a-b)-d)");
}

#[test]
fn parentheses_override_precedence() {
    let rt = runtime_with(&[('a', c(2.0, 0.0)), ('b', c(3.0, 0.0)), ('d', c(4.0, 0.0))]);
    assert_eq!(rt.eval("(a+b)*d").unwrap(), c(20.0, 0.0));
    assert_eq!(rt.eval("a-(b-d)").unwrap(), c(3.0, 0.0));
}

#[test]
fn complex_multiplication_identity() {
    let rt = runtime_with(&[('a', c(1.0, 2.0)), ('b', c(3.0, -1.0))]);
    // (1 + 2i)(3 - i) = 3 - i + 6i - 2i² = 5 + 5i
    assert_eq!(rt.eval("a*b").unwrap(), c(5.0, 5.0));
}

#[test]
fn whitespace_is_insignificant() {
    let rt = runtime_with(&[('z', c(1.5, -0.5)), ('c', c(0.25, 0.75))]);
    let tight = rt.eval("z*z+c").unwrap();
    assert_eq!(rt.eval(" z *\tz\n+ c ").unwrap(), tight);
    assert_eq!(rt.eval("(\nz\n)*( z )+c").unwrap(), tight);
}

#[test]
fn every_letter_is_a_variable() {
    let mut rt = Runtime::new();
    for (i, letter) in ('a'..='z').enumerate() {
        rt.set_value(letter, c(i as f64, 0.0)).unwrap();
    }
    for (i, letter) in ('a'..='z').enumerate() {
        assert_eq!(rt.eval(&letter.to_string()).unwrap(), c(i as f64, 0.0));
    }
}

// ============================================================================
// Rejected input
// ============================================================================

#[test]
fn rejects_numeric_literals() {
    assert_eq!(
        syntax("z*z+2"),
        SyntaxError { position: 4, kind: SyntaxErrorKind::UnexpectedChar('2') }
    );
}

#[test]
fn rejects_unsupported_operators() {
    assert_eq!(syntax("z/c").kind, SyntaxErrorKind::TrailingInput('/'));
    assert_eq!(syntax("z^2").kind, SyntaxErrorKind::TrailingInput('^'));
}

#[test]
fn rejects_unary_minus() {
    assert_eq!(
        syntax("-z"),
        SyntaxError { position: 0, kind: SyntaxErrorKind::UnexpectedChar('-') }
    );
}

#[test]
fn rejects_implicit_multiplication() {
    assert_eq!(syntax("zc").kind, SyntaxErrorKind::TrailingInput('c'));
    assert_eq!(syntax("z (c)").kind, SyntaxErrorKind::TrailingInput('('));
}

#[test]
fn rejects_uppercase_and_non_ascii_letters() {
    assert_eq!(syntax("Z").kind, SyntaxErrorKind::UnexpectedChar('Z'));
    assert_eq!(syntax("z+é").kind, SyntaxErrorKind::UnexpectedChar('é'));
}

#[test]
fn dangling_operator_reports_end_of_input() {
    assert_eq!(syntax("z*z+"), SyntaxError { position: 4, kind: SyntaxErrorKind::UnexpectedEnd });
    assert_eq!(syntax("z* "), SyntaxError { position: 3, kind: SyntaxErrorKind::UnexpectedEnd });
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(syntax("(z+c").kind, SyntaxErrorKind::MissingCloseParen);
    assert_eq!(
        syntax("z)"),
        SyntaxError { position: 1, kind: SyntaxErrorKind::UnmatchedCloseParen }
    );
    assert_eq!(syntax("()").kind, SyntaxErrorKind::UnexpectedChar(')'));
}

#[test]
fn nesting_limit_is_enforced() {
    let ok = format!("{}z{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
    assert!(Runtime::<f64>::new().eval(&ok).is_ok());

    let too_deep = MAX_NESTING_DEPTH + 1;
    let deep = format!("{}z{}", "(".repeat(too_deep), ")".repeat(too_deep));
    assert_eq!(syntax(&deep).kind, SyntaxErrorKind::NestingTooDeep);
}

#[test]
fn error_message_names_position() {
    let message = ExprError::from(syntax("z*z+2")).to_string();
    assert!(message.contains("position 4"), "{message}");
}

// ============================================================================
// Tree shape
// ============================================================================

#[test]
fn symbolic_parse_keeps_variables() {
    let expr = parse_symbolic::<f64>("z*z+c").unwrap();
    assert!(!expr.is_resolved());
    let variables = expr
        .nodes()
        .iter()
        .filter(|node| matches!(node, Node::Variable(_)))
        .count();
    assert_eq!(variables, 3);
}

#[test]
fn runtime_parse_resolves_every_leaf() {
    let rt = runtime_with(&[('z', c(1.0, 0.0))]);
    let expr = rt.parse("z*z+c").unwrap();
    assert!(expr.is_resolved());
    assert_eq!(expr.nodes().len(), 5);
}

#[test]
fn resolving_a_symbolic_tree_matches_runtime_eval() {
    let rt = runtime_with(&[('z', c(0.5, -1.5)), ('c', c(-0.75, 0.1))]);
    let source = "(c+z)*z+z*z*z+c*z*z+z";
    let symbolic = parse_symbolic::<f64>(source).unwrap();
    let resolved = symbolic.resolve(rt.bindings());
    assert!(resolved.is_resolved());
    assert_eq!(resolved.eval(rt.bindings()), rt.eval(source).unwrap());
    assert_eq!(symbolic.eval(rt.bindings()), rt.eval(source).unwrap());
}

#[test]
fn evaluation_is_deterministic() {
    let rt = runtime_with(&[('z', c(0.123, -0.456)), ('c', c(-0.75, 0.1))]);
    let source = "(c+z)*z+z*z*z+c*z*z+z";
    let first = rt.eval(source).unwrap();
    let second = rt.eval(source).unwrap();
    assert_eq!(first.re.to_bits(), second.re.to_bits());
    assert_eq!(first.im.to_bits(), second.im.to_bits());
}
