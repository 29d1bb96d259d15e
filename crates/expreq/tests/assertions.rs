use expreq::compare::{CompareError, CompareOptions, Traversal};
use expreq::tree::prelude::*;
use expreq::{
    AssertOptions, FailureReason, assert_expr_eq, assert_expressions_equal,
    check_expressions_equal, check_expressions_equal_with_options,
    check_optional_expressions_equal,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn param(name: &'static str) -> Expr {
    Expr::parameter(Identifier::new_unchecked(name), TypeRef::int32())
}

fn add(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Add, left, right)
}

fn mul(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Multiply, left, right)
}

#[test]
fn test_equal_trees_pass() {
    init_tracing();
    let expected = mul(add(param("a"), param("b")), param("c"));
    let actual = mul(add(param("a"), param("b")), param("c"));
    assert_eq!(check_expressions_equal(&expected, &actual), Ok(()));
    assert_expressions_equal(&expected, &actual);
    assert_expr_eq!(expected, actual);
}

#[test]
fn test_failure_message_names_difference_and_both_trees() {
    init_tracing();
    let expected = mul(add(param("a"), param("b")), param("c"));
    let actual = mul(add(param("a"), param("b")), param("d"));
    let failure = check_expressions_equal(&expected, &actual).unwrap_err();
    let message = failure.to_string();

    assert!(message.starts_with("Expressions are not equal. \n"), "{message}");
    assert!(
        message.contains("parameter name differs: expected c but found d at node #4 (right)"),
        "{message}"
    );
    assert!(message.contains("Expected: ((a + b) * c)\n"), "{message}");
    assert!(message.contains("Actual  : ((a + b) * d)"), "{message}");
    assert_eq!(failure.expected, "((a + b) * c)");
    assert_eq!(failure.actual, "((a + b) * d)");
}

#[test]
fn test_failure_includes_outline_diff_by_default() {
    let expected = add(param("a"), param("b"));
    let actual = add(param("a"), param("z"));
    let failure = check_expressions_equal(&expected, &actual).unwrap_err();

    let diff = failure.diff.as_deref().unwrap();
    assert!(diff.contains("-  right: Parameter b : Int32\n"), "{diff}");
    assert!(diff.contains("+  right: Parameter z : Int32\n"), "{diff}");
    assert!(failure.to_string().contains("Diff (expected → actual):"));
}

#[test]
fn test_outline_diff_can_be_disabled() {
    let expected = add(param("a"), param("b"));
    let actual = add(param("a"), param("z"));
    let options = AssertOptions::builder().outline_diff(false).build();
    let failure = check_expressions_equal_with_options(&expected, &actual, &options).unwrap_err();

    assert_eq!(failure.diff, None);
    assert!(!failure.to_string().contains("Diff"));
}

#[test]
fn test_same_rendering_still_reports_difference() {
    // overloads differing only in parameter types render identically
    let max = |ty: TypeRef| {
        MethodRef::static_method(
            TypeRef::named("Math"),
            Identifier::new_unchecked("Max"),
            vec![ty.clone(), ty],
            TypeRef::int64(),
        )
    };
    let a = || Expr::parameter(Identifier::new_unchecked("a"), TypeRef::int64());
    let b = || Expr::parameter(Identifier::new_unchecked("b"), TypeRef::int64());
    let expected = Expr::call(None, max(TypeRef::int32()), vec![a(), b()]);
    let actual = Expr::call(None, max(TypeRef::int64()), vec![a(), b()]);

    let failure = check_expressions_equal(&expected, &actual).unwrap_err();
    assert_eq!(failure.expected, failure.actual);
    assert!(failure.to_string().contains("called method differs"));
}

#[test]
fn test_size_mismatch_reports_first_difference() {
    let expected = add(param("a"), param("b"));
    let actual = add(add(param("a"), param("b")), param("c"));
    let failure = check_expressions_equal(&expected, &actual).unwrap_err();

    assert!(matches!(
        failure.reason,
        FailureReason::Malformed(CompareError::SizeMismatch { .. })
    ));
    let first = failure.reason.mismatch().unwrap();
    assert_eq!(first.position, 1);
    assert!(
        failure
            .to_string()
            .contains("First difference: node kind differs: expected Parameter but found Binary(Add)"),
        "{failure}"
    );
}

#[test]
fn test_absent_trees() {
    let options = AssertOptions::default();
    let a = param("a");

    assert_eq!(check_optional_expressions_equal(None, None, &options), Ok(()));

    let failure = check_optional_expressions_equal(Some(&a), None, &options).unwrap_err();
    assert_eq!(failure.reason, FailureReason::Malformed(CompareError::NullNode));
    assert_eq!(failure.actual, "null");
    assert!(
        failure
            .to_string()
            .contains("Expected expression to not be null, but was null")
    );

    let failure = check_optional_expressions_equal(None, Some(&a), &options).unwrap_err();
    assert_eq!(failure.expected, "null");
    assert!(failure.reason.mismatch().is_none());
}

#[test]
fn test_iterative_options_agree() {
    let expected = mul(add(param("a"), param("b")), param("c"));
    let actual = mul(add(param("a"), param("x")), param("c"));
    let iterative = AssertOptions::builder()
        .compare(CompareOptions::builder().traversal(Traversal::Iterative).build())
        .build();

    let recursive = check_expressions_equal(&expected, &actual).unwrap_err();
    let iterative = check_expressions_equal_with_options(&expected, &actual, &iterative).unwrap_err();
    assert_eq!(recursive, iterative);
}

fn negate_chain(leaf: &'static str, depth: usize) -> Expr {
    let mut expr = param(leaf);
    for _ in 0..depth {
        expr = Expr::unary(UnaryOp::Negate, expr, TypeRef::int32());
    }
    expr
}

fn iterative_options() -> AssertOptions {
    AssertOptions::builder()
        .compare(CompareOptions::builder().traversal(Traversal::Iterative).build())
        .outline_diff(false)
        .build()
}

#[test]
fn test_deep_trees_report_failure() {
    let expected = negate_chain("a", 50_000);
    let actual = negate_chain("b", 50_000);
    let failure =
        check_expressions_equal_with_options(&expected, &actual, &iterative_options()).unwrap_err();

    assert_eq!(failure.reason.mismatch().map(|m| m.position), Some(50_000));
    assert!(failure.expected.ends_with("-a"));
    assert!(failure.actual.ends_with("-b"));
    assert_eq!(failure.actual.len(), 50_001);
}

#[test]
fn test_deep_trees_outline_diff() {
    let options = AssertOptions::builder()
        .compare(CompareOptions::builder().traversal(Traversal::Iterative).build())
        .build();
    let expected = negate_chain("a", 10_000);
    let actual = negate_chain("b", 10_000);
    let failure = check_expressions_equal_with_options(&expected, &actual, &options).unwrap_err();

    let diff = failure.diff.as_deref().unwrap();
    let changed: Vec<&str> = diff.lines().filter(|line| !line.starts_with(' ')).collect();
    assert_eq!(changed.len(), 2);
    assert!(changed[0].starts_with('-'));
    assert!(changed[0].ends_with("[10000] operand: Parameter a : Int32"));
    assert!(changed[1].starts_with('+'));
    assert!(changed[1].ends_with("[10000] operand: Parameter b : Int32"));
}

#[test]
#[should_panic(expected = "constant value differs: expected 5 but found 6")]
fn test_assert_expressions_equal_panics() {
    assert_expressions_equal(&Expr::constant(5), &Expr::constant(6));
}

#[test]
#[should_panic(expected = "Expected: (a + b)")]
fn test_macro_panics() {
    assert_expr_eq!(add(param("a"), param("b")), add(param("b"), param("a")));
}

#[test]
#[should_panic(expected = "rewrite of case 3\nExpressions are not equal.")]
fn test_macro_prepends_message() {
    let case = 3;
    assert_expr_eq!(
        Expr::constant(true),
        Expr::constant(false),
        "rewrite of case {}",
        case
    );
}
