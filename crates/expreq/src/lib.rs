//! Assertions for structural equality of expression trees.
//!
//! ```
//! use expreq::assert_expr_eq;
//! use expreq::tree::prelude::*;
//!
//! let a = || Expr::parameter(Identifier::new_unchecked("a"), TypeRef::int32());
//! let expected = Expr::binary(BinaryOp::Add, a(), Expr::constant(1));
//! let actual = Expr::binary(BinaryOp::Add, a(), Expr::constant(1));
//! assert_expr_eq!(expected, actual);
//! ```
//!
//! A failing assertion panics with the first difference and both trees:
//!
//! ```text
//! Expressions are not equal.
//! parameter name differs: expected c but found d at node #4 (right)
//!
//! Expected: ((a + b) * c)
//! Actual  : ((a + b) * d)
//! ```

pub mod report;

pub use expreq_compare as compare;
pub use expreq_tree as tree;

pub use report::{AssertOptions, AssertionFailure, FailureReason};

use expreq_compare::{ComparisonOutcome, compare_optional};
use expreq_tree::expr::Expr;
use tracing::debug;

/// Checks that two trees are structurally equal.
pub fn check_expressions_equal(expected: &Expr, actual: &Expr) -> Result<(), AssertionFailure> {
    check_expressions_equal_with_options(expected, actual, &AssertOptions::default())
}

pub fn check_expressions_equal_with_options(
    expected: &Expr,
    actual: &Expr,
    options: &AssertOptions,
) -> Result<(), AssertionFailure> {
    check_optional_expressions_equal(Some(expected), Some(actual), options)
}

/// Like [`check_expressions_equal_with_options`], for trees that may be absent.
/// Two absent trees are equal.
pub fn check_optional_expressions_equal(
    expected: Option<&Expr>,
    actual: Option<&Expr>,
    options: &AssertOptions,
) -> Result<(), AssertionFailure> {
    let reason = match compare_optional(expected, actual, options.compare.clone()) {
        Ok(ComparisonOutcome::Equal) => return Ok(()),
        Ok(ComparisonOutcome::NotEqual(mismatch)) => FailureReason::NotEqual(mismatch),
        Err(err) => FailureReason::Malformed(err),
    };
    debug!(%reason, "expression assertion failed");
    Err(AssertionFailure::new(reason, expected, actual, options))
}

/// Panics with a descriptive message unless both trees are structurally equal.
#[track_caller]
pub fn assert_expressions_equal(expected: &Expr, actual: &Expr) {
    if let Err(failure) = check_expressions_equal(expected, actual) {
        panic!("{failure}");
    }
}

/// Asserts that two expression trees are structurally equal.
///
/// Accepts an optional format string and arguments that are prepended to the
/// failure message, like [`assert_eq!`].
#[macro_export]
macro_rules! assert_expr_eq {
    ($expected:expr, $actual:expr $(,)?) => {
        if let ::core::result::Result::Err(failure) =
            $crate::check_expressions_equal(&$expected, &$actual)
        {
            ::core::panic!("{}", failure);
        }
    };
    ($expected:expr, $actual:expr, $($arg:tt)+) => {
        if let ::core::result::Result::Err(failure) =
            $crate::check_expressions_equal(&$expected, &$actual)
        {
            ::core::panic!("{}\n{}", ::core::format_args!($($arg)+), failure);
        }
    };
}
