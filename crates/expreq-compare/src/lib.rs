//! Structural equality of expression trees.
//!
//! The actual tree is flattened into its pre-order sequence of nodes, then the
//! expected tree is walked in the same order while the sequence is consumed in
//! lock-step. Each pair of nodes must agree on kind, result type and the
//! attributes specific to that kind.
//!
//! Ordinary differences end in [`ComparisonOutcome::NotEqual`]. Trees of
//! different sizes and an absent actual tree are malformed input and abort with
//! a [`CompareError`].
//!
//! ```
//! use expreq_compare::compare_equal;
//! use expreq_tree::prelude::*;
//!
//! let a = Expr::parameter(Identifier::new_unchecked("a"), TypeRef::int32());
//! let expected = Expr::binary(BinaryOp::Add, a.clone(), Expr::constant(5));
//! let actual = Expr::binary(BinaryOp::Add, a, Expr::constant(6));
//!
//! let outcome = compare_equal(&expected, &actual).unwrap();
//! assert!(!outcome.is_equal());
//! ```

pub mod comparator;
pub mod error;
pub mod flatten;
pub mod list;
pub mod mismatch;
pub mod options;

use expreq_tree::expr::Expr;

pub use comparator::Comparator;
pub use error::{CompareError, SizeMismatch};
pub use flatten::{FlattenedSequence, flatten, flatten_iterative};
pub use list::{ListComparison, compare_list, compare_list_eq};
pub use mismatch::{ComparisonOutcome, Mismatch, MismatchKind};
pub use options::{CompareOptions, Traversal};

/// Compares two trees with default options.
pub fn compare_equal(expected: &Expr, actual: &Expr) -> Result<ComparisonOutcome, CompareError> {
    compare_equal_with_options(expected, actual, CompareOptions::default())
}

pub fn compare_equal_with_options(
    expected: &Expr,
    actual: &Expr,
    options: CompareOptions,
) -> Result<ComparisonOutcome, CompareError> {
    compare_optional(Some(expected), Some(actual), options)
}

/// Compares two possibly absent trees. Two absent trees are equal.
pub fn compare_optional(
    expected: Option<&Expr>,
    actual: Option<&Expr>,
    options: CompareOptions,
) -> Result<ComparisonOutcome, CompareError> {
    Comparator::with_options(actual, options).compare_optional(expected)
}
