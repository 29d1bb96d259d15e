//! Failure reports for expression assertions.

use std::fmt;

use expreq_compare::{CompareError, CompareOptions, Mismatch};
use expreq_tree::prelude::*;
use similar::{ChangeTag, TextDiff};

/// Configuration for assertions.
///
/// ```
/// use expreq::{AssertOptions, compare::Traversal, compare::CompareOptions};
///
/// let options = AssertOptions::builder()
///     .compare(CompareOptions::builder().traversal(Traversal::Iterative).build())
///     .outline_diff(false)
///     .build();
/// assert!(!options.outline_diff);
/// ```
#[derive(Debug, Clone, bon::Builder)]
pub struct AssertOptions {
    #[builder(default)]
    pub compare: CompareOptions,

    /// Append a line diff of both trees, one node per line, to failure messages.
    #[builder(default = true)]
    pub outline_diff: bool,
}

impl Default for AssertOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Why two expressions were not accepted as equal.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FailureReason {
    #[error("{0}")]
    NotEqual(Mismatch),
    /// The trees could not be compared node for node.
    #[error(transparent)]
    Malformed(#[from] CompareError),
}

impl FailureReason {
    /// The first node-level difference, if one was found.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            FailureReason::NotEqual(mismatch) => Some(mismatch),
            FailureReason::Malformed(CompareError::SizeMismatch { first_mismatch, .. }) => {
                first_mismatch.as_ref()
            }
            FailureReason::Malformed(CompareError::NullNode) => None,
        }
    }
}

/// A failed expression assertion with renderings of both trees.
#[derive(Debug, Clone, PartialEq)]
pub struct AssertionFailure {
    pub reason: FailureReason,
    /// `Display` rendering of the expected tree, `null` when absent.
    pub expected: String,
    pub actual: String,
    /// Outline diff of both trees, if requested and the outlines differ.
    pub diff: Option<String>,
}

impl AssertionFailure {
    pub fn new(
        reason: FailureReason,
        expected: Option<&Expr>,
        actual: Option<&Expr>,
        options: &AssertOptions,
    ) -> Self {
        let diff = options
            .outline_diff
            .then(|| outline_diff(&outline(expected), &outline(actual)))
            .flatten();
        Self {
            reason,
            expected: render(expected),
            actual: render(actual),
            diff,
        }
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expressions are not equal. ")?;
        writeln!(f, "{}", self.reason)?;
        if let FailureReason::Malformed(CompareError::SizeMismatch {
            first_mismatch: Some(first),
            ..
        }) = &self.reason
        {
            writeln!(f, "First difference: {first}")?;
        }
        writeln!(f)?;
        writeln!(f, "Expected: {}", self.expected)?;
        write!(f, "Actual  : {}", self.actual)?;
        if let Some(diff) = &self.diff {
            write!(f, "\n\nDiff (expected → actual):\n{diff}")?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.reason)
    }
}

fn render(expr: Option<&Expr>) -> String {
    match expr {
        Some(expr) => expr.to_string(),
        None => "null".to_string(),
    }
}

/// Indentation stops growing past this depth; deeper lines carry their depth.
const MAX_OUTLINE_INDENT: usize = 32;

/// One line per node in pre-order, indented by depth and labelled with its slot.
pub fn outline(root: Option<&Expr>) -> String {
    let mut out = String::new();
    for visit in PreorderIter::new_optional(root) {
        out.push_str(&"  ".repeat(visit.depth.min(MAX_OUTLINE_INDENT)));
        if visit.depth > MAX_OUTLINE_INDENT {
            out.push_str(&format!("[{}] ", visit.depth));
        }
        if let Some(slot) = visit.slot {
            out.push_str(&format!("{slot}: "));
        }
        out.push_str(&format!("{}\n", NodeLabel(visit.expr)));
    }
    out
}

/// Kind, identifying attributes and result type of a single node.
struct NodeLabel<'a>(&'a Expr);

impl fmt::Display for NodeLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expr = self.0;
        write!(f, "{}", expr.kind())?;
        match expr.view() {
            ExprView::Constant(value) => write!(f, " {value}")?,
            ExprView::Parameter(name) => write!(f, " {name}")?,
            ExprView::Member(view) => write!(f, " {}", view.member)?,
            ExprView::MethodCall(view) => write!(f, " {}", view.method)?,
            ExprView::TypeTest(view) => write!(f, " is {}", view.type_operand)?,
            ExprView::Binary(BinaryView {
                method, lifting, ..
            })
            | ExprView::Unary(UnaryView {
                method, lifting, ..
            }) => {
                if let Some(method) = method {
                    write!(f, " via {method}")?;
                }
                if lifting.is_lifted_to_null {
                    write!(f, " lifted-to-null")?;
                } else if lifting.is_lifted {
                    write!(f, " lifted")?;
                }
            }
            ExprView::New(view) => {
                write!(f, " {}", view.constructor)?;
                if !view.members.is_empty() {
                    let names: Vec<String> =
                        view.members.iter().map(|m| m.name.to_string()).collect();
                    write!(f, " {{{}}}", names.join(", "))?;
                }
            }
            ExprView::Other(_) => {}
        }
        write!(f, " : {}", expr.ty)
    }
}

/// `None` when both outlines are identical line for line.
fn outline_diff(expected: &str, actual: &str) -> Option<String> {
    let diff = TextDiff::from_lines(expected, actual);
    if diff
        .iter_all_changes()
        .all(|change| change.tag() == ChangeTag::Equal)
    {
        return None;
    }
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        out.push_str(&format!("{sign}{change}"));
    }
    Some(out)
}
