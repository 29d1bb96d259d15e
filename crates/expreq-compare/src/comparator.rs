use std::collections::VecDeque;

use expreq_tree::prelude::*;
use tracing::{debug, trace};

use crate::error::{CompareError, SizeMismatch};
use crate::flatten::flatten_with;
use crate::list::{ListComparison, compare_list_eq};
use crate::mismatch::{ComparisonOutcome, Mismatch, MismatchKind};
use crate::options::{CompareOptions, Traversal};

/// Compares an expected tree against an actual tree.
///
/// The actual tree is flattened up front into a queue of candidates. Walking the
/// expected tree in the same order then pairs each of its nodes with the next
/// candidate, so both walks stay aligned and a size difference shows up as an
/// empty queue or a non-empty one at the end.
///
/// After the first mismatch no further attributes are checked, but nodes keep
/// being paired until the walk ends so a size difference is still reported.
pub struct Comparator<'a> {
    candidates: VecDeque<&'a Expr>,
    actual_nodes: usize,
    /// Nodes of the expected tree paired so far.
    paired: usize,
    path: ExprPath,
    mismatch: Option<Mismatch>,
    options: CompareOptions,
}

impl<'a> Comparator<'a> {
    pub fn new(actual: &'a Expr) -> Self {
        Self::with_options(Some(actual), CompareOptions::default())
    }

    /// An absent actual tree yields no candidates.
    pub fn with_options(actual: Option<&'a Expr>, options: CompareOptions) -> Self {
        let candidates = flatten_with(actual, options.traversal).into_queue();
        Self {
            actual_nodes: candidates.len(),
            candidates,
            paired: 0,
            path: ExprPath::root(),
            mismatch: None,
            options,
        }
    }

    /// `false` once any pair of nodes differed.
    pub fn is_equal(&self) -> bool {
        self.mismatch.is_none()
    }

    pub fn compare(self, expected: &'a Expr) -> Result<ComparisonOutcome, CompareError> {
        self.compare_optional(Some(expected))
    }

    pub fn compare_optional(
        mut self,
        expected: Option<&'a Expr>,
    ) -> Result<ComparisonOutcome, CompareError> {
        debug!(
            actual_nodes = self.actual_nodes,
            traversal = ?self.options.traversal,
            "comparing expression trees"
        );
        match self.options.traversal {
            Traversal::Recursive => self.visit_root(expected)?,
            Traversal::Iterative => self.walk_iterative(expected)?,
        }

        if !self.candidates.is_empty() {
            let size = SizeMismatch::CandidatesRemaining {
                remaining: self.candidates.len(),
                expected_nodes: self.paired,
                actual_nodes: self.actual_nodes,
            };
            return Err(self.abort(size));
        }

        debug!(
            nodes = self.paired,
            equal = self.is_equal(),
            "comparison finished"
        );
        Ok(self.mismatch.into())
    }

    fn walk_iterative(&mut self, expected: Option<&'a Expr>) -> Result<(), CompareError> {
        for visit in PreorderIter::new_optional(expected) {
            self.path.truncate(visit.depth.saturating_sub(1));
            if let Some(slot) = visit.slot {
                self.path.push(slot);
            }
            self.pair(visit.expr)?;
        }
        Ok(())
    }

    /// Pairs one node of the expected tree with the next candidate and checks them
    /// unless a mismatch was already recorded.
    fn pair(&mut self, expected: &'a Expr) -> Result<(), CompareError> {
        let position = self.paired;
        let Some(actual) = self.candidates.pop_front() else {
            if self.actual_nodes == 0 {
                debug!("actual expression is absent");
                return Err(CompareError::NullNode);
            }
            let size = SizeMismatch::CandidateExhausted {
                position,
                path: self.path.clone(),
                actual_nodes: self.actual_nodes,
            };
            return Err(self.abort(size));
        };
        self.paired += 1;

        if self.mismatch.is_some() {
            return Ok(());
        }
        trace!(position, path = %self.path, kind = %expected.kind(), "pairing node");
        if let Some(kind) = check_pair(expected, actual) {
            debug!(position, path = %self.path, %kind, "expression trees differ");
            self.mismatch = Some(Mismatch {
                position,
                path: self.path.clone(),
                kind,
            });
        }
        Ok(())
    }

    fn abort(&mut self, size: SizeMismatch) -> CompareError {
        debug!(%size, "comparison aborted");
        CompareError::SizeMismatch {
            size,
            first_mismatch: self.mismatch.take(),
        }
    }
}

impl<'a> ExprVisitor<'a> for Comparator<'a> {
    type Error = CompareError;

    fn visit_expr(&mut self, expr: &'a Expr) -> Result<(), Self::Error> {
        self.pair(expr)?;
        self.visit_expr_super(expr)
    }

    fn visit_child(&mut self, slot: ChildSlot, child: &'a Expr) -> Result<(), Self::Error> {
        self.path.push(slot);
        let result = self.visit_child_super(slot, child);
        self.path.pop();
        result
    }
}

/// Checks kind and result type, then the attributes specific to the kind.
fn check_pair(expected: &Expr, actual: &Expr) -> Option<MismatchKind> {
    if expected.kind() != actual.kind() {
        return Some(MismatchKind::Kind {
            expected: expected.kind(),
            actual: actual.kind(),
        });
    }
    if expected.ty != actual.ty {
        return Some(MismatchKind::ResultType {
            expected: expected.ty.clone(),
            actual: actual.ty.clone(),
        });
    }

    match (expected.view(), actual.view()) {
        (ExprView::Constant(e), ExprView::Constant(a)) => {
            (e != a).then(|| MismatchKind::ConstantValue {
                expected: e.clone(),
                actual: a.clone(),
            })
        }
        (ExprView::Member(e), ExprView::Member(a)) => {
            (e.member != a.member).then(|| MismatchKind::Member {
                expected: e.member.clone(),
                actual: a.member.clone(),
            })
        }
        (ExprView::MethodCall(e), ExprView::MethodCall(a)) => {
            (e.method != a.method).then(|| MismatchKind::Method {
                expected: e.method.clone(),
                actual: a.method.clone(),
            })
        }
        (ExprView::Parameter(e), ExprView::Parameter(a)) => {
            (e != a).then(|| MismatchKind::ParameterName {
                expected: e.clone(),
                actual: a.clone(),
            })
        }
        (ExprView::TypeTest(e), ExprView::TypeTest(a)) => {
            (e.type_operand != a.type_operand).then(|| MismatchKind::TypeOperand {
                expected: e.type_operand.clone(),
                actual: a.type_operand.clone(),
            })
        }
        (ExprView::Binary(e), ExprView::Binary(a)) => {
            check_operator(e.method, e.lifting, a.method, a.lifting)
        }
        (ExprView::Unary(e), ExprView::Unary(a)) => {
            check_operator(e.method, e.lifting, a.method, a.lifting)
        }
        (ExprView::New(e), ExprView::New(a)) => {
            if e.constructor != a.constructor {
                return Some(MismatchKind::Constructor {
                    expected: e.constructor.clone(),
                    actual: a.constructor.clone(),
                });
            }
            match compare_list_eq(e.members, a.members) {
                ListComparison::Equal => None,
                ListComparison::LengthMismatch { expected, actual } => {
                    Some(MismatchKind::MemberListLength { expected, actual })
                }
                ListComparison::ElementMismatch { index } => {
                    Some(MismatchKind::MemberListElement {
                        index,
                        expected: e.members[index].clone(),
                        actual: a.members[index].clone(),
                    })
                }
            }
        }
        // kind and result type are all there is to compare
        _ => None,
    }
}

fn check_operator(
    expected_method: Option<&MethodRef>,
    expected_lifting: Lifting,
    actual_method: Option<&MethodRef>,
    actual_lifting: Lifting,
) -> Option<MismatchKind> {
    if expected_method != actual_method {
        return Some(MismatchKind::OperatorMethod {
            expected: expected_method.cloned(),
            actual: actual_method.cloned(),
        });
    }
    if expected_lifting.is_lifted != actual_lifting.is_lifted {
        return Some(MismatchKind::IsLifted {
            expected: expected_lifting.is_lifted,
            actual: actual_lifting.is_lifted,
        });
    }
    if expected_lifting.is_lifted_to_null != actual_lifting.is_lifted_to_null {
        return Some(MismatchKind::IsLiftedToNull {
            expected: expected_lifting.is_lifted_to_null,
            actual: actual_lifting.is_lifted_to_null,
        });
    }
    None
}
