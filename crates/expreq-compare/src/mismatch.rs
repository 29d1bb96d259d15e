use std::fmt;

use expreq_tree::prelude::*;

/// Renders an optional operator method, `none` when the built-in operator is used.
pub(crate) struct OptionalMethod<'a>(pub &'a Option<MethodRef>);

impl fmt::Display for OptionalMethod<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(method) => write!(f, "{method}"),
            None => write!(f, "none"),
        }
    }
}

/// The attribute that differs between a pair of nodes, with the expected and
/// actual values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MismatchKind {
    #[error("node kind differs: expected {expected} but found {actual}")]
    Kind { expected: ExprKind, actual: ExprKind },
    #[error("result type differs: expected {expected} but found {actual}")]
    ResultType { expected: TypeRef, actual: TypeRef },
    #[error("constant value differs: expected {expected} but found {actual}")]
    ConstantValue {
        expected: ConstantValue,
        actual: ConstantValue,
    },
    #[error("accessed member differs: expected {expected} but found {actual}")]
    Member { expected: MemberRef, actual: MemberRef },
    #[error("called method differs: expected {expected} but found {actual}")]
    Method { expected: MethodRef, actual: MethodRef },
    #[error("parameter name differs: expected {expected} but found {actual}")]
    ParameterName {
        expected: Identifier,
        actual: Identifier,
    },
    #[error("type operand differs: expected {expected} but found {actual}")]
    TypeOperand { expected: TypeRef, actual: TypeRef },
    #[error(
        "operator method differs: expected {} but found {}",
        OptionalMethod(.expected),
        OptionalMethod(.actual)
    )]
    OperatorMethod {
        expected: Option<MethodRef>,
        actual: Option<MethodRef>,
    },
    #[error("is-lifted flag differs: expected {expected} but found {actual}")]
    IsLifted { expected: bool, actual: bool },
    #[error("is-lifted-to-null flag differs: expected {expected} but found {actual}")]
    IsLiftedToNull { expected: bool, actual: bool },
    #[error("constructor differs: expected {expected} but found {actual}")]
    Constructor {
        expected: ConstructorRef,
        actual: ConstructorRef,
    },
    #[error("initialized member count differs: expected {expected} but found {actual}")]
    MemberListLength { expected: usize, actual: usize },
    #[error("initialized member #{index} differs: expected {expected} but found {actual}")]
    MemberListElement {
        index: usize,
        expected: MemberRef,
        actual: MemberRef,
    },
}

/// The first difference found between two trees.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind} at node #{position} ({path})")]
pub struct Mismatch {
    /// Pre-order index of the node in the expected tree.
    pub position: usize,
    pub path: ExprPath,
    pub kind: MismatchKind,
}

/// Result of a comparison that ran to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonOutcome {
    Equal,
    NotEqual(Mismatch),
}

impl ComparisonOutcome {
    pub fn is_equal(&self) -> bool {
        matches!(self, ComparisonOutcome::Equal)
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            ComparisonOutcome::Equal => None,
            ComparisonOutcome::NotEqual(mismatch) => Some(mismatch),
        }
    }
}

impl From<Option<Mismatch>> for ComparisonOutcome {
    fn from(mismatch: Option<Mismatch>) -> Self {
        match mismatch {
            Some(mismatch) => ComparisonOutcome::NotEqual(mismatch),
            None => ComparisonOutcome::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_constant_mismatch() {
        let mismatch = Mismatch {
            position: 2,
            path: ExprPath(vec![ChildSlot::Right]),
            kind: MismatchKind::ConstantValue {
                expected: ConstantValue::Int(5),
                actual: ConstantValue::Int(6),
            },
        };
        assert_eq!(
            mismatch.to_string(),
            "constant value differs: expected 5 but found 6 at node #2 (right)"
        );
    }

    #[test]
    fn test_display_missing_operator_method() {
        let kind = MismatchKind::OperatorMethod {
            expected: None,
            actual: None,
        };
        assert_eq!(
            kind.to_string(),
            "operator method differs: expected none but found none"
        );
    }

    #[test]
    fn test_outcome_from_option() {
        assert!(ComparisonOutcome::from(None).is_equal());
        let outcome = ComparisonOutcome::from(Some(Mismatch {
            position: 0,
            path: ExprPath::root(),
            kind: MismatchKind::IsLifted {
                expected: true,
                actual: false,
            },
        }));
        assert!(!outcome.is_equal());
        assert_eq!(outcome.mismatch().map(|m| m.position), Some(0));
    }
}
