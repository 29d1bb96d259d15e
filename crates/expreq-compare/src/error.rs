use expreq_tree::path::ExprPath;

use crate::mismatch::Mismatch;

/// The two trees do not have the same number of nodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SizeMismatch {
    /// The expected tree has more nodes: nothing was left to pair with this node.
    #[error(
        "expected tree has more nodes than the actual tree ({actual_nodes}); \
         no node left to pair with node #{position} ({path})"
    )]
    CandidateExhausted {
        position: usize,
        path: ExprPath,
        actual_nodes: usize,
    },
    /// The actual tree has nodes left over after the expected tree was walked.
    #[error(
        "actual tree has {remaining} more node(s) than the expected tree \
         ({expected_nodes} vs {actual_nodes})"
    )]
    CandidatesRemaining {
        remaining: usize,
        expected_nodes: usize,
        actual_nodes: usize,
    },
}

/// Malformed input: the comparison was aborted instead of producing an outcome.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CompareError {
    #[error("{size}")]
    SizeMismatch {
        size: SizeMismatch,
        /// Difference recorded before the size difference was detected, if any.
        first_mismatch: Option<Mismatch>,
    },
    #[error("Expected expression to not be null, but was null")]
    NullNode,
}

impl CompareError {
    pub fn size_mismatch(&self) -> Option<&SizeMismatch> {
        match self {
            CompareError::SizeMismatch { size, .. } => Some(size),
            CompareError::NullNode => None,
        }
    }
}
