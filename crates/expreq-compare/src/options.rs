//! Configuration for comparisons.

/// How the trees are walked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Depth-first recursion; stack usage grows with tree depth.
    #[default]
    Recursive,
    /// Explicit stack, for trees too deep to recurse over.
    Iterative,
}

/// Configuration for a comparison.
///
/// Use the builder pattern to construct:
/// ```
/// use expreq_compare::{CompareOptions, Traversal};
///
/// let options = CompareOptions::builder()
///     .traversal(Traversal::Iterative)
///     .build();
/// assert_eq!(options.traversal, Traversal::Iterative);
/// ```
#[derive(Debug, Clone, Default, bon::Builder)]
pub struct CompareOptions {
    /// Traversal used for both flattening the actual tree and walking the expected one.
    #[builder(default)]
    pub traversal: Traversal,
}
