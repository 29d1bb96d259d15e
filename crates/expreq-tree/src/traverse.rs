use core::iter::FusedIterator;

use smallvec::{SmallVec, smallvec};

use crate::prelude_internal::*;

/// One step of a pre-order walk.
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// Distance from the root; the root has depth 0.
    pub depth: usize,
    /// Slot the node occupies in its parent, `None` for the root.
    pub slot: Option<ChildSlot>,
    pub expr: &'a Expr,
}

/// Preorder DFS traversal over an expression tree with an explicit stack, so deep
/// trees do not grow the call stack.
pub struct PreorderIter<'a> {
    stack: SmallVec<[Visit<'a>; 16]>,
}

impl<'a> PreorderIter<'a> {
    pub fn new(root: &'a Expr) -> Self {
        Self {
            stack: smallvec![Visit {
                depth: 0,
                slot: None,
                expr: root,
            }],
        }
    }

    /// A walk over an absent tree yields nothing.
    pub fn new_optional(root: Option<&'a Expr>) -> Self {
        match root {
            Some(root) => Self::new(root),
            None => Self {
                stack: SmallVec::new(),
            },
        }
    }
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.stack.pop()?;
        // push children in reverse for left-to-right order
        self.stack.extend(
            visit
                .expr
                .children()
                .into_iter()
                .rev()
                .map(|(slot, expr)| Visit {
                    depth: visit.depth + 1,
                    slot: Some(slot),
                    expr,
                }),
        );
        Some(visit)
    }
}

impl FusedIterator for PreorderIter<'_> {}
