use std::collections::VecDeque;
use std::convert::Infallible;

use expreq_tree::prelude::*;

use crate::options::Traversal;

/// Every node of one tree in pre-order.
#[derive(Debug, Clone, Default)]
pub struct FlattenedSequence<'a>(Vec<&'a Expr>);

impl<'a> FlattenedSequence<'a> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Expr> + '_ {
        self.0.iter().copied()
    }

    /// Consume the sequence front to back.
    pub fn into_queue(self) -> VecDeque<&'a Expr> {
        self.0.into()
    }
}

impl<'a> IntoIterator for FlattenedSequence<'a> {
    type Item = &'a Expr;
    type IntoIter = std::vec::IntoIter<&'a Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Records every node it visits.
#[derive(Default)]
struct Flattener<'a> {
    nodes: Vec<&'a Expr>,
}

impl<'a> ExprVisitor<'a> for Flattener<'a> {
    type Error = Infallible;

    fn visit_expr(&mut self, expr: &'a Expr) -> Result<(), Self::Error> {
        self.nodes.push(expr);
        self.visit_expr_super(expr)
    }
}

/// Flattens a tree by recursive descent. An absent root contributes nothing.
pub fn flatten(root: Option<&Expr>) -> FlattenedSequence<'_> {
    let mut flattener = Flattener::default();
    match flattener.visit_root(root) {
        Ok(()) => {}
        Err(never) => match never {},
    }
    FlattenedSequence(flattener.nodes)
}

/// Flattens a tree with an explicit stack. Yields the same order as [`flatten`].
pub fn flatten_iterative(root: Option<&Expr>) -> FlattenedSequence<'_> {
    FlattenedSequence(PreorderIter::new_optional(root).map(|visit| visit.expr).collect())
}

pub fn flatten_with(root: Option<&Expr>, traversal: Traversal) -> FlattenedSequence<'_> {
    match traversal {
        Traversal::Recursive => flatten(root),
        Traversal::Iterative => flatten_iterative(root),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &'static str) -> Expr {
        Expr::parameter(Identifier::new_unchecked(name), TypeRef::int32())
    }

    fn sample() -> Expr {
        // Math.Max(a + b, -c)
        let max = MethodRef::static_method(
            TypeRef::named("Math"),
            Identifier::new_unchecked("Max"),
            vec![TypeRef::int32(), TypeRef::int32()],
            TypeRef::int32(),
        );
        Expr::call(
            None,
            max,
            vec![
                Expr::binary(BinaryOp::Add, param("a"), param("b")),
                Expr::unary(UnaryOp::Negate, param("c"), TypeRef::int32()),
            ],
        )
    }

    #[test]
    fn test_flatten_is_preorder() {
        let expr = sample();
        let kinds: Vec<ExprKind> = flatten(Some(&expr)).iter().map(Expr::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ExprKind::MethodCall,
                ExprKind::Binary(BinaryOp::Add),
                ExprKind::Parameter,
                ExprKind::Parameter,
                ExprKind::Unary(UnaryOp::Negate),
                ExprKind::Parameter,
            ]
        );
    }

    #[test]
    fn test_length_is_node_count() {
        let expr = sample();
        assert_eq!(flatten(Some(&expr)).len(), expr.node_count());
    }

    #[test]
    fn test_absent_root_is_empty() {
        assert!(flatten(None).is_empty());
        assert!(flatten_iterative(None).is_empty());
    }

    #[test]
    fn test_iterative_matches_recursive() {
        let expr = sample();
        let recursive = flatten(Some(&expr));
        let iterative = flatten_iterative(Some(&expr));
        assert_eq!(recursive.len(), iterative.len());
        assert!(
            recursive
                .iter()
                .zip(iterative.iter())
                .all(|(a, b)| std::ptr::eq(a, b))
        );
    }

    #[test]
    fn test_into_queue_keeps_order() {
        let expr = sample();
        let mut queue = flatten(Some(&expr)).into_queue();
        assert!(queue.pop_front().is_some_and(|e| std::ptr::eq(e, &expr)));
        assert_eq!(queue.len(), 5);
    }
}
