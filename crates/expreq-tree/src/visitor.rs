//! Recursive traversal over expression trees.
//!
//! Implementors override the hooks they care about and call the matching
//! `*_super` method to continue into children. Every walk visits a node before
//! its children and children in [`Expr::children`] order.

use crate::prelude_internal::*;

pub trait ExprVisitor<'a>: ExprVisitorSuper<'a, Self::Error> {
    type Error;

    /// Called once per node.
    fn visit_expr(&mut self, expr: &'a Expr) -> Result<(), Self::Error> {
        self.visit_expr_super(expr)
    }

    /// Called for every child before descending into it.
    fn visit_child(&mut self, slot: ChildSlot, child: &'a Expr) -> Result<(), Self::Error> {
        self.visit_child_super(slot, child)
    }

    /// Entry point for a possibly absent tree; an absent root visits nothing.
    fn visit_root(&mut self, root: Option<&'a Expr>) -> Result<(), Self::Error> {
        match root {
            Some(root) => self.visit_expr(root),
            None => Ok(()),
        }
    }
}

mod private {
    pub trait Sealed<'a> {}
}

pub trait ExprVisitorSuper<'a, E>: private::Sealed<'a> {
    fn visit_expr_super(&mut self, expr: &'a Expr) -> Result<(), E>;
    fn visit_child_super(&mut self, slot: ChildSlot, child: &'a Expr) -> Result<(), E>;
    fn visit_children(&mut self, expr: &'a Expr) -> Result<(), E>;
}

impl<'a, V: ExprVisitor<'a>> private::Sealed<'a> for V {}

impl<'a, V: ExprVisitor<'a>> ExprVisitorSuper<'a, V::Error> for V {
    fn visit_expr_super(&mut self, expr: &'a Expr) -> Result<(), V::Error> {
        self.visit_children(expr)
    }

    fn visit_child_super(&mut self, _slot: ChildSlot, child: &'a Expr) -> Result<(), V::Error> {
        self.visit_expr(child)
    }

    fn visit_children(&mut self, expr: &'a Expr) -> Result<(), V::Error> {
        for (slot, child) in expr.children() {
            self.visit_child(slot, child)?;
        }
        Ok(())
    }
}
