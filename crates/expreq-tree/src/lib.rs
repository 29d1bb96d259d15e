#![no_std]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Identifier type and parser.
pub mod identifier;

/// Type, member, method and constructor identities.
pub mod types;

/// Literal values carried by constant nodes.
pub mod value;

/// The expression node vocabulary.
pub mod expr;

/// Child slots and paths from the root of a tree.
pub mod path;

pub mod visitor;

/// Iterative pre-order traversal.
pub mod traverse;

mod display;

pub mod prelude {
    pub use crate::expr::{
        BinaryOp, BinaryView, Expr, ExprKind, ExprNode, ExprView, Lifting, MemberView,
        MethodCallView, NewView, TypeTestView, UnaryOp, UnaryView,
    };
    pub use crate::identifier::Identifier;
    pub use crate::path::{ChildSlot, ExprPath};
    pub use crate::traverse::{PreorderIter, Visit};
    pub use crate::types::{ConstructorRef, MemberKind, MemberRef, MethodRef, TypeRef};
    pub use crate::value::ConstantValue;
    pub use crate::visitor::{ExprVisitor, ExprVisitorSuper as _};
}

pub(crate) mod prelude_internal {
    #![allow(unused_imports)]
    pub use crate::expr::*;
    pub use crate::identifier::Identifier;
    pub use crate::path::{ChildSlot, ExprPath};
    pub use crate::types::{ConstructorRef, MemberKind, MemberRef, MethodRef, TypeRef};
    pub use crate::value::ConstantValue;
    pub use alloc::boxed::Box;
    pub use alloc::{string::String, string::ToString, vec, vec::Vec};
    pub use thisisplural::Plural;
}
