use core::fmt::{self, Display};

use crate::prelude_internal::*;

/// The position a child occupies in its parent node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildSlot {
    /// Receiver of a member access or instance call
    Object,
    Argument(usize),
    /// Operand of a type test
    Expression,
    Left,
    Right,
    Operand,
    Test,
    IfTrue,
    IfFalse,
    Body,
    Parameter(usize),
    /// Delegate being invoked
    Target,
    Element(usize),
}

impl Display for ChildSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildSlot::Object => write!(f, "object"),
            ChildSlot::Argument(index) => write!(f, "arguments[{index}]"),
            ChildSlot::Expression => write!(f, "expression"),
            ChildSlot::Left => write!(f, "left"),
            ChildSlot::Right => write!(f, "right"),
            ChildSlot::Operand => write!(f, "operand"),
            ChildSlot::Test => write!(f, "test"),
            ChildSlot::IfTrue => write!(f, "if_true"),
            ChildSlot::IfFalse => write!(f, "if_false"),
            ChildSlot::Body => write!(f, "body"),
            ChildSlot::Parameter(index) => write!(f, "parameters[{index}]"),
            ChildSlot::Target => write!(f, "target"),
            ChildSlot::Element(index) => write!(f, "elements[{index}]"),
        }
    }
}

/// Slots leading from the root of a tree to one of its nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Plural)]
pub struct ExprPath(pub Vec<ChildSlot>);

impl ExprPath {
    /// Create an empty path representing the root node
    pub fn root() -> Self {
        ExprPath(Vec::new())
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, slot: ChildSlot) {
        self.0.push(slot);
    }

    pub fn pop(&mut self) -> Option<ChildSlot> {
        self.0.pop()
    }

    /// Shorten the path to `depth` slots.
    pub fn truncate(&mut self, depth: usize) {
        self.0.truncate(depth);
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl Display for ExprPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "(root)");
        }
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", slot)?;
        }
        Ok(())
    }
}
