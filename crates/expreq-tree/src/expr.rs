use crate::prelude_internal::*;

/// A node of an expression tree together with its result type.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// Static type of the value this expression produces.
    pub ty: TypeRef,
    pub node: ExprNode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    Constant(ConstantValue),
    Parameter {
        name: Identifier,
    },
    /// Field or property access. `object` is absent for static members.
    Member {
        object: Option<Box<Expr>>,
        member: MemberRef,
    },
    /// `object` is absent for static methods.
    MethodCall {
        object: Option<Box<Expr>>,
        method: MethodRef,
        arguments: Vec<Expr>,
    },
    TypeTest {
        expression: Box<Expr>,
        type_operand: TypeRef,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
        /// User-defined operator implementation, if any.
        method: Option<MethodRef>,
        lifting: Lifting,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
        method: Option<MethodRef>,
        lifting: Lifting,
    },
    /// Constructor call. `members` lists the members initialized by each argument
    /// (anonymous-object style construction) and is empty otherwise.
    New {
        constructor: ConstructorRef,
        arguments: Vec<Expr>,
        members: Vec<MemberRef>,
    },
    Conditional {
        test: Box<Expr>,
        if_true: Box<Expr>,
        if_false: Box<Expr>,
    },
    Lambda {
        body: Box<Expr>,
        parameters: Vec<Expr>,
    },
    Invocation {
        target: Box<Expr>,
        arguments: Vec<Expr>,
    },
    NewArray {
        elements: Vec<Expr>,
    },
}

/// The node-kind tag. Operator kinds carry their operator, so `a + b` and `a - b`
/// are of different kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    Constant,
    Parameter,
    Member,
    MethodCall,
    TypeTest,
    Binary(BinaryOp),
    Unary(UnaryOp),
    New,
    Conditional,
    Lambda,
    Invocation,
    NewArray,
}

impl core::fmt::Display for ExprKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ExprKind::Binary(op) => write!(f, "Binary({op:?})"),
            ExprKind::Unary(op) => write!(f, "Unary({op:?})"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    And,
    Or,
    ExclusiveOr,
    AndAlso,
    OrElse,
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LeftShift,
    RightShift,
    Coalesce,
    ArrayIndex,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::ExclusiveOr => "^",
            BinaryOp::AndAlso => "&&",
            BinaryOp::OrElse => "||",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::LessThan => "<",
            BinaryOp::LessThanOrEqual => "<=",
            BinaryOp::GreaterThan => ">",
            BinaryOp::GreaterThanOrEqual => ">=",
            BinaryOp::LeftShift => "<<",
            BinaryOp::RightShift => ">>",
            BinaryOp::Coalesce => "??",
            BinaryOp::ArrayIndex => "[]",
        }
    }

    /// Whether the operator yields a boolean regardless of its operand types.
    pub fn is_predicate(self) -> bool {
        matches!(
            self,
            BinaryOp::AndAlso
                | BinaryOp::OrElse
                | BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::LessThan
                | BinaryOp::LessThanOrEqual
                | BinaryOp::GreaterThan
                | BinaryOp::GreaterThanOrEqual
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    UnaryPlus,
    Not,
    OnesComplement,
    Convert,
    TypeAs,
    ArrayLength,
    Quote,
}

/// How an operator over non-nullable operands was applied to nullable ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Lifting {
    pub is_lifted: bool,
    pub is_lifted_to_null: bool,
}

impl Lifting {
    pub const NONE: Lifting = Lifting {
        is_lifted: false,
        is_lifted_to_null: false,
    };

    /// Lifted operator whose result becomes nullable as well.
    pub const TO_NULL: Lifting = Lifting {
        is_lifted: true,
        is_lifted_to_null: true,
    };
}

/// Borrowed attributes of a member access.
#[derive(Debug, Clone, Copy)]
pub struct MemberView<'a> {
    pub object: Option<&'a Expr>,
    pub member: &'a MemberRef,
}

#[derive(Debug, Clone, Copy)]
pub struct MethodCallView<'a> {
    pub object: Option<&'a Expr>,
    pub method: &'a MethodRef,
    pub arguments: &'a [Expr],
}

#[derive(Debug, Clone, Copy)]
pub struct TypeTestView<'a> {
    pub expression: &'a Expr,
    pub type_operand: &'a TypeRef,
}

#[derive(Debug, Clone, Copy)]
pub struct BinaryView<'a> {
    pub op: BinaryOp,
    pub left: &'a Expr,
    pub right: &'a Expr,
    pub method: Option<&'a MethodRef>,
    pub lifting: Lifting,
}

#[derive(Debug, Clone, Copy)]
pub struct UnaryView<'a> {
    pub op: UnaryOp,
    pub operand: &'a Expr,
    pub method: Option<&'a MethodRef>,
    pub lifting: Lifting,
}

#[derive(Debug, Clone, Copy)]
pub struct NewView<'a> {
    pub constructor: &'a ConstructorRef,
    pub arguments: &'a [Expr],
    pub members: &'a [MemberRef],
}

/// Kind-specific attribute accessors. Kinds without attributes of their own
/// beyond kind and result type are `Other`.
#[derive(Debug, Clone, Copy)]
pub enum ExprView<'a> {
    Constant(&'a ConstantValue),
    Parameter(&'a Identifier),
    Member(MemberView<'a>),
    MethodCall(MethodCallView<'a>),
    TypeTest(TypeTestView<'a>),
    Binary(BinaryView<'a>),
    Unary(UnaryView<'a>),
    New(NewView<'a>),
    Other(ExprKind),
}

impl Expr {
    pub fn new(ty: TypeRef, node: ExprNode) -> Self {
        Self { ty, node }
    }

    pub fn kind(&self) -> ExprKind {
        match &self.node {
            ExprNode::Constant(_) => ExprKind::Constant,
            ExprNode::Parameter { .. } => ExprKind::Parameter,
            ExprNode::Member { .. } => ExprKind::Member,
            ExprNode::MethodCall { .. } => ExprKind::MethodCall,
            ExprNode::TypeTest { .. } => ExprKind::TypeTest,
            ExprNode::Binary { op, .. } => ExprKind::Binary(*op),
            ExprNode::Unary { op, .. } => ExprKind::Unary(*op),
            ExprNode::New { .. } => ExprKind::New,
            ExprNode::Conditional { .. } => ExprKind::Conditional,
            ExprNode::Lambda { .. } => ExprKind::Lambda,
            ExprNode::Invocation { .. } => ExprKind::Invocation,
            ExprNode::NewArray { .. } => ExprKind::NewArray,
        }
    }

    pub fn view(&self) -> ExprView<'_> {
        match &self.node {
            ExprNode::Constant(value) => ExprView::Constant(value),
            ExprNode::Parameter { name } => ExprView::Parameter(name),
            ExprNode::Member { object, member } => ExprView::Member(MemberView {
                object: object.as_deref(),
                member,
            }),
            ExprNode::MethodCall {
                object,
                method,
                arguments,
            } => ExprView::MethodCall(MethodCallView {
                object: object.as_deref(),
                method,
                arguments,
            }),
            ExprNode::TypeTest {
                expression,
                type_operand,
            } => ExprView::TypeTest(TypeTestView {
                expression,
                type_operand,
            }),
            ExprNode::Binary {
                op,
                left,
                right,
                method,
                lifting,
            } => ExprView::Binary(BinaryView {
                op: *op,
                left,
                right,
                method: method.as_ref(),
                lifting: *lifting,
            }),
            ExprNode::Unary {
                op,
                operand,
                method,
                lifting,
            } => ExprView::Unary(UnaryView {
                op: *op,
                operand,
                method: method.as_ref(),
                lifting: *lifting,
            }),
            ExprNode::New {
                constructor,
                arguments,
                members,
            } => ExprView::New(NewView {
                constructor,
                arguments,
                members,
            }),
            ExprNode::Conditional { .. }
            | ExprNode::Lambda { .. }
            | ExprNode::Invocation { .. }
            | ExprNode::NewArray { .. } => ExprView::Other(self.kind()),
        }
    }

    /// Direct children in declared order. Absent receivers contribute nothing.
    pub fn children(&self) -> Vec<(ChildSlot, &Expr)> {
        fn indexed(
            slot: fn(usize) -> ChildSlot,
            exprs: &[Expr],
        ) -> impl Iterator<Item = (ChildSlot, &Expr)> {
            exprs.iter().enumerate().map(move |(i, e)| (slot(i), e))
        }

        let mut children = Vec::new();
        match &self.node {
            ExprNode::Constant(_) | ExprNode::Parameter { .. } => {}
            ExprNode::Member { object, .. } => {
                children.extend(object.as_deref().map(|o| (ChildSlot::Object, o)));
            }
            ExprNode::MethodCall {
                object, arguments, ..
            } => {
                children.extend(object.as_deref().map(|o| (ChildSlot::Object, o)));
                children.extend(indexed(ChildSlot::Argument, arguments));
            }
            ExprNode::TypeTest { expression, .. } => {
                children.push((ChildSlot::Expression, expression.as_ref()));
            }
            ExprNode::Binary { left, right, .. } => {
                children.push((ChildSlot::Left, left.as_ref()));
                children.push((ChildSlot::Right, right.as_ref()));
            }
            ExprNode::Unary { operand, .. } => {
                children.push((ChildSlot::Operand, operand.as_ref()));
            }
            ExprNode::New { arguments, .. } => {
                children.extend(indexed(ChildSlot::Argument, arguments));
            }
            ExprNode::Conditional {
                test,
                if_true,
                if_false,
            } => {
                children.push((ChildSlot::Test, test.as_ref()));
                children.push((ChildSlot::IfTrue, if_true.as_ref()));
                children.push((ChildSlot::IfFalse, if_false.as_ref()));
            }
            ExprNode::Lambda { body, parameters } => {
                children.push((ChildSlot::Body, body.as_ref()));
                children.extend(indexed(ChildSlot::Parameter, parameters));
            }
            ExprNode::Invocation { target, arguments } => {
                children.push((ChildSlot::Target, target.as_ref()));
                children.extend(indexed(ChildSlot::Argument, arguments));
            }
            ExprNode::NewArray { elements } => {
                children.extend(indexed(ChildSlot::Element, elements));
            }
        }
        children
    }

    /// Total number of nodes in the tree rooted here.
    pub fn node_count(&self) -> usize {
        crate::traverse::PreorderIter::new(self).count()
    }

    // Constructors

    /// A literal typed with its natural type.
    pub fn constant(value: impl Into<ConstantValue>) -> Self {
        let value = value.into();
        Self::new(value.natural_type(), ExprNode::Constant(value))
    }

    pub fn typed_constant(value: impl Into<ConstantValue>, ty: TypeRef) -> Self {
        Self::new(ty, ExprNode::Constant(value.into()))
    }

    pub fn parameter(name: Identifier, ty: TypeRef) -> Self {
        Self::new(ty, ExprNode::Parameter { name })
    }

    pub fn member(object: Option<Expr>, member: MemberRef) -> Self {
        Self::new(
            member.member_type.clone(),
            ExprNode::Member {
                object: object.map(Box::new),
                member,
            },
        )
    }

    pub fn call(object: Option<Expr>, method: MethodRef, arguments: Vec<Expr>) -> Self {
        Self::new(
            method.return_type.clone(),
            ExprNode::MethodCall {
                object: object.map(Box::new),
                method,
                arguments,
            },
        )
    }

    pub fn type_test(expression: Expr, type_operand: TypeRef) -> Self {
        Self::new(
            TypeRef::boolean(),
            ExprNode::TypeTest {
                expression: Box::new(expression),
                type_operand,
            },
        )
    }

    /// A built-in binary operator. Predicates produce `Boolean`, indexing produces
    /// the element type, everything else the type of `left`.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        let ty = if op.is_predicate() {
            TypeRef::boolean()
        } else if op == BinaryOp::ArrayIndex {
            left.ty.element_type().cloned().unwrap_or_else(|| left.ty.clone())
        } else {
            left.ty.clone()
        };
        Self::binary_with(op, left, right, None, Lifting::NONE, ty)
    }

    pub fn binary_with(
        op: BinaryOp,
        left: Expr,
        right: Expr,
        method: Option<MethodRef>,
        lifting: Lifting,
        ty: TypeRef,
    ) -> Self {
        Self::new(
            ty,
            ExprNode::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                method,
                lifting,
            },
        )
    }

    pub fn unary(op: UnaryOp, operand: Expr, ty: TypeRef) -> Self {
        Self::unary_with(op, operand, None, Lifting::NONE, ty)
    }

    pub fn unary_with(
        op: UnaryOp,
        operand: Expr,
        method: Option<MethodRef>,
        lifting: Lifting,
        ty: TypeRef,
    ) -> Self {
        Self::new(
            ty,
            ExprNode::Unary {
                op,
                operand: Box::new(operand),
                method,
                lifting,
            },
        )
    }

    pub fn new_object(
        constructor: ConstructorRef,
        arguments: Vec<Expr>,
        members: Vec<MemberRef>,
    ) -> Self {
        Self::new(
            constructor.declaring_type.clone(),
            ExprNode::New {
                constructor,
                arguments,
                members,
            },
        )
    }

    pub fn conditional(test: Expr, if_true: Expr, if_false: Expr) -> Self {
        Self::new(
            if_true.ty.clone(),
            ExprNode::Conditional {
                test: Box::new(test),
                if_true: Box::new(if_true),
                if_false: Box::new(if_false),
            },
        )
    }

    pub fn lambda(body: Expr, parameters: Vec<Expr>, delegate_type: TypeRef) -> Self {
        Self::new(
            delegate_type,
            ExprNode::Lambda {
                body: Box::new(body),
                parameters,
            },
        )
    }

    pub fn invoke(target: Expr, arguments: Vec<Expr>, ty: TypeRef) -> Self {
        Self::new(
            ty,
            ExprNode::Invocation {
                target: Box::new(target),
                arguments,
            },
        )
    }

    pub fn new_array(element_type: TypeRef, elements: Vec<Expr>) -> Self {
        Self::new(TypeRef::array(element_type), ExprNode::NewArray { elements })
    }
}

impl Expr {
    /// Moves the children out, leaving `self` a leaf.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        if matches!(
            self.node,
            ExprNode::Constant(_) | ExprNode::Parameter { .. }
        ) {
            return;
        }
        match core::mem::replace(&mut self.node, ExprNode::Constant(ConstantValue::Null)) {
            ExprNode::Constant(_) | ExprNode::Parameter { .. } => {}
            ExprNode::Member { object, .. } => out.extend(object.map(|object| *object)),
            ExprNode::MethodCall {
                object, arguments, ..
            } => {
                out.extend(object.map(|object| *object));
                out.extend(arguments);
            }
            ExprNode::TypeTest { expression, .. } => out.push(*expression),
            ExprNode::Binary { left, right, .. } => out.extend([*left, *right]),
            ExprNode::Unary { operand, .. } => out.push(*operand),
            ExprNode::New { arguments, .. } => out.extend(arguments),
            ExprNode::Conditional {
                test,
                if_true,
                if_false,
            } => out.extend([*test, *if_true, *if_false]),
            ExprNode::Lambda { body, parameters } => {
                out.push(*body);
                out.extend(parameters);
            }
            ExprNode::Invocation { target, arguments } => {
                out.push(*target);
                out.extend(arguments);
            }
            ExprNode::NewArray { elements } => out.extend(elements),
        }
    }
}

/// Tears the tree down with an explicit stack, so deep trees do not grow the
/// call stack when dropped.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        self.detach_children(&mut stack);
        while let Some(mut expr) = stack.pop() {
            expr.detach_children(&mut stack);
        }
    }
}
