use core::fmt::{self, Display};

use smallvec::{SmallVec, smallvec};

use crate::prelude_internal::*;

/// A unit of rendered output. Nested expressions are expanded when popped, so
/// rendering depth does not grow the call stack.
enum Piece<'a> {
    Str(&'static str),
    Value(&'a dyn Display),
    Node(&'a Expr),
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: SmallVec<[Piece<'_>; 16]> = smallvec![Piece::Node(self)];
        let mut expanded = Vec::new();
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Str(s) => f.write_str(s)?,
                Piece::Value(value) => write!(f, "{value}")?,
                Piece::Node(expr) => {
                    expand(expr, &mut expanded);
                    stack.extend(expanded.drain(..).rev());
                }
            }
        }
        Ok(())
    }
}

fn separated<'a>(out: &mut Vec<Piece<'a>>, exprs: &'a [Expr]) {
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            out.push(Piece::Str(", "));
        }
        out.push(Piece::Node(expr));
    }
}

fn expand<'a>(expr: &'a Expr, out: &mut Vec<Piece<'a>>) {
    use Piece::{Node, Str, Value};

    match &expr.node {
        ExprNode::Constant(value) => out.push(Value(value)),
        ExprNode::Parameter { name } => out.push(Value(name)),
        ExprNode::Member { object, member } => {
            match object {
                Some(object) => out.push(Node(object)),
                None => out.push(Value(&member.declaring_type)),
            }
            out.extend([Str("."), Value(&member.name)]);
        }
        ExprNode::MethodCall {
            object,
            method,
            arguments,
        } => {
            match object {
                Some(object) => out.push(Node(object)),
                None => out.push(Value(&method.declaring_type)),
            }
            out.extend([Str("."), Value(&method.name), Str("(")]);
            separated(out, arguments);
            out.push(Str(")"));
        }
        ExprNode::TypeTest {
            expression,
            type_operand,
        } => out.extend([
            Str("("),
            Node(expression),
            Str(" is "),
            Value(type_operand),
            Str(")"),
        ]),
        ExprNode::Binary {
            op: BinaryOp::ArrayIndex,
            left,
            right,
            ..
        } => out.extend([Node(left), Str("["), Node(right), Str("]")]),
        ExprNode::Binary {
            op, left, right, ..
        } => out.extend([
            Str("("),
            Node(left),
            Str(" "),
            Str(op.symbol()),
            Str(" "),
            Node(right),
            Str(")"),
        ]),
        ExprNode::Unary { op, operand, .. } => {
            let operand = Node(operand);
            match op {
                UnaryOp::Negate => out.extend([Str("-"), operand]),
                UnaryOp::UnaryPlus => out.extend([Str("+"), operand]),
                UnaryOp::Not => out.extend([Str("!"), operand]),
                UnaryOp::OnesComplement => out.extend([Str("~"), operand]),
                UnaryOp::Convert => out.extend([
                    Str("Convert("),
                    operand,
                    Str(", "),
                    Value(&expr.ty),
                    Str(")"),
                ]),
                UnaryOp::TypeAs => out.extend([
                    Str("("),
                    operand,
                    Str(" as "),
                    Value(&expr.ty),
                    Str(")"),
                ]),
                UnaryOp::ArrayLength => out.extend([Str("ArrayLength("), operand, Str(")")]),
                UnaryOp::Quote => out.push(operand),
            }
        }
        ExprNode::New {
            constructor,
            arguments,
            ..
        } => {
            out.extend([Str("new "), Value(&constructor.declaring_type), Str("(")]);
            separated(out, arguments);
            out.push(Str(")"));
        }
        ExprNode::Conditional {
            test,
            if_true,
            if_false,
        } => out.extend([
            Str("("),
            Node(test),
            Str(" ? "),
            Node(if_true),
            Str(" : "),
            Node(if_false),
            Str(")"),
        ]),
        ExprNode::Lambda { body, parameters } => {
            if let [single] = parameters.as_slice() {
                out.push(Node(single));
            } else {
                out.push(Str("("));
                separated(out, parameters);
                out.push(Str(")"));
            }
            out.extend([Str(" => "), Node(body)]);
        }
        ExprNode::Invocation { target, arguments } => {
            out.extend([Str("Invoke("), Node(target)]);
            for argument in arguments {
                out.extend([Str(", "), Node(argument)]);
            }
            out.push(Str(")"));
        }
        ExprNode::NewArray { elements } => {
            match expr.ty.element_type() {
                Some(element) => out.extend([Str("new "), Value(element), Str("[] {")]),
                None => out.push(Str("new [] {")),
            }
            separated(out, elements);
            out.push(Str("}"));
        }
    }
}
