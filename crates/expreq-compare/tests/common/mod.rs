#![allow(dead_code)]

use expreq_tree::prelude::*;
use tracing_subscriber::EnvFilter;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn ident(name: &'static str) -> Identifier {
    Identifier::new_unchecked(name)
}

pub fn param(name: &'static str) -> Expr {
    Expr::parameter(ident(name), TypeRef::int32())
}

pub fn add(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Add, left, right)
}

pub fn mul(left: Expr, right: Expr) -> Expr {
    Expr::binary(BinaryOp::Multiply, left, right)
}

pub fn point() -> TypeRef {
    TypeRef::named("Point")
}

pub fn point_ctor() -> ConstructorRef {
    ConstructorRef::new(point(), vec![TypeRef::int32(), TypeRef::int32()])
}

pub fn point_member(name: &'static str) -> MemberRef {
    MemberRef::property(point(), ident(name), TypeRef::int32())
}

pub fn math_max(operand: TypeRef) -> MethodRef {
    MethodRef::static_method(
        TypeRef::named("Math"),
        ident("Max"),
        vec![operand.clone(), operand.clone()],
        operand,
    )
}

/// A corpus of trees covering every node kind.
pub fn corpus() -> Vec<Expr> {
    let s = Expr::parameter(ident("s"), TypeRef::string());
    let length = MemberRef::property(TypeRef::string(), ident("Length"), TypeRef::int32());
    let starts_with = MethodRef::instance(
        TypeRef::string(),
        ident("StartsWith"),
        vec![TypeRef::string()],
        TypeRef::boolean(),
    );
    let nullable_int = TypeRef::nullable(TypeRef::int32());
    let n = Expr::parameter(ident("n"), nullable_int.clone());
    let o = Expr::parameter(ident("o"), TypeRef::object());

    vec![
        Expr::constant(5),
        Expr::constant(f64::NAN),
        param("a"),
        add(param("a"), param("b")),
        add(add(param("a"), param("b")), param("c")),
        mul(add(param("a"), param("b")), param("c")),
        mul(add(param("a"), param("b")), param("d")),
        Expr::member(Some(s.clone()), length),
        Expr::call(Some(s.clone()), starts_with, vec![Expr::constant("ab")]),
        Expr::call(None, math_max(TypeRef::int32()), vec![param("a"), param("b")]),
        Expr::call(None, math_max(TypeRef::int64()), vec![
            Expr::parameter(ident("a"), TypeRef::int64()),
            Expr::parameter(ident("b"), TypeRef::int64()),
        ]),
        Expr::type_test(o.clone(), TypeRef::string()),
        Expr::type_test(o, TypeRef::int32()),
        Expr::binary_with(
            BinaryOp::Add,
            n.clone(),
            n.clone(),
            None,
            Lifting::TO_NULL,
            nullable_int.clone(),
        ),
        Expr::unary_with(
            UnaryOp::Negate,
            n,
            None,
            Lifting::TO_NULL,
            nullable_int,
        ),
        Expr::new_object(
            point_ctor(),
            vec![param("x"), param("y")],
            vec![point_member("X"), point_member("Y")],
        ),
        Expr::new_object(point_ctor(), vec![param("x"), param("y")], vec![]),
        Expr::conditional(
            Expr::binary(BinaryOp::GreaterThan, param("a"), param("b")),
            param("a"),
            param("b"),
        ),
        Expr::lambda(
            add(param("a"), param("b")),
            vec![param("a"), param("b")],
            TypeRef::generic("Func", vec![TypeRef::int32(), TypeRef::int32(), TypeRef::int32()]),
        ),
        Expr::new_array(TypeRef::int32(), vec![Expr::constant(1), Expr::constant(2)]),
    ]
}
