use core::fmt::{self, Display};

use crate::prelude_internal::*;

/// A literal carried by a constant node.
#[derive(Debug, Clone)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
}

/// Value equality of the host runtime: NaN equals NaN, so every tree is equal to itself.
impl PartialEq for ConstantValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ConstantValue::Null, ConstantValue::Null) => true,
            (ConstantValue::Bool(a), ConstantValue::Bool(b)) => a == b,
            (ConstantValue::Int(a), ConstantValue::Int(b)) => a == b,
            (ConstantValue::Float(a), ConstantValue::Float(b)) => {
                a == b || (a.is_nan() && b.is_nan())
            }
            (ConstantValue::Char(a), ConstantValue::Char(b)) => a == b,
            (ConstantValue::String(a), ConstantValue::String(b)) => a == b,
            _ => false,
        }
    }
}

impl ConstantValue {
    /// The type a literal has when no explicit type is given.
    pub fn natural_type(&self) -> TypeRef {
        match self {
            ConstantValue::Null => TypeRef::object(),
            ConstantValue::Bool(_) => TypeRef::boolean(),
            ConstantValue::Int(_) => TypeRef::int32(),
            ConstantValue::Float(_) => TypeRef::double(),
            ConstantValue::Char(_) => TypeRef::char(),
            ConstantValue::String(_) => TypeRef::string(),
        }
    }
}

impl Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Null => write!(f, "null"),
            ConstantValue::Bool(value) => write!(f, "{value}"),
            ConstantValue::Int(value) => write!(f, "{value}"),
            ConstantValue::Float(value) => write!(f, "{value:?}"),
            ConstantValue::Char(value) => write!(f, "{value:?}"),
            ConstantValue::String(value) => write!(f, "{value:?}"),
        }
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Bool(value)
    }
}

impl From<i32> for ConstantValue {
    fn from(value: i32) -> Self {
        ConstantValue::Int(value.into())
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Int(value)
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        ConstantValue::Float(value)
    }
}

impl From<char> for ConstantValue {
    fn from(value: char) -> Self {
        ConstantValue::Char(value)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::String(value.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        ConstantValue::String(value)
    }
}
