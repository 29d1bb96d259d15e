use core::fmt::{self, Display};

use crate::prelude_internal::*;

/// The static type of an expression, or a type operand.
///
/// Identity is structural: two references are the same type when their names and
/// generic arguments are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    pub name: String,
    pub arguments: Vec<TypeRef>,
}

const NULLABLE: &str = "Nullable";
const ARRAY: &str = "Array";

impl TypeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// `Nullable<inner>`, the result type of lifted operators.
    pub fn nullable(inner: TypeRef) -> Self {
        Self::generic(NULLABLE, vec![inner])
    }

    /// A one-dimensional array of `element`.
    pub fn array(element: TypeRef) -> Self {
        Self::generic(ARRAY, vec![element])
    }

    pub fn is_nullable(&self) -> bool {
        self.name == NULLABLE && self.arguments.len() == 1
    }

    /// Element type if this is an array type.
    pub fn element_type(&self) -> Option<&TypeRef> {
        match self.arguments.as_slice() {
            [element] if self.name == ARRAY => Some(element),
            _ => None,
        }
    }

    pub fn boolean() -> Self {
        Self::named("Boolean")
    }

    pub fn int32() -> Self {
        Self::named("Int32")
    }

    pub fn int64() -> Self {
        Self::named("Int64")
    }

    pub fn double() -> Self {
        Self::named("Double")
    }

    pub fn char() -> Self {
        Self::named("Char")
    }

    pub fn string() -> Self {
        Self::named("String")
    }

    pub fn object() -> Self {
        Self::named("Object")
    }
}

impl Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = self.element_type() {
            return write!(f, "{element}[]");
        }
        write!(f, "{}", self.name)?;
        if !self.arguments.is_empty() {
            write!(f, "<")?;
            write_comma_separated(f, &self.arguments)?;
            write!(f, ">")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
}

/// A field or property of a declaring type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberRef {
    pub declaring_type: TypeRef,
    pub name: Identifier,
    pub kind: MemberKind,
    pub member_type: TypeRef,
}

impl MemberRef {
    pub fn field(declaring_type: TypeRef, name: Identifier, member_type: TypeRef) -> Self {
        Self {
            declaring_type,
            name,
            kind: MemberKind::Field,
            member_type,
        }
    }

    pub fn property(declaring_type: TypeRef, name: Identifier, member_type: TypeRef) -> Self {
        Self {
            declaring_type,
            name,
            kind: MemberKind::Property,
            member_type,
        }
    }
}

impl Display for MemberRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.declaring_type, self.name)
    }
}

/// A method identity. Overloads share a name but differ in their parameter list,
/// so they are distinct methods.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodRef {
    pub declaring_type: TypeRef,
    pub name: Identifier,
    pub parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
    pub is_static: bool,
}

impl MethodRef {
    pub fn instance(
        declaring_type: TypeRef,
        name: Identifier,
        parameters: Vec<TypeRef>,
        return_type: TypeRef,
    ) -> Self {
        Self {
            declaring_type,
            name,
            parameters,
            return_type,
            is_static: false,
        }
    }

    pub fn static_method(
        declaring_type: TypeRef,
        name: Identifier,
        parameters: Vec<TypeRef>,
        return_type: TypeRef,
    ) -> Self {
        Self {
            declaring_type,
            name,
            parameters,
            return_type,
            is_static: true,
        }
    }
}

impl Display for MethodRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_static {
            write!(f, "static ")?;
        }
        write!(
            f,
            "{} {}.{}(",
            self.return_type, self.declaring_type, self.name
        )?;
        write_comma_separated(f, &self.parameters)?;
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructorRef {
    pub declaring_type: TypeRef,
    pub parameters: Vec<TypeRef>,
}

impl ConstructorRef {
    pub fn new(declaring_type: TypeRef, parameters: Vec<TypeRef>) -> Self {
        Self {
            declaring_type,
            parameters,
        }
    }
}

impl Display for ConstructorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.declaring_type)?;
        write_comma_separated(f, &self.parameters)?;
        write!(f, ")")
    }
}

pub(crate) fn write_comma_separated<T: Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn test_display_generic_type() {
        let ty = TypeRef::generic("Dictionary", vec![TypeRef::string(), TypeRef::int32()]);
        assert_eq!(format!("{}", ty), "Dictionary<String, Int32>");
    }

    #[test]
    fn test_display_array_type() {
        assert_eq!(format!("{}", TypeRef::array(TypeRef::int32())), "Int32[]");
    }

    #[test]
    fn test_nullable() {
        let ty = TypeRef::nullable(TypeRef::int32());
        assert!(ty.is_nullable());
        assert!(!TypeRef::int32().is_nullable());
        assert_eq!(format!("{}", ty), "Nullable<Int32>");
    }

    #[test]
    fn test_overloads_are_distinct_methods() {
        let math = TypeRef::named("Math");
        let int_max = MethodRef::static_method(
            math.clone(),
            Identifier::new_unchecked("Max"),
            vec![TypeRef::int32(), TypeRef::int32()],
            TypeRef::int32(),
        );
        let long_max = MethodRef::static_method(
            math,
            Identifier::new_unchecked("Max"),
            vec![TypeRef::int64(), TypeRef::int64()],
            TypeRef::int64(),
        );
        assert_ne!(int_max, long_max);
        assert_eq!(
            format!("{}", int_max),
            "static Int32 Math.Max(Int32, Int32)"
        );
    }

    #[test]
    fn test_display_constructor() {
        let ctor = ConstructorRef::new(
            TypeRef::named("Point"),
            vec![TypeRef::int32(), TypeRef::int32()],
        );
        assert_eq!(format!("{}", ctor), "Point(Int32, Int32)");
    }
}
