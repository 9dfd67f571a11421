//! The closed `Type` sum, its uniform operations, and conversion from the
//! AST's `TypeNode`.

use reslang_ast::{TypeNode, TypeNodeKind};
use reslang_common::ResError;

/// Internal sentinel primitive names (see design notes on sentinel types).
pub const NIL_NAME: &str = "nil";
pub const ANY_NAME: &str = "any";
pub const UNKNOWN_NAME: &str = "unknown";
pub const VOID_NAME: &str = "void";

const STRING_FAMILY: [&str; 3] = ["string", "text", "markdown"];
const NUMERIC_NAMES: [&str; 2] = ["int", "float"];

/// The closed type sum. Every value carries exactly one nullability flag.
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Primitive { name: String, nullable: bool },
    Array { element: Box<Type>, nullable: bool },
    Hash { key: Box<Type>, value: Box<Type>, nullable: bool },
    Struct { fields: Vec<(String, Type)>, nullable: bool },
    Enum { values: Vec<String>, nullable: bool },
    Resource { name: String, nullable: bool },
}

impl Type {
    pub fn primitive(name: impl Into<String>, nullable: bool) -> Type {
        Type::Primitive { name: name.into(), nullable }
    }

    pub fn array(element: Type, nullable: bool) -> Type {
        Type::Array { element: Box::new(element), nullable }
    }

    pub fn hash(key: Type, value: Type, nullable: bool) -> Type {
        Type::Hash { key: Box::new(key), value: Box::new(value), nullable }
    }

    pub fn enum_of(values: Vec<String>, nullable: bool) -> Type {
        Type::Enum { values, nullable }
    }

    pub fn struct_of(fields: Vec<(String, Type)>, nullable: bool) -> Type {
        Type::Struct { fields, nullable }
    }

    pub fn resource(name: impl Into<String>, nullable: bool) -> Type {
        Type::Resource { name: name.into(), nullable }
    }

    // Convenience constructors for the common required primitives.
    pub fn string() -> Type {
        Type::primitive("string", false)
    }

    pub fn int() -> Type {
        Type::primitive("int", false)
    }

    pub fn float() -> Type {
        Type::primitive("float", false)
    }

    pub fn bool_() -> Type {
        Type::primitive("bool", false)
    }

    pub fn timestamp() -> Type {
        Type::primitive("timestamp", false)
    }

    pub fn uuid() -> Type {
        Type::primitive("uuid", false)
    }

    /// The sentinel for a literal `nil` expression: nullable, named `nil`.
    pub fn nil_sentinel() -> Type {
        Type::primitive(NIL_NAME, true)
    }

    /// The sentinel returned when inference cannot meaningfully type a node.
    pub fn unknown() -> Type {
        Type::primitive(UNKNOWN_NAME, false)
    }

    /// The dynamic escape-hatch sentinel; assignable only with itself.
    pub fn any() -> Type {
        Type::primitive(ANY_NAME, false)
    }

    pub fn void() -> Type {
        Type::primitive(VOID_NAME, false)
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            Type::Primitive { nullable, .. }
            | Type::Array { nullable, .. }
            | Type::Hash { nullable, .. }
            | Type::Struct { nullable, .. }
            | Type::Enum { nullable, .. }
            | Type::Resource { nullable, .. } => *nullable,
        }
    }

    /// Return a new `Type`, identical except it is nullable.
    pub fn to_nullable(&self) -> Type {
        self.with_nullable(true)
    }

    /// Return a new `Type`, identical except it is required.
    pub fn to_required(&self) -> Type {
        self.with_nullable(false)
    }

    fn with_nullable(&self, nullable: bool) -> Type {
        match self {
            Type::Primitive { name, .. } => Type::Primitive { name: name.clone(), nullable },
            Type::Array { element, .. } => Type::Array { element: element.clone(), nullable },
            Type::Hash { key, value, .. } => Type::Hash { key: key.clone(), value: value.clone(), nullable },
            Type::Struct { fields, .. } => Type::Struct { fields: fields.clone(), nullable },
            Type::Enum { values, .. } => Type::Enum { values: values.clone(), nullable },
            Type::Resource { name, .. } => Type::Resource { name: name.clone(), nullable },
        }
    }

    /// Look up a field's type on a `Struct`. Returns `None` for every other
    /// variant and for missing fields.
    pub fn get_field(&self, name: &str) -> Option<Type> {
        match self {
            Type::Struct { fields, .. } => fields.iter().find(|(n, _)| n == name).map(|(_, ty)| ty.clone()),
            _ => None,
        }
    }

    /// Strict structural equality. Struct field order is irrelevant; enum
    /// value order is significant.
    pub fn equals(&self, other: &Type) -> bool {
        match (self, other) {
            (
                Type::Primitive { name: a_name, nullable: a_null },
                Type::Primitive { name: b_name, nullable: b_null },
            ) => a_name == b_name && a_null == b_null,
            (
                Type::Array { element: a_elem, nullable: a_null },
                Type::Array { element: b_elem, nullable: b_null },
            ) => a_null == b_null && a_elem.equals(b_elem),
            (
                Type::Hash { key: a_key, value: a_val, nullable: a_null },
                Type::Hash { key: b_key, value: b_val, nullable: b_null },
            ) => a_null == b_null && a_key.equals(b_key) && a_val.equals(b_val),
            (
                Type::Struct { fields: a_fields, nullable: a_null },
                Type::Struct { fields: b_fields, nullable: b_null },
            ) => {
                a_null == b_null
                    && a_fields.len() == b_fields.len()
                    && a_fields.iter().all(|(name, ty)| {
                        b_fields.iter().any(|(b_name, b_ty)| b_name == name && ty.equals(b_ty))
                    })
            }
            (
                Type::Enum { values: a_values, nullable: a_null },
                Type::Enum { values: b_values, nullable: b_null },
            ) => a_null == b_null && a_values == b_values,
            (
                Type::Resource { name: a_name, nullable: a_null },
                Type::Resource { name: b_name, nullable: b_null },
            ) => a_name == b_name && a_null == b_null,
            _ => false,
        }
    }

    /// Directional assignability: can a value of type `source` be stored
    /// into a location of type `self` (the target)?
    pub fn is_assignable_from(&self, source: &Type) -> bool {
        // Rule 2: nullability. Required target rejects nullable source.
        if !self.is_nullable() && source.is_nullable() {
            return false;
        }

        match (self, source) {
            (Type::Primitive { name: target_name, .. }, Type::Primitive { name: source_name, .. }) => {
                target_name == source_name
                    || (STRING_FAMILY.contains(&target_name.as_str())
                        && STRING_FAMILY.contains(&source_name.as_str()))
                    || (target_name == "float" && source_name == "int")
            }
            (Type::Array { element: target_elem, .. }, Type::Array { element: source_elem, .. }) => {
                target_elem.is_assignable_from(source_elem)
            }
            (
                Type::Hash { key: target_key, value: target_value, .. },
                Type::Hash { key: source_key, value: source_value, .. },
            ) => {
                target_key.is_assignable_from(source_key) && target_value.is_assignable_from(source_value)
            }
            (Type::Struct { fields: target_fields, .. }, Type::Struct { fields: source_fields, .. }) => {
                target_fields.len() == source_fields.len()
                    && target_fields.iter().all(|(name, target_ty)| {
                        source_fields
                            .iter()
                            .any(|(src_name, src_ty)| src_name == name && target_ty.is_assignable_from(src_ty))
                    })
            }
            (Type::Enum { values: target_values, .. }, Type::Enum { values: source_values, .. }) => {
                target_values == source_values
            }
            (Type::Resource { name: target_name, .. }, Type::Resource { name: source_name, .. }) => {
                target_name == source_name
            }
            _ => false,
        }
    }

    /// Canonical rendered form, e.g. `"array<string?>!"`. Part of the tested
    /// external surface — keep in sync with [`std::fmt::Display`].
    pub fn string_form(&self) -> String {
        self.to_string()
    }

    fn suffix(&self) -> &'static str {
        if self.is_nullable() { "?" } else { "!" }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Primitive { name, .. } => write!(f, "{name}{}", self.suffix()),
            Type::Array { element, .. } => write!(f, "array<{element}>{}", self.suffix()),
            Type::Hash { key, value, .. } => write!(f, "hash<{key}, {value}>{}", self.suffix()),
            Type::Enum { values, .. } => {
                let rendered = values.iter().map(|v| format!("\"{v}\"")).collect::<Vec<_>>().join(", ");
                write!(f, "enum [{rendered}]{}", self.suffix())
            }
            Type::Struct { fields, .. } => {
                let rendered = fields.iter().map(|(name, ty)| format!("{name}: {ty}")).collect::<Vec<_>>().join(", ");
                write!(f, "{{{rendered}}}{}", self.suffix())
            }
            Type::Resource { name, .. } => write!(f, "{name}{}", self.suffix()),
        }
    }
}

/// Construct a `Type` from a syntactic `TypeNode`, forcing the resulting
/// type's nullability to `nullable` (the caller's own nullability flag,
/// e.g. a field's `nullable` flag, which is tracked separately from the
/// type node's own flag). Nested element/key/value/struct-field nodes use
/// their own nullable flag, not the parent's.
pub fn from_type_node(node: &TypeNode, nullable: bool) -> Result<Type, ResError> {
    match &node.kind {
        TypeNodeKind::Nil => Err(ResError::NilTypeNode),
        TypeNodeKind::Primitive { name } => Ok(Type::primitive(name.clone(), nullable)),
        TypeNodeKind::Array { element } => {
            if matches!(element.kind, TypeNodeKind::Nil) {
                return Err(ResError::MissingArrayElement);
            }
            let element_ty = from_type_node(element, element.nullable)?;
            Ok(Type::array(element_ty, nullable))
        }
        TypeNodeKind::Hash { key, value } => {
            if matches!(key.kind, TypeNodeKind::Nil) || matches!(value.kind, TypeNodeKind::Nil) {
                return Err(ResError::MissingHashKeyOrValue);
            }
            let key_ty = from_type_node(key, key.nullable)?;
            let value_ty = from_type_node(value, value.nullable)?;
            Ok(Type::hash(key_ty, value_ty, nullable))
        }
        TypeNodeKind::Enum { values } => Ok(Type::enum_of(values.clone(), nullable)),
        TypeNodeKind::Struct { fields } => {
            let mut out = Vec::with_capacity(fields.len());
            for (name, field_node) in fields {
                let field_ty = from_type_node(field_node, field_node.nullable)?;
                out.push((name.clone(), field_ty));
            }
            Ok(Type::struct_of(out, nullable))
        }
        TypeNodeKind::Resource { name } => Ok(Type::resource(name.clone(), nullable)),
    }
}

/// The subset of primitive names recognised by the string family widening
/// rule (rule 3 of `is_assignable_from`).
pub fn is_string_family(name: &str) -> bool {
    STRING_FAMILY.contains(&name)
}

/// Whether `name` is one of the two numeric primitive names.
pub fn is_numeric_name(name: &str) -> bool {
    NUMERIC_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reslang_common::Location;

    fn loc() -> Location {
        Location::new(1, 1)
    }

    #[test]
    fn string_form_matches_canonical_contract() {
        let nested = Type::array(Type::array(Type::string().to_nullable(), false), false);
        assert_eq!(nested.string_form(), "array<array<string?>!>!");

        let hash = Type::hash(Type::string().to_nullable(), Type::int(), true);
        assert_eq!(hash.string_form(), "hash<string?, int!>?");
    }

    #[test]
    fn required_rejects_nullable_source() {
        assert!(!Type::string().is_assignable_from(&Type::string().to_nullable()));
        assert!(Type::string().to_nullable().is_assignable_from(&Type::string()));
    }

    #[test]
    fn string_family_is_mutually_assignable() {
        assert!(Type::string().is_assignable_from(&Type::primitive("text", false)));
        assert!(Type::primitive("markdown", false).is_assignable_from(&Type::string()));
    }

    #[test]
    fn numeric_widening_is_one_directional() {
        assert!(Type::float().is_assignable_from(&Type::int()));
        assert!(!Type::int().is_assignable_from(&Type::float()));
    }

    #[test]
    fn any_is_assignable_only_with_itself() {
        assert!(Type::any().is_assignable_from(&Type::any()));
        assert!(!Type::any().is_assignable_from(&Type::string()));
        assert!(!Type::string().is_assignable_from(&Type::any()));
    }

    #[test]
    fn struct_assignability_ignores_field_order() {
        let target = Type::struct_of(vec![("a".into(), Type::int()), ("b".into(), Type::string())], false);
        let source = Type::struct_of(vec![("b".into(), Type::string()), ("a".into(), Type::int())], false);
        assert!(target.is_assignable_from(&source));
        assert!(target.equals(&source));
    }

    #[test]
    fn enum_equality_is_order_dependent() {
        let a = Type::enum_of(vec!["x".into(), "y".into()], false);
        let b = Type::enum_of(vec!["y".into(), "x".into()], false);
        assert!(!a.equals(&b));
        assert!(!a.is_assignable_from(&b));
    }

    #[test]
    fn from_type_node_uses_child_nullability_not_parent() {
        use reslang_ast::TypeNode;

        let element = TypeNode::primitive("string", true, loc());
        let node = TypeNode::array(element, false, loc());
        let ty = from_type_node(&node, false).unwrap();
        assert_eq!(ty.string_form(), "array<string?>!");
    }

    #[test]
    fn from_type_node_rejects_nil() {
        use reslang_ast::TypeNode;
        let err = from_type_node(&TypeNode::nil(loc()), false).unwrap_err();
        assert_eq!(err, ResError::NilTypeNode);
    }
}
