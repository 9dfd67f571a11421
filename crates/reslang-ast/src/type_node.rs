//! `TypeNode`: the syntactic representation of a type annotation as the
//! parser would produce it, before it is resolved into a [`reslang_types::Type`].

use reslang_common::Location;

/// The discriminated shape of a type annotation. Each variant's own
/// `nullable` flag is independent of any enclosing node's flag — a field
/// typed `array<string?>!` is a required array of nullable strings.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeNodeKind {
    Primitive {
        name: String,
    },
    Array {
        element: Box<TypeNode>,
    },
    Hash {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
    },
    Enum {
        values: Vec<String>,
    },
    Struct {
        fields: Vec<(String, TypeNode)>,
    },
    Resource {
        name: String,
    },
    /// A malformed or absent node, e.g. an array annotation missing its
    /// element. The parser is expected never to emit this for a well-formed
    /// program, but the checker must still handle it without panicking.
    Nil,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeNode {
    pub kind: TypeNodeKind,
    pub nullable: bool,
    pub location: Location,
}

impl TypeNode {
    pub fn new(kind: TypeNodeKind, nullable: bool, location: Location) -> Self {
        TypeNode { kind, nullable, location }
    }

    pub fn primitive(name: impl Into<String>, nullable: bool, location: Location) -> Self {
        TypeNode::new(TypeNodeKind::Primitive { name: name.into() }, nullable, location)
    }

    pub fn array(element: TypeNode, nullable: bool, location: Location) -> Self {
        TypeNode::new(TypeNodeKind::Array { element: Box::new(element) }, nullable, location)
    }

    pub fn hash(key: TypeNode, value: TypeNode, nullable: bool, location: Location) -> Self {
        TypeNode::new(TypeNodeKind::Hash { key: Box::new(key), value: Box::new(value) }, nullable, location)
    }

    pub fn enum_of(values: Vec<String>, nullable: bool, location: Location) -> Self {
        TypeNode::new(TypeNodeKind::Enum { values }, nullable, location)
    }

    pub fn struct_of(fields: Vec<(String, TypeNode)>, nullable: bool, location: Location) -> Self {
        TypeNode::new(TypeNodeKind::Struct { fields }, nullable, location)
    }

    pub fn resource(name: impl Into<String>, nullable: bool, location: Location) -> Self {
        TypeNode::new(TypeNodeKind::Resource { name: name.into() }, nullable, location)
    }

    pub fn nil(location: Location) -> Self {
        TypeNode::new(TypeNodeKind::Nil, false, location)
    }
}
