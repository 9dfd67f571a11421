//! Top-level declarations: resources, fields, hooks, validations, constraint
//! blocks, computed fields, and relationships.

use reslang_common::Location;

use crate::expr::Expr;
use crate::stmt::Stmt;
use crate::type_node::TypeNode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookTiming {
    Before,
    After,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Create,
    Update,
    Delete,
    Save,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelationshipKind {
    BelongsTo,
    HasOne,
    HasMany,
    HasManyThrough,
}

/// The on-delete policy string as written in source. Kept as a string (with
/// an empty string meaning "unspecified") rather than an `Option<Enum>`
/// because the checker must still flag *unrecognised* spellings with
/// `TYP400`, which a closed Rust enum parsed upstream would have already
/// rejected.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct OnDeletePolicy(pub String);

impl OnDeletePolicy {
    pub const CASCADE: &'static str = "cascade";
    pub const RESTRICT: &'static str = "restrict";
    pub const NULLIFY: &'static str = "nullify";

    pub fn is_valid(&self) -> bool {
        matches!(self.0.as_str(), "" | "cascade" | "restrict" | "nullify")
    }

    pub fn is_nullify(&self) -> bool {
        self.0 == Self::NULLIFY
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConstraint {
    pub name: String,
    pub args: Vec<Expr>,
    pub events: Option<Vec<LifecycleEvent>>,
    pub when: Option<Expr>,
    pub custom_error: Option<String>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub type_node: TypeNode,
    pub nullable: bool,
    pub default: Option<Expr>,
    pub constraints: Vec<FieldConstraint>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Hook {
    pub timing: HookTiming,
    pub event: LifecycleEvent,
    pub is_async: bool,
    pub is_transaction: bool,
    pub body: Vec<Stmt>,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Validation {
    pub name: String,
    pub condition: Expr,
    pub message: String,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConstraintBlock {
    pub name: String,
    pub events: Vec<LifecycleEvent>,
    pub when: Option<Expr>,
    pub condition: Expr,
    pub message: String,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ComputedField {
    pub name: String,
    pub type_node: TypeNode,
    pub body: Expr,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Relationship {
    pub field_name: String,
    pub target_resource: String,
    pub kind: RelationshipKind,
    pub foreign_key: String,
    pub through_table: Option<String>,
    pub on_delete: OnDeletePolicy,
    pub nullable: bool,
    pub location: Location,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub name: String,
    pub fields: Vec<Field>,
    pub hooks: Vec<Hook>,
    pub validations: Vec<Validation>,
    pub constraints: Vec<ConstraintBlock>,
    pub computed_fields: Vec<ComputedField>,
    pub relationships: Vec<Relationship>,
    pub allowed_operations: Vec<String>,
    pub location: Location,
}

impl Resource {
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Program {
    pub resources: Vec<Resource>,
}
