//! AST node definitions consumed by the reslang type checker.
//!
//! These types are owned by this workspace only because no external
//! lexer/parser crate is vendored alongside the checker here; they are
//! shaped to match exactly what such a parser would hand the checker.

pub mod builder;
pub mod expr;
pub mod resource;
pub mod stmt;
pub mod type_node;

pub use expr::{CallArg, Expr, ExprKind, InterpolationPart, Literal};
pub use resource::{
    ComputedField, Field, FieldConstraint, HookTiming, Hook, LifecycleEvent, OnDeletePolicy,
    Program, Relationship, RelationshipKind, Resource, Validation, ConstraintBlock,
};
pub use stmt::{IfBranch, MatchCase, Stmt, StmtKind};
pub use type_node::{TypeNode, TypeNodeKind};
