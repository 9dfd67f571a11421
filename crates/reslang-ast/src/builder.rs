//! Small helpers for constructing fixture ASTs in tests, standing in for the
//! real parser when exercising the checker in isolation.

use reslang_common::Location;

use crate::expr::{CallArg, Expr, ExprKind, Literal};
use crate::resource::{
    ComputedField, ConstraintBlock, Field, FieldConstraint, Hook, HookTiming, LifecycleEvent, OnDeletePolicy,
    Relationship, RelationshipKind, Resource, Validation,
};
use crate::stmt::{IfBranch, Stmt, StmtKind};
use crate::type_node::TypeNode;

/// A fixed location used by fixtures that don't care about exact line/column.
pub fn loc(line: u32, column: u32) -> Location {
    Location::new(line, column)
}

pub fn ident(name: &str) -> Expr {
    Expr::new(ExprKind::Identifier(name.to_string()), loc(1, 1))
}

pub fn self_expr() -> Expr {
    Expr::new(ExprKind::SelfExpr, loc(1, 1))
}

pub fn field_access(object: Expr, field: &str) -> Expr {
    Expr::new(
        ExprKind::FieldAccess { object: Box::new(object), field: field.to_string() },
        loc(1, 1),
    )
}

pub fn safe_nav(object: Expr, field: &str) -> Expr {
    Expr::new(
        ExprKind::SafeNavigation { object: Box::new(object), field: field.to_string() },
        loc(1, 1),
    )
}

pub fn string_lit(value: &str) -> Expr {
    Expr::new(ExprKind::Literal(Literal::String(value.to_string())), loc(1, 1))
}

pub fn int_lit(value: i64) -> Expr {
    Expr::new(ExprKind::Literal(Literal::Int(value)), loc(1, 1))
}

pub fn float_lit(value: f64) -> Expr {
    Expr::new(ExprKind::Literal(Literal::Float(value)), loc(1, 1))
}

pub fn bool_lit(value: bool) -> Expr {
    Expr::new(ExprKind::Literal(Literal::Bool(value)), loc(1, 1))
}

pub fn nil_lit() -> Expr {
    Expr::new(ExprKind::Literal(Literal::Nil), loc(1, 1))
}

pub fn binary(op: &str, left: Expr, right: Expr) -> Expr {
    Expr::new(ExprKind::Binary { op: op.to_string(), left: Box::new(left), right: Box::new(right) }, loc(1, 1))
}

pub fn logical(op: &str, left: Expr, right: Expr) -> Expr {
    Expr::new(ExprKind::Logical { op: op.to_string(), left: Box::new(left), right: Box::new(right) }, loc(1, 1))
}

pub fn unary(op: &str, operand: Expr) -> Expr {
    Expr::new(ExprKind::Unary { op: op.to_string(), operand: Box::new(operand) }, loc(1, 1))
}

pub fn null_coalesce(left: Expr, right: Expr) -> Expr {
    Expr::new(ExprKind::NullCoalesce { left: Box::new(left), right: Box::new(right) }, loc(1, 1))
}

pub fn namespaced_call(namespace: &str, function: &str, args: Vec<Expr>) -> Expr {
    Expr::new(
        ExprKind::Call {
            namespace: Some(namespace.to_string()),
            function: function.to_string(),
            args: args.into_iter().map(|expr| CallArg { expr }).collect(),
        },
        loc(1, 1),
    )
}

pub fn bare_call(function: &str, args: Vec<Expr>) -> Expr {
    Expr::new(
        ExprKind::Call {
            namespace: None,
            function: function.to_string(),
            args: args.into_iter().map(|expr| CallArg { expr }).collect(),
        },
        loc(1, 1),
    )
}

pub fn assign(target: Expr, value: Expr) -> Stmt {
    Stmt::new(StmtKind::Assignment { target, value }, loc(1, 1))
}

pub fn expr_stmt(expr: Expr) -> Stmt {
    Stmt::new(StmtKind::Expr(expr), loc(1, 1))
}

pub fn let_stmt(name: &str, declared_type: Option<TypeNode>, value: Expr) -> Stmt {
    Stmt::new(StmtKind::Let { name: name.to_string(), declared_type, value }, loc(1, 1))
}

pub fn return_stmt(value: Option<Expr>) -> Stmt {
    Stmt::new(StmtKind::Return(value), loc(1, 1))
}

pub fn if_stmt(branches: Vec<(Expr, Vec<Stmt>)>, else_body: Option<Vec<Stmt>>) -> Stmt {
    let branches = branches.into_iter().map(|(condition, body)| IfBranch { condition, body }).collect();
    Stmt::new(StmtKind::If { branches, else_body }, loc(1, 1))
}

pub fn field(name: &str, type_node: TypeNode, nullable: bool) -> Field {
    Field {
        name: name.to_string(),
        type_node,
        nullable,
        default: None,
        constraints: Vec::new(),
        location: loc(1, 1),
    }
}

pub fn field_with_constraint(mut base: Field, constraint: FieldConstraint) -> Field {
    base.constraints.push(constraint);
    base
}

pub fn empty_resource(name: &str) -> Resource {
    Resource {
        name: name.to_string(),
        fields: Vec::new(),
        hooks: Vec::new(),
        validations: Vec::new(),
        constraints: Vec::new(),
        computed_fields: Vec::new(),
        relationships: Vec::new(),
        allowed_operations: Vec::new(),
        location: loc(1, 1),
    }
}

pub fn field_with_default(mut base: Field, default: Expr) -> Field {
    base.default = Some(default);
    base
}

pub fn field_constraint(name: &str, args: Vec<Expr>) -> FieldConstraint {
    FieldConstraint { name: name.to_string(), args, events: None, when: None, custom_error: None, location: loc(1, 1) }
}

pub fn hook(timing: HookTiming, event: LifecycleEvent, body: Vec<Stmt>) -> Hook {
    Hook { timing, event, is_async: false, is_transaction: false, body, location: loc(1, 1) }
}

pub fn validation(name: &str, condition: Expr, message: &str) -> Validation {
    Validation { name: name.to_string(), condition, message: message.to_string(), location: loc(1, 1) }
}

pub fn constraint_block(name: &str, events: Vec<LifecycleEvent>, when: Option<Expr>, condition: Expr, message: &str) -> ConstraintBlock {
    ConstraintBlock { name: name.to_string(), events, when, condition, message: message.to_string(), location: loc(1, 1) }
}

pub fn computed_field(name: &str, type_node: TypeNode, body: Expr) -> ComputedField {
    ComputedField { name: name.to_string(), type_node, body, location: loc(1, 1) }
}

pub fn relationship(
    field_name: &str,
    target_resource: &str,
    kind: RelationshipKind,
    foreign_key: &str,
    on_delete: &str,
    nullable: bool,
) -> Relationship {
    Relationship {
        field_name: field_name.to_string(),
        target_resource: target_resource.to_string(),
        kind,
        foreign_key: foreign_key.to_string(),
        through_table: None,
        on_delete: OnDeletePolicy(on_delete.to_string()),
        nullable,
        location: loc(1, 1),
    }
}

/// A fully specified resource fixture, for scenarios `empty_resource` is too
/// bare for.
pub fn resource(
    name: &str,
    fields: Vec<Field>,
    hooks: Vec<Hook>,
    validations: Vec<Validation>,
    constraints: Vec<ConstraintBlock>,
    computed_fields: Vec<ComputedField>,
    relationships: Vec<Relationship>,
) -> Resource {
    Resource {
        name: name.to_string(),
        fields,
        hooks,
        validations,
        constraints,
        computed_fields,
        relationships,
        allowed_operations: Vec::new(),
        location: loc(1, 1),
    }
}
