//! Statement dispatch inside hook, rescue, and match bodies. Operates
//! directly on an `InferCtx` so it can run against any `ResourceLookup`
//! (the checker's registry in production, a fake in tests).

use reslang_ast::{Expr, ExprKind, IfBranch, Stmt, StmtKind};
use reslang_common::{Diagnostic, DiagnosticCode, Location};
use reslang_infer::{infer, InferCtx, ResourceLookup};
use reslang_types::{from_type_node, Type};

pub fn check_stmt<L: ResourceLookup>(stmt: &Stmt, ctx: &mut InferCtx<'_, L>) {
    match &stmt.kind {
        StmtKind::Expr(expr) => {
            infer(expr, ctx);
        }
        StmtKind::Assignment { target, value } => check_assignment(target, value, stmt.location, ctx),
        StmtKind::Let { name, declared_type, value } => {
            check_let(name, declared_type.as_ref(), value, stmt.location, ctx)
        }
        StmtKind::Return(value) => {
            if let Some(value) = value {
                infer(value, ctx);
            }
        }
        StmtKind::If { branches, else_body } => check_if(branches, else_body.as_deref(), ctx),
        StmtKind::Block { body, .. } => check_block(body, ctx),
        StmtKind::Rescue { try_body, rescue_body, .. } => {
            check_block(try_body, ctx);
            check_block(rescue_body, ctx);
        }
        StmtKind::Match { value, cases } => {
            infer(value, ctx);
            for case in cases {
                infer(&case.pattern, ctx);
                check_block(&case.body, ctx);
            }
        }
    }
}

fn check_block<L: ResourceLookup>(body: &[Stmt], ctx: &mut InferCtx<'_, L>) {
    ctx.scopes.push();
    for stmt in body {
        check_stmt(stmt, ctx);
    }
    ctx.scopes.pop();
}

/// Distinguishes `TYP101` (a required target rejecting a nullable value)
/// from the general `TYP102` type mismatch.
fn check_assignment<L: ResourceLookup>(target: &Expr, value: &Expr, location: Location, ctx: &mut InferCtx<'_, L>) {
    let target_ty = match &target.kind {
        ExprKind::Identifier(name) => match ctx.scopes.lookup(name).cloned() {
            Some(ty) => Some(ty),
            None => {
                ctx.diagnostics.push(Diagnostic::new(
                    DiagnosticCode::Typ201,
                    format!("undefined variable `{name}` on assignment"),
                    target.location,
                ));
                None
            }
        },
        _ => Some(infer(target, ctx)),
    };

    let value_ty = infer(value, ctx);

    let Some(target_ty) = target_ty else { return };

    if !target_ty.is_assignable_from(&value_ty) {
        let code = if !target_ty.is_nullable() && value_ty.is_nullable() {
            DiagnosticCode::Typ101
        } else {
            DiagnosticCode::Typ102
        };
        ctx.diagnostics.push(
            Diagnostic::new(code, "assignment value is not compatible with the target's type", location)
                .with_expected(target_ty.string_form())
                .with_actual(value_ty.string_form()),
        );
    }
}

fn check_let<L: ResourceLookup>(
    name: &str,
    declared_type: Option<&reslang_ast::TypeNode>,
    value: &Expr,
    location: Location,
    ctx: &mut InferCtx<'_, L>,
) {
    let value_ty = infer(value, ctx);

    let bound_ty = match declared_type {
        Some(node) => match from_type_node(node, node.nullable) {
            Ok(declared) => {
                if !declared.is_assignable_from(&value_ty) {
                    ctx.diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCode::Typ102,
                            format!("let binding `{name}` does not match its declared type"),
                            location,
                        )
                        .with_expected(declared.string_form())
                        .with_actual(value_ty.string_form()),
                    );
                }
                declared
            }
            Err(_) => value_ty,
        },
        None => value_ty,
    };

    ctx.scopes.bind(name, bound_ty);
}

fn check_if<L: ResourceLookup>(branches: &[IfBranch], else_body: Option<&[Stmt]>, ctx: &mut InferCtx<'_, L>) {
    for branch in branches {
        let cond_ty = infer(&branch.condition, ctx);
        if !Type::bool_().is_assignable_from(&cond_ty) {
            ctx.diagnostics.push(
                Diagnostic::new(DiagnosticCode::Typ102, "if condition must be bool!", branch.condition.location)
                    .with_expected("bool!")
                    .with_actual(cond_ty.string_form()),
            );
        }
        check_block(&branch.body, ctx);
    }
    if let Some(body) = else_body {
        check_block(body, ctx);
    }
}
