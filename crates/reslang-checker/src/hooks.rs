//! Per-resource behavior checking: hooks, validations, constraint blocks,
//! and computed fields, each run in its own fresh scope with `self` bound.

use reslang_ast::{ComputedField, ConstraintBlock, Hook, Validation};
use reslang_common::{Diagnostic, DiagnosticCode};
use reslang_infer::{infer, InferCtx};
use reslang_types::{from_type_node, Type};

use crate::state::CheckerState;
use crate::statements::check_stmt;

impl<'ast, 'opts> CheckerState<'ast, 'opts> {
    pub fn check_hook(&mut self, resource_name: &str, hook: &Hook) {
        let mut ctx = InferCtx::with_resource(&mut self.diagnostics, &self.registry, self.options, resource_name);
        for stmt in &hook.body {
            check_stmt(stmt, &mut ctx);
        }
    }

    pub fn check_validation(&mut self, resource_name: &str, validation: &Validation) {
        let mut ctx = InferCtx::with_resource(&mut self.diagnostics, &self.registry, self.options, resource_name);
        let cond_ty = infer(&validation.condition, &mut ctx);
        if !Type::bool_().is_assignable_from(&cond_ty) {
            ctx.diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::Typ102,
                    format!("validation `{}` condition must be bool!", validation.name),
                    validation.condition.location,
                )
                .with_expected("bool!")
                .with_actual(cond_ty.string_form()),
            );
        }
    }

    pub fn check_constraint_block(&mut self, resource_name: &str, constraint: &ConstraintBlock) {
        let mut ctx = InferCtx::with_resource(&mut self.diagnostics, &self.registry, self.options, resource_name);

        if let Some(when) = &constraint.when {
            let when_ty = infer(when, &mut ctx);
            if !Type::bool_().is_assignable_from(&when_ty) {
                ctx.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::Typ102,
                        format!("constraint `{}` `when` clause must be bool!", constraint.name),
                        when.location,
                    )
                    .with_expected("bool!")
                    .with_actual(when_ty.string_form()),
                );
            }
        }

        let cond_ty = infer(&constraint.condition, &mut ctx);
        if !Type::bool_().is_assignable_from(&cond_ty) {
            ctx.diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::Typ102,
                    format!("constraint `{}` condition must be bool!", constraint.name),
                    constraint.condition.location,
                )
                .with_expected("bool!")
                .with_actual(cond_ty.string_form()),
            );
        }
    }

    pub fn check_computed_field(&mut self, resource_name: &str, computed: &ComputedField) {
        let mut ctx = InferCtx::with_resource(&mut self.diagnostics, &self.registry, self.options, resource_name);
        let body_ty = infer(&computed.body, &mut ctx);

        match from_type_node(&computed.type_node, computed.type_node.nullable) {
            Ok(declared) => {
                if !declared.is_assignable_from(&body_ty) {
                    ctx.diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCode::Typ102,
                            format!("computed field `{}` body does not match its declared type", computed.name),
                            computed.body.location,
                        )
                        .with_expected(declared.string_form())
                        .with_actual(body_ty.string_form()),
                    );
                }
            }
            Err(_) => {
                ctx.diagnostics.push(Diagnostic::new(
                    DiagnosticCode::Typ200,
                    format!("invalid type for computed field `{}`", computed.name),
                    computed.location,
                ));
            }
        }
    }
}
