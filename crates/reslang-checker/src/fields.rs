//! Per-field checking: type-node conversion, constraint dispatch, and the
//! default-value compatibility check.

use reslang_ast::{Field, FieldConstraint};
use reslang_common::{Diagnostic, DiagnosticCode};
use reslang_infer::{infer, InferCtx};
use reslang_types::{from_type_node, is_numeric_name, Type};

use crate::state::CheckerState;

/// The field types `min`/`max`/`pattern` accept. Narrower than
/// `is_string_family`, which also admits `markdown` for assignability
/// purposes but not for length/pattern constraints.
const BOUNDABLE_STRING_NAMES: [&str; 2] = ["string", "text"];

fn is_boundable_string(field_ty: &Type) -> bool {
    matches!(field_ty, Type::Primitive { name, .. } if BOUNDABLE_STRING_NAMES.contains(&name.as_str()))
}

impl<'ast, 'opts> CheckerState<'ast, 'opts> {
    pub fn check_field(&mut self, resource_name: &str, field: &Field) {
        let field_ty = match from_type_node(&field.type_node, field.nullable) {
            Ok(ty) => ty,
            Err(_) => {
                self.diagnostics.push(Diagnostic::new(
                    DiagnosticCode::Typ200,
                    format!("invalid type for field `{}`", field.name),
                    field.location,
                ));
                return;
            }
        };

        for constraint in &field.constraints {
            self.check_field_constraint(resource_name, field, &field_ty, constraint);
        }

        if let Some(default_expr) = &field.default {
            let mut ctx = InferCtx::with_resource(&mut self.diagnostics, &self.registry, self.options, resource_name);
            let default_ty = infer(default_expr, &mut ctx);
            if !field_ty.is_assignable_from(&default_ty) {
                ctx.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticCode::Typ102,
                        format!("default value for field {} does not match its type", field.name),
                        default_expr.location,
                    )
                    .with_expected(field_ty.string_form())
                    .with_actual(default_ty.string_form()),
                );
            }
        }
    }

    fn check_field_constraint(&mut self, resource_name: &str, field: &Field, field_ty: &Type, constraint: &FieldConstraint) {
        let is_numeric_field = matches!(field_ty, Type::Primitive { name, .. } if is_numeric_name(name));
        let is_string_like_field = is_boundable_string(field_ty);

        match constraint.name.as_str() {
            "min" | "max" => {
                if !is_numeric_field && !is_string_like_field {
                    self.diagnostics.push(Diagnostic::new(
                        DiagnosticCode::Typ400,
                        format!(
                            "`{}` is not valid on field `{}` of type {}",
                            constraint.name,
                            field.name,
                            field_ty.string_form()
                        ),
                        constraint.location,
                    ));
                    return;
                }

                let Some(arg) = constraint.args.first() else { return };
                let mut ctx = InferCtx::with_resource(&mut self.diagnostics, &self.registry, self.options, resource_name);
                let arg_ty = infer(arg, &mut ctx);
                // A numeric field bounds itself with its own type; string-family
                // fields bound their *length*, which is always an int.
                let expected = if is_numeric_field { field_ty.to_required() } else { Type::int() };
                if !expected.is_assignable_from(&arg_ty) {
                    ctx.diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCode::Typ401,
                            format!("`{}` argument on field `{}` has the wrong type", constraint.name, field.name),
                            arg.location,
                        )
                        .with_expected(expected.string_form())
                        .with_actual(arg_ty.string_form()),
                    );
                }
            }
            "pattern" => {
                if !is_string_like_field {
                    self.diagnostics.push(Diagnostic::new(
                        DiagnosticCode::Typ400,
                        format!("`pattern` is not valid on field `{}` of type {}", field.name, field_ty.string_form()),
                        constraint.location,
                    ));
                }
            }
            "unique" | "primary" | "auto" | "auto_update" => {}
            "default" => {
                let Some(arg) = constraint.args.first() else { return };
                let mut ctx = InferCtx::with_resource(&mut self.diagnostics, &self.registry, self.options, resource_name);
                let arg_ty = infer(arg, &mut ctx);
                if !field_ty.is_assignable_from(&arg_ty) {
                    ctx.diagnostics.push(
                        Diagnostic::new(
                            DiagnosticCode::Typ401,
                            format!("`default` argument does not match field `{}`'s type", field.name),
                            arg.location,
                        )
                        .with_expected(field_ty.string_form())
                        .with_actual(arg_ty.string_form()),
                    );
                }
            }
            _ => {}
        }
    }
}
