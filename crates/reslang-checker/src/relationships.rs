//! Relationship checking: target-resource existence and the `on_delete`
//! policy's well-formedness and nullability requirement.

use reslang_ast::Relationship;
use reslang_common::{Diagnostic, DiagnosticCode};

use crate::state::CheckerState;

impl<'ast, 'opts> CheckerState<'ast, 'opts> {
    pub fn check_relationship(&mut self, relationship: &Relationship) {
        if !self.registry.contains(&relationship.target_resource) {
            self.diagnostics.push(Diagnostic::new(
                DiagnosticCode::Typ200,
                format!(
                    "relationship `{}` targets undefined resource `{}`",
                    relationship.field_name, relationship.target_resource
                ),
                relationship.location,
            ));
        }

        if !relationship.on_delete.is_valid() {
            self.diagnostics.push(Diagnostic::new(
                DiagnosticCode::Typ400,
                format!(
                    "relationship `{}` has an invalid on_delete policy `{}`",
                    relationship.field_name, relationship.on_delete.0
                ),
                relationship.location,
            ));
        }

        if relationship.on_delete.is_nullify() && !relationship.nullable {
            self.diagnostics.push(
                Diagnostic::new(
                    DiagnosticCode::Typ400,
                    format!("relationship `{}` with on_delete: nullify must be nullable", relationship.field_name),
                    relationship.location,
                )
                .with_suggestion(format!(
                    "use `{}?` instead of `{}!`",
                    relationship.target_resource, relationship.target_resource
                )),
            );
        }
    }
}
