//! The two-pass program checker: collects resources into a registry, then
//! checks each one's fields, hooks, validations, constraint blocks,
//! computed fields, and relationships against it. `check_program` is the
//! single public entry point; it never panics and never returns an `Err` —
//! every finding, recoverable or not, lands in the returned `ErrorList`.

mod fields;
mod hooks;
mod relationships;
mod state;
mod statements;

use reslang_ast::Program;
use reslang_common::{CheckerOptions, ErrorList};

pub use state::{CheckerState, ResourceRegistry};

/// Type-check an entire program, returning every diagnostic accumulated
/// along the way. Diagnostic order follows source order: resources in
/// program order, then per-resource checks in the fixed order below.
pub fn check_program(program: &Program, options: &CheckerOptions) -> ErrorList {
    let span = tracing::info_span!("check_program", resource_count = program.resources.len());
    let _enter = span.enter();

    let mut registry = ResourceRegistry::new();
    for resource in &program.resources {
        registry.insert(resource);
    }

    let mut state = CheckerState::new(registry, options);

    for resource in &program.resources {
        state.check_resource(resource);
    }

    state.into_diagnostics()
}

impl<'ast, 'opts> CheckerState<'ast, 'opts> {
    pub fn check_resource(&mut self, resource: &reslang_ast::Resource) {
        let span = tracing::debug_span!("check_resource", name = %resource.name);
        let _enter = span.enter();

        self.current_resource = Some(resource.name.clone());

        for field in &resource.fields {
            self.check_field(&resource.name, field);
        }
        for hook in &resource.hooks {
            self.check_hook(&resource.name, hook);
        }
        for validation in &resource.validations {
            self.check_validation(&resource.name, validation);
        }
        for constraint in &resource.constraints {
            self.check_constraint_block(&resource.name, constraint);
        }
        for computed in &resource.computed_fields {
            self.check_computed_field(&resource.name, computed);
        }
        for relationship in &resource.relationships {
            self.check_relationship(relationship);
        }

        self.current_resource = None;
    }
}
