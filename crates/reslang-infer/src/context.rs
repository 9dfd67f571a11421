//! Shared state threaded through a single expression-inference walk.

use reslang_ast::Field;
use reslang_common::{CheckerOptions, ErrorList};
use reslang_types::Type;

use crate::scope::ScopeStack;

/// The resource-graph lookups expression inference needs, without giving
/// `reslang-infer` a dependency on the checker crate that owns the
/// resource registry. Implemented by `reslang-checker`'s `ResourceRegistry`.
pub trait ResourceLookup {
    fn resource_exists(&self, name: &str) -> bool;

    /// The field named `field_name` on resource `resource_name`, if both exist.
    fn find_field<'a>(&'a self, resource_name: &str, field_name: &str) -> Option<&'a Field>;
}

pub struct InferCtx<'a, L: ResourceLookup> {
    pub scopes: ScopeStack,
    pub current_resource: Option<String>,
    pub diagnostics: &'a mut ErrorList,
    pub lookup: &'a L,
    pub options: &'a CheckerOptions,
}

impl<'a, L: ResourceLookup> InferCtx<'a, L> {
    pub fn new(diagnostics: &'a mut ErrorList, lookup: &'a L, options: &'a CheckerOptions) -> Self {
        InferCtx {
            scopes: ScopeStack::new(),
            current_resource: None,
            diagnostics,
            lookup,
            options,
        }
    }

    pub fn with_resource(diagnostics: &'a mut ErrorList, lookup: &'a L, options: &'a CheckerOptions, resource: impl Into<String>) -> Self {
        let mut ctx = Self::new(diagnostics, lookup, options);
        ctx.current_resource = Some(resource.into());
        ctx
    }

    /// Type of `self` in the current context; `None` outside a resource.
    pub fn self_type(&self) -> Option<Type> {
        self.current_resource.as_ref().map(|name| Type::resource(name.clone(), false))
    }
}
