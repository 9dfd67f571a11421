//! Checker state: the resource registry built in pass 1, and the mutable
//! state threaded through pass 2.

use rustc_hash::FxHashMap;

use reslang_ast::{Field, Resource};
use reslang_common::{CheckerOptions, ErrorList};
use reslang_infer::ResourceLookup;

/// Name-keyed view over the resources of a single program, borrowed from
/// the caller's AST for the lifetime of one `check_program` invocation.
/// Duplicate names overwrite: `HashMap::insert` semantics, last writer wins.
pub struct ResourceRegistry<'ast> {
    resources: FxHashMap<String, &'ast Resource>,
}

impl<'ast> ResourceRegistry<'ast> {
    pub fn new() -> Self {
        ResourceRegistry { resources: FxHashMap::default() }
    }

    pub fn insert(&mut self, resource: &'ast Resource) {
        self.resources.insert(resource.name.clone(), resource);
    }

    pub fn get(&self, name: &str) -> Option<&'ast Resource> {
        self.resources.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }
}

impl<'ast> Default for ResourceRegistry<'ast> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'ast> ResourceLookup for ResourceRegistry<'ast> {
    fn resource_exists(&self, name: &str) -> bool {
        self.contains(name)
    }

    fn find_field<'a>(&'a self, resource_name: &str, field_name: &str) -> Option<&'a Field> {
        self.get(resource_name).and_then(|resource| resource.find_field(field_name))
    }
}

/// State owned by a single `check_program` invocation: the resource
/// registry built in pass 1, the diagnostics accumulated in pass 2, and the
/// read-only options for the invocation.
pub struct CheckerState<'ast, 'opts> {
    pub registry: ResourceRegistry<'ast>,
    pub current_resource: Option<String>,
    pub diagnostics: ErrorList,
    pub options: &'opts CheckerOptions,
}

impl<'ast, 'opts> CheckerState<'ast, 'opts> {
    pub fn new(registry: ResourceRegistry<'ast>, options: &'opts CheckerOptions) -> Self {
        CheckerState { registry, current_resource: None, diagnostics: ErrorList::new(), options }
    }

    pub fn into_diagnostics(self) -> ErrorList {
        self.diagnostics
    }
}
