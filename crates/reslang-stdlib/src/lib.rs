//! The immutable, process-wide stdlib signature registry: a mapping from
//! `(namespace, function_name)` to a [`Signature`].

mod data;
pub mod signature;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

pub use signature::{Param, Signature};

/// `Namespace -> (FunctionName -> Signature)`. Built once, shared read-only.
pub struct Registry {
    namespaces: FxHashMap<String, FxHashMap<String, Signature>>,
}

impl Registry {
    fn build() -> Self {
        let mut namespaces: FxHashMap<String, FxHashMap<String, Signature>> = FxHashMap::default();
        for entry in data::build_entries() {
            namespaces
                .entry(entry.namespace.clone())
                .or_default()
                .insert(entry.name.clone(), entry);
        }
        Registry { namespaces }
    }

    /// Look up a signature by namespace and function name. A lookup with an
    /// empty namespace always fails — bare calls take a different path
    /// (custom functions), which this registry knows nothing about.
    pub fn lookup(&self, namespace: &str, name: &str) -> Option<&Signature> {
        if namespace.is_empty() {
            return None;
        }
        self.namespaces.get(namespace)?.get(name)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    pub fn functions_in(&self, namespace: &str) -> impl Iterator<Item = &Signature> {
        self.namespaces.get(namespace).into_iter().flat_map(|m| m.values())
    }

    pub fn len(&self) -> usize {
        self.namespaces.values().map(|m| m.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The shared, immutable registry instance. Constructed once on first use.
pub static REGISTRY: Lazy<Registry> = Lazy::new(Registry::build);

/// Convenience wrapper around [`REGISTRY`].
pub fn lookup(namespace: &str, name: &str) -> Option<&'static Signature> {
    REGISTRY.lookup(namespace, name)
}
