//! The lexical scope stack used while checking a single hook, validation,
//! constraint block, or computed field.

use rustc_hash::FxHashMap;

use reslang_types::Type;

/// A stack of nested scopes, innermost last. The outer scope (index 0) is
/// always the empty map a fresh check starts with.
#[derive(Debug, Default)]
pub struct ScopeStack {
    frames: Vec<FxHashMap<String, Type>>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack { frames: vec![FxHashMap::default()] }
    }

    /// Push a fresh, empty frame (entering a hook/validation/constraint/computed body).
    pub fn push(&mut self) {
        self.frames.push(FxHashMap::default());
    }

    /// Pop the innermost frame, restoring the previous scope.
    pub fn pop(&mut self) {
        self.frames.pop();
        if self.frames.is_empty() {
            self.frames.push(FxHashMap::default());
        }
    }

    /// Bind a name in the innermost frame, shadowing any outer binding.
    pub fn bind(&mut self, name: impl Into<String>, ty: Type) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.into(), ty);
        }
    }

    /// Look up a name, innermost frame first.
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_scope_shadows_outer() {
        let mut scopes = ScopeStack::new();
        scopes.bind("x", Type::int());
        scopes.push();
        scopes.bind("x", Type::string());
        assert_eq!(scopes.lookup("x"), Some(&Type::string()));
        scopes.pop();
        assert_eq!(scopes.lookup("x"), Some(&Type::int()));
    }

    #[test]
    fn popping_past_the_outer_frame_leaves_an_empty_scope() {
        let mut scopes = ScopeStack::new();
        scopes.pop();
        scopes.bind("y", Type::bool_());
        assert_eq!(scopes.lookup("y"), Some(&Type::bool_()));
    }
}
