//! Expression type inference: walks an `Expr` tree and produces a `Type`
//! for every node, accumulating diagnostics for ill-typed sub-expressions
//! along the way. Depends only on the AST and type crates plus the stdlib
//! registry — resource-graph lookups are abstracted behind [`ResourceLookup`]
//! so this crate never depends on the checker crate that owns the registry.

mod context;
mod infer;
mod scope;

pub use context::{InferCtx, ResourceLookup};
pub use infer::infer;
pub use scope::ScopeStack;
