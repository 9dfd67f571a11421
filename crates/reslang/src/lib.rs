//! Public facade over the resource-language type checker.
//!
//! Downstream consumers (a code generator, a CLI, an LSP server) depend on
//! this crate alone rather than reaching into the component crates
//! directly. The checker never installs a `tracing` subscriber itself —
//! embedding applications that want to see its `trace!`/`debug!` events
//! should install one of their own, e.g.:
//!
//! ```ignore
//! tracing_subscriber::fmt::init();
//! let diagnostics = reslang::check_program(&program, &reslang::CheckerOptions::default());
//! ```
//!
//! ```ignore
//! if diagnostics.has_errors() {
//!     for diagnostic in diagnostics.errors() {
//!         eprintln!("{}", diagnostic.render_human("schema.res"));
//!     }
//! }
//! ```

pub use reslang_checker::check_program;
pub use reslang_common::{CheckerOptions, Diagnostic, DiagnosticCode, ErrorList, Example, ResError, Severity};
pub use reslang_stdlib::{lookup as lookup_stdlib_function, Registry as StdlibRegistry, Signature, REGISTRY as STDLIB_REGISTRY};
pub use reslang_types::Type;

pub mod ast {
    //! The AST node family the checker consumes, re-exported so a parser
    //! crate has a single dependency to build against.
    pub use reslang_ast::*;
}
