//! Common types shared across the reslang type-checking crates:
//! - source locations (`Location`, `Located`)
//! - the diagnostic model (`Diagnostic`, `DiagnosticCode`, `ErrorList`)
//! - the internal inference-failure type (`ResError`)

pub mod diagnostics;
pub mod error;
pub mod options;
pub mod span;

pub use diagnostics::{Diagnostic, DiagnosticCode, ErrorList, Example, Severity};
pub use error::ResError;
pub use options::CheckerOptions;
pub use span::{Located, Location};
