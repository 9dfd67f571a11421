//! Internal inference failures.
//!
//! These are distinct from [`crate::diagnostics::Diagnostic`]: a `Diagnostic`
//! is the normal, recoverable, accumulated-list path. A `ResError` is raised
//! only where a conversion or an inference step has nothing meaningful to
//! return at all (e.g. converting a malformed `TypeNode`) and the caller
//! must decide how to recover — it never escapes `check_program`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResError {
    /// A `TypeNode` tagged as `nil` was encountered where a concrete type was expected.
    NilTypeNode,
    /// An `array` type node had no element type.
    MissingArrayElement,
    /// A `hash` type node was missing its key or value type.
    MissingHashKeyOrValue,
    /// A type node carried a variant tag the converter does not recognise.
    UnknownTypeVariant(String),
}

impl std::fmt::Display for ResError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResError::NilTypeNode => write!(f, "cannot convert a nil type node to a concrete type"),
            ResError::MissingArrayElement => write!(f, "array type node is missing its element type"),
            ResError::MissingHashKeyOrValue => write!(f, "hash type node is missing its key or value type"),
            ResError::UnknownTypeVariant(tag) => write!(f, "unknown type node variant: {tag}"),
        }
    }
}

impl std::error::Error for ResError {}
