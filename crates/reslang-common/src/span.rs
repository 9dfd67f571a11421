//! Source location tracking for AST nodes and diagnostics.
//!
//! Unlike a byte-offset `Span`, the language's AST carries line/column
//! positions directly from the lexer, so `Location` is the unit of record
//! here rather than a half-open byte range.

use serde::{Deserialize, Serialize};

/// A single source position: 1-indexed line and column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Location { line, column }
    }

    /// A placeholder location for synthetic nodes that have no real source.
    #[inline]
    pub const fn synthetic() -> Self {
        Location { line: 0, column: 0 }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A trait for AST nodes that carry a source location.
pub trait Located {
    fn location(&self) -> Location;
}

impl Located for Location {
    fn location(&self) -> Location {
        *self
    }
}
