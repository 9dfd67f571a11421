//! The diagnostic model: stable error codes, severity, and both human and
//! machine-structured rendering.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::span::Location;

/// Stable, public error codes. Renumbering or silently retiring a variant is
/// a breaking change (see the external-interfaces contract). Serializes as
/// the stable `"TYP101"`-style tag, not the Rust variant name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticCode {
    /// Nullability violation: nullable value assigned/passed where required without unwrap/coalesce.
    #[serde(rename = "TYP101")]
    Typ101,
    /// General type mismatch.
    #[serde(rename = "TYP102")]
    Typ102,
    /// Unnecessary unwrap / safe-navigation / coalesce (warning only).
    #[serde(rename = "TYP103")]
    Typ103,
    /// Undefined or invalid type, or an undefined resource referenced by a relationship.
    #[serde(rename = "TYP200")]
    Typ200,
    /// Undefined field or undefined local variable.
    #[serde(rename = "TYP201")]
    Typ201,
    /// Undefined resource referenced at the top level.
    #[serde(rename = "TYP202")]
    Typ202,
    /// Undefined function (no matching stdlib or custom signature).
    #[serde(rename = "TYP300")]
    Typ300,
    /// Invalid argument count for a call.
    #[serde(rename = "TYP301")]
    Typ301,
    /// Invalid argument type for a call.
    #[serde(rename = "TYP302")]
    Typ302,
    /// Invalid constraint type for the targeted field type.
    #[serde(rename = "TYP400")]
    Typ400,
    /// Constraint argument type mismatch.
    #[serde(rename = "TYP401")]
    Typ401,
    /// Invalid binary operation.
    #[serde(rename = "TYP500")]
    Typ500,
    /// Invalid unary operation.
    #[serde(rename = "TYP501")]
    Typ501,
    /// Invalid index operation (indexed target is not array/hash).
    #[serde(rename = "TYP502")]
    Typ502,
}

impl DiagnosticCode {
    /// The stable string tag, e.g. `"TYP101"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::Typ101 => "TYP101",
            DiagnosticCode::Typ102 => "TYP102",
            DiagnosticCode::Typ103 => "TYP103",
            DiagnosticCode::Typ200 => "TYP200",
            DiagnosticCode::Typ201 => "TYP201",
            DiagnosticCode::Typ202 => "TYP202",
            DiagnosticCode::Typ300 => "TYP300",
            DiagnosticCode::Typ301 => "TYP301",
            DiagnosticCode::Typ302 => "TYP302",
            DiagnosticCode::Typ400 => "TYP400",
            DiagnosticCode::Typ401 => "TYP401",
            DiagnosticCode::Typ500 => "TYP500",
            DiagnosticCode::Typ501 => "TYP501",
            DiagnosticCode::Typ502 => "TYP502",
        }
    }

    /// A short slug used as the diagnostic's `type` field, e.g. `"nullability_violation"`.
    pub const fn slug(self) -> &'static str {
        match self {
            DiagnosticCode::Typ101 => "nullability_violation",
            DiagnosticCode::Typ102 => "type_mismatch",
            DiagnosticCode::Typ103 => "unnecessary_narrowing",
            DiagnosticCode::Typ200 => "undefined_type",
            DiagnosticCode::Typ201 => "undefined_field",
            DiagnosticCode::Typ202 => "undefined_resource",
            DiagnosticCode::Typ300 => "undefined_function",
            DiagnosticCode::Typ301 => "invalid_argument_count",
            DiagnosticCode::Typ302 => "invalid_argument_type",
            DiagnosticCode::Typ400 => "invalid_constraint_target",
            DiagnosticCode::Typ401 => "invalid_constraint_argument",
            DiagnosticCode::Typ500 => "invalid_binary_operation",
            DiagnosticCode::Typ501 => "invalid_unary_operation",
            DiagnosticCode::Typ502 => "invalid_index_operation",
        }
    }

    /// The default severity for this code. `TYP103` is the only warning;
    /// everything else is an error unless escalated by `CheckerOptions`.
    pub const fn default_severity(self) -> Severity {
        match self {
            DiagnosticCode::Typ103 => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single example snippet attached to a diagnostic, e.g. to show the
/// accepted alternative ("use `self.bio!` or `self.bio ?? default`").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub description: String,
    pub snippet: String,
}

/// A structured, stable-coded report of a type-system finding.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    pub location: Location,
    pub expected: Option<String>,
    pub actual: Option<String>,
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

/// Serializes with an extra `type` field carrying `code.slug()`, so the
/// machine format names both the stable code and its human-readable slug.
impl Serialize for Diagnostic {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.examples.is_empty() { 8 } else { 9 };
        let mut state = serializer.serialize_struct("Diagnostic", len)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("type", self.code.slug())?;
        state.serialize_field("severity", &self.severity)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("location", &self.location)?;
        state.serialize_field("expected", &self.expected)?;
        state.serialize_field("actual", &self.actual)?;
        state.serialize_field("suggestion", &self.suggestion)?;
        if !self.examples.is_empty() {
            state.serialize_field("examples", &self.examples)?;
        } else {
            state.skip_field("examples")?;
        }
        state.end()
    }
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>, location: Location) -> Self {
        Diagnostic {
            code,
            severity: code.default_severity(),
            message: message.into(),
            location,
            expected: None,
            actual: None,
            suggestion: None,
            examples: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    #[must_use]
    pub fn with_actual(mut self, actual: impl Into<String>) -> Self {
        self.actual = Some(actual.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_example(mut self, description: impl Into<String>, snippet: impl Into<String>) -> Self {
        self.examples.push(Example {
            description: description.into(),
            snippet: snippet.into(),
        });
        self
    }

    /// The `type` slug of this diagnostic's code.
    pub const fn type_slug(&self) -> &'static str {
        self.code.slug()
    }

    /// Render using the fixed human format pinned by the external contract.
    ///
    /// ```text
    /// <source>:LINE:COL: SEVERITY [CODE]
    ///   <message>
    ///
    ///   Expected: <rendered target type>
    ///   Actual:   <rendered actual type>
    ///
    ///   Suggestion: <text>
    /// ```
    ///
    /// Expected/Actual/Suggestion/Examples lines are omitted when empty.
    pub fn render_human(&self, source: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{}:{}:{}: {} [{}]\n",
            source,
            self.location.line,
            self.location.column,
            self.severity,
            self.code.as_str()
        ));
        out.push_str(&format!("  {}\n", self.message));

        let has_types = self.expected.is_some() || self.actual.is_some();
        if has_types {
            out.push('\n');
            if let Some(expected) = &self.expected {
                out.push_str(&format!("  Expected: {expected}\n"));
            }
            if let Some(actual) = &self.actual {
                out.push_str(&format!("  Actual:   {actual}\n"));
            }
        }

        if let Some(suggestion) = &self.suggestion {
            out.push('\n');
            out.push_str(&format!("  Suggestion: {suggestion}\n"));
        }

        if !self.examples.is_empty() {
            out.push('\n');
            for example in &self.examples {
                out.push_str(&format!("  Example ({}): {}\n", example.description, example.snippet));
            }
        }

        out
    }
}

/// An ordered, append-only list of diagnostics accumulated during a single
/// `check_program` invocation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorList {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorList {
    pub fn new() -> Self {
        ErrorList::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn extend(&mut self, other: impl IntoIterator<Item = Diagnostic>) {
        self.diagnostics.extend(other);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity == Severity::Warning)
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

impl IntoIterator for ErrorList {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.iter()
    }
}

impl FromIterator<Diagnostic> for ErrorList {
    fn from_iter<T: IntoIterator<Item = Diagnostic>>(iter: T) -> Self {
        ErrorList {
            diagnostics: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_human_omits_empty_sections() {
        let diag = Diagnostic::new(DiagnosticCode::Typ300, "undefined function `Foo.bar`", Location::new(3, 5));
        let rendered = diag.render_human("schema.res");
        assert_eq!(rendered, "schema.res:3:5: error [TYP300]\n  undefined function `Foo.bar`\n");
    }

    #[test]
    fn render_human_includes_expected_actual_and_suggestion() {
        let diag = Diagnostic::new(DiagnosticCode::Typ101, "nullability violation", Location::new(10, 3))
            .with_expected("string!")
            .with_actual("text?")
            .with_suggestion("unwrap with `!` or coalesce with `??`");
        let rendered = diag.render_human("post.res");
        assert!(rendered.contains("post.res:10:3: error [TYP101]"));
        assert!(rendered.contains("Expected: string!"));
        assert!(rendered.contains("Actual:   text?"));
        assert!(rendered.contains("Suggestion: unwrap with `!` or coalesce with `??`"));
    }

    #[test]
    fn error_list_tracks_has_errors_and_has_warnings_independently() {
        let mut errors = ErrorList::new();
        assert!(!errors.has_errors());
        assert!(!errors.has_warnings());

        errors.push(Diagnostic::new(DiagnosticCode::Typ103, "unnecessary unwrap", Location::synthetic()));
        assert!(!errors.has_errors());
        assert!(errors.has_warnings());

        errors.push(Diagnostic::new(DiagnosticCode::Typ102, "type mismatch", Location::synthetic()));
        assert!(errors.has_errors());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn diagnostic_code_as_str_is_stable() {
        assert_eq!(DiagnosticCode::Typ101.as_str(), "TYP101");
        assert_eq!(DiagnosticCode::Typ502.as_str(), "TYP502");
    }

    #[test]
    fn json_serialization_includes_the_stable_code_and_type_slug() {
        let diag = Diagnostic::new(DiagnosticCode::Typ101, "nullability violation", Location::new(10, 3))
            .with_expected("string!")
            .with_actual("text?");
        let value = serde_json::to_value(&diag).unwrap();
        assert_eq!(value["code"], "TYP101");
        assert_eq!(value["type"], "nullability_violation");
        assert_eq!(value["severity"], "Error");
        assert_eq!(value["expected"], "string!");
        assert_eq!(value["actual"], "text?");
        assert!(value.get("examples").is_none());
    }
}
