//! Checker configuration, threaded read-only through a single `check_program` call.

/// Tunables for a single `check_program` invocation. By default, `TYP103`
/// warnings are emitted and never escalate to errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Whether `TYP103` ("unnecessary unwrap/safe-nav/coalesce") warnings are emitted at all.
    pub warn_unnecessary_unwraps: bool,
    /// Whether warnings are reported with `Severity::Error` instead of `Severity::Warning`.
    pub warnings_as_errors: bool,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        CheckerOptions {
            warn_unnecessary_unwraps: true,
            warnings_as_errors: false,
        }
    }
}
