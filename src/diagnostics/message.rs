//! Diagnostic message types.

use rowan::TextRange;

use crate::common::Param;

/// Severity level of a diagnostic. Every kind in the fixed taxonomies
/// maps to exactly one of these through [`DiagnosticKind::severity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A closed, per-language taxonomy of diagnostic kinds. Implemented by
/// [`crate::pgn::PgnErrorKind`] and [`crate::json::JsonErrorKind`].
pub trait DiagnosticKind: Copy + Eq + std::fmt::Debug {
    /// Renders the default message for this kind, given its parameters.
    fn default_message(&self, params: &[Param]) -> String;

    /// Most kinds are hard errors; `UnrecognisedMove` and a handful of
    /// structural-recovery kinds are warnings.
    fn severity(&self) -> Severity {
        Severity::Error
    }
}

/// A single recorded deviation: `{ kind, start, length, params }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo<K> {
    pub kind: K,
    pub range: TextRange,
    pub params: Vec<Param>,
}

impl<K: DiagnosticKind> ErrorInfo<K> {
    pub fn new(kind: K, range: TextRange, params: Vec<Param>) -> Self {
        Self { kind, range, params }
    }

    pub fn start(&self) -> u32 {
        self.range.start().into()
    }

    pub fn len(&self) -> u32 {
        self.range.len().into()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn message(&self) -> String {
        self.kind.default_message(&self.params)
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }
}

impl<K: DiagnosticKind> std::fmt::Display for ErrorInfo<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message()
        )
    }
}
