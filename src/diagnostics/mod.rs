//! Diagnostics infrastructure shared by the PGN and JSON front ends.
//!
//! A single generic [`Diagnostics<K>`] collection and [`DiagnosticsPrinter`]
//! serve both languages; only the `K: DiagnosticKind` taxonomy differs.

mod message;
mod printer;

pub use message::{DiagnosticKind, ErrorInfo, Severity};
pub use printer::DiagnosticsPrinter;

use rowan::TextRange;

use crate::common::Param;

/// Collection of [`ErrorInfo`] values, always in document order.
#[derive(Debug, Clone)]
pub struct Diagnostics<K> {
    errors: Vec<ErrorInfo<K>>,
}

impl<K: DiagnosticKind> Default for Diagnostics<K> {
    fn default() -> Self {
        Self { errors: Vec::new() }
    }
}

impl<K: DiagnosticKind> Diagnostics<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, kind: K, range: TextRange, params: Vec<Param>) {
        self.errors.push(ErrorInfo::new(kind, range, params));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|e| e.severity() == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.errors.iter().any(|e| e.severity() == Severity::Warning)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorInfo<K>> {
        self.errors.iter()
    }

    pub fn as_slice(&self) -> &[ErrorInfo<K>] {
        &self.errors
    }

    pub fn into_vec(self) -> Vec<ErrorInfo<K>> {
        self.errors
    }

    pub fn printer<'a>(&'a self, source: &'a str) -> DiagnosticsPrinter<'a, K> {
        DiagnosticsPrinter::new(&self.errors, source)
    }
}

impl<K> IntoIterator for Diagnostics<K> {
    type Item = ErrorInfo<K>;
    type IntoIter = std::vec::IntoIter<ErrorInfo<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a, K> IntoIterator for &'a Diagnostics<K> {
    type Item = &'a ErrorInfo<K>;
    type IntoIter = std::slice::Iter<'a, ErrorInfo<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
