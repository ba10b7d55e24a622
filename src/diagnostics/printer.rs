//! Renders [`ErrorInfo`] lists against source text.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::message::{DiagnosticKind, ErrorInfo, Severity};

/// Builder for rendering a diagnostics list, mirroring the plain/source-backed
/// two-mode rendering used throughout this codebase's reference material.
pub struct DiagnosticsPrinter<'d, K> {
    errors: &'d [ErrorInfo<K>],
    source: Option<&'d str>,
    path: Option<&'d str>,
    colored: bool,
}

impl<'d, K: DiagnosticKind> DiagnosticsPrinter<'d, K> {
    pub fn new(errors: &'d [ErrorInfo<K>], source: &'d str) -> Self {
        Self {
            errors,
            source: Some(source),
            path: None,
            colored: false,
        }
    }

    /// Builds a printer with no source text available, falling back to one
    /// plain `message at offset..offset` line per error instead of an
    /// annotated snippet. Used when only the diagnostics themselves are on
    /// hand — e.g. a diagnostics list read back from a cache with the
    /// original source already discarded.
    pub fn without_source(errors: &'d [ErrorInfo<K>]) -> Self {
        Self {
            errors,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'d str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };
        if self.errors.is_empty() {
            return Ok(());
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, err) in self.errors.iter().enumerate() {
            let message = err.message();
            let range = adjust_range(err.range, source.len());

            let mut snippet = Snippet::source(source).line_start(1).annotation(
                AnnotationKind::Primary.span(range).label(&message),
            );
            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let level = severity_to_level(err.severity());
            let group: Group = level.primary_title(&message).element(snippet);

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&[group]))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", err)?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();
    if start == end {
        return start..(start + 1).min(limit);
    }
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pgn::PgnErrorKind;

    #[test]
    fn without_source_renders_one_plain_line_per_error() {
        let errors = vec![ErrorInfo::new(
            PgnErrorKind::MissingTagBracketClose,
            TextRange::at(TextSize::from(3), TextSize::from(0)),
            Vec::new(),
        )];
        let printer = DiagnosticsPrinter::without_source(&errors);
        let rendered = printer.render();
        assert_eq!(rendered, errors[0].to_string());
    }

    #[test]
    fn without_source_joins_multiple_errors_with_newlines() {
        let errors = vec![
            ErrorInfo::new(PgnErrorKind::MissingTagName, TextRange::at(TextSize::from(1), TextSize::from(0)), Vec::new()),
            ErrorInfo::new(PgnErrorKind::MissingTagValue, TextRange::at(TextSize::from(5), TextSize::from(0)), Vec::new()),
        ];
        let printer = DiagnosticsPrinter::without_source(&errors);
        assert_eq!(printer.render().lines().count(), 2);
    }
}
