//! JSON configuration-dialect parsing.

pub mod cst;
pub mod cursor;
pub mod error;
mod lexer;
pub mod parser;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};
pub use cursor::{property_containing, value_at_offset};
pub use error::JsonErrorKind;
pub use parser::{Boolean, Integer, List, Map, Missing, Null, Parser, Property, Str, Value};

use crate::diagnostics::{Diagnostics, ErrorInfo};

#[derive(Debug)]
pub struct RootJsonSyntax {
    value: cst::SyntaxNode,
    errors: Vec<ErrorInfo<JsonErrorKind>>,
}

impl RootJsonSyntax {
    /// The single top-level value, if one was present; `None`
    /// only for an empty or all-trivia document.
    pub fn value(&self) -> Option<Value> {
        self.value
            .children()
            .find_map(Value::cast)
            .filter(|v| !matches!(v, Value::Missing(_)))
    }

    pub fn syntax(&self) -> &cst::SyntaxNode {
        &self.value
    }

    pub fn errors(&self) -> &[ErrorInfo<JsonErrorKind>] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parses `text` as this crate's JSON configuration dialect. Pure and
/// total.
pub fn parse_json(text: &str) -> RootJsonSyntax {
    let span = tracing::span!(tracing::Level::DEBUG, "parse_json", len = text.len());
    let _guard = span.enter();

    let tokens = lexer::lex(text);
    let mut parser = Parser::new(text, tokens);
    parser.parse_root();
    let (green, diagnostics) = parser.finish();

    tracing::debug!(errors = diagnostics.len(), "parse_json finished");

    RootJsonSyntax {
        value: cst::SyntaxNode::new_root(green),
        errors: diagnostics.into_vec(),
    }
}
