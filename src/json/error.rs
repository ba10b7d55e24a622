//! JSON diagnostic taxonomy.

use crate::common::Param;
use crate::diagnostics::{DiagnosticKind, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonErrorKind {
    UnexpectedSymbol,
    UnterminatedString,
    UnterminatedBlockComment,
    IllegalCharacterInString,
    UnrecognisedEscape,
    InvalidUnicodeEscape,
    ControlCharacterInString,
    InvalidIntegerOverflow,
    MultipleValues,
    DuplicatePropertyKey,
    ExpectedPropertyKey,
    ExpectedColon,
    ExpectedValue,
    UnexpectedEof,
}

impl DiagnosticKind for JsonErrorKind {
    fn default_message(&self, params: &[Param]) -> String {
        use JsonErrorKind::*;
        match self {
            UnexpectedSymbol => format!("unexpected symbol {}", param(params, 0)),
            UnterminatedString => "string is missing a closing quote".to_string(),
            UnterminatedBlockComment => "block comment is missing a closing '*/'".to_string(),
            IllegalCharacterInString => format!("illegal character {} in string", param(params, 0)),
            UnrecognisedEscape => format!("unrecognised escape sequence {} in string", param(params, 0)),
            InvalidUnicodeEscape => format!("invalid unicode escape {}", param(params, 0)),
            ControlCharacterInString => {
                format!("control character {} is not allowed in a string", param(params, 0))
            }
            InvalidIntegerOverflow => format!("integer {} does not fit in 64 bits", param(params, 0)),
            MultipleValues => "expected end of file after the first value".to_string(),
            DuplicatePropertyKey => format!("duplicate property key {}", param(params, 0)),
            ExpectedPropertyKey => "expected a property key".to_string(),
            ExpectedColon => "expected ':' after property key".to_string(),
            ExpectedValue => "expected a value".to_string(),
            UnexpectedEof => "unexpected end of file".to_string(),
        }
    }

    fn severity(&self) -> Severity {
        use JsonErrorKind::*;
        match self {
            DuplicatePropertyKey => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

fn param(params: &[Param], index: usize) -> String {
    params
        .get(index)
        .map(|p| p.display())
        .unwrap_or_else(|| "?".to_string())
}
