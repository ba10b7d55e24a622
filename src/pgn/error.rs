//! PGN diagnostic taxonomy.

use crate::common::Param;
use crate::diagnostics::{DiagnosticKind, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PgnErrorKind {
    IllegalCharacter,
    EmptyNag,
    OverflowNag,
    UnterminatedMultiLineComment,
    UnterminatedTagValue,
    IllegalControlCharacterInTagValue,
    UnrecognisedEscapeInTagValue,
    MissingTagBracketClose,
    MissingTagName,
    MissingTagValue,
    OrphanParenthesisClose,
    MisplacedToken,
    EmptyVariation,
    MissingMoveNumber,
    InvalidMoveIndication,
    UnrecognisedMove,
}

impl DiagnosticKind for PgnErrorKind {
    fn default_message(&self, params: &[Param]) -> String {
        use PgnErrorKind::*;
        match self {
            IllegalCharacter => format!("illegal character {}", param(params, 0)),
            EmptyNag => "NAG has no digits after '$'".to_string(),
            OverflowNag => format!("NAG value {} exceeds the maximum of 255", param(params, 0)),
            UnterminatedMultiLineComment => "multi-line comment is missing a closing '}'".to_string(),
            UnterminatedTagValue => "tag value is missing a closing quote".to_string(),
            IllegalControlCharacterInTagValue => {
                format!("control character {} is not allowed in a tag value", param(params, 0))
            }
            UnrecognisedEscapeInTagValue => {
                format!("unrecognised escape sequence {} in tag value", param(params, 0))
            }
            MissingTagBracketClose => "tag pair is missing a closing ']'".to_string(),
            MissingTagName => "tag pair is missing a name".to_string(),
            MissingTagValue => "tag pair is missing a value".to_string(),
            OrphanParenthesisClose => "')' has no matching '('".to_string(),
            MisplacedToken => format!("unexpected token {}", param(params, 0)),
            EmptyVariation => "variation '( )' has no plies".to_string(),
            MissingMoveNumber => "ply is missing its move number".to_string(),
            InvalidMoveIndication => format!("invalid move indication {}", param(params, 0)),
            UnrecognisedMove => format!("{} does not look like a legal move", param(params, 0)),
        }
    }

    fn severity(&self) -> Severity {
        use PgnErrorKind::*;
        match self {
            UnrecognisedMove | EmptyVariation => Severity::Warning,
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
