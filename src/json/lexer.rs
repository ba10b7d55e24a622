//! Tokenizer for the JSON configuration dialect.

use logos::{Lexer, Logos};
use rowan::{TextRange, TextSize};

use super::cst::SyntaxKind::{self, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    fn new(kind: SyntaxKind, start: u32, end: u32) -> Self {
        Token {
            kind,
            span: TextRange::new(TextSize::from(start), TextSize::from(end)),
        }
    }
}

pub fn token_text<'s>(source: &'s str, token: &Token) -> &'s str {
    &source[token.span.start().into()..token.span.end().into()]
}

/// Scans a `"` string, tolerating an unterminated value (closed by a raw
/// newline or EOF). Does not itself validate escapes — that's the parser's
/// job when it relabels `StringValueRaw` (mirrors PGN's tag-value scan).
pub fn scan_string(lex: &mut Lexer<SyntaxKind>) {
    let rest = lex.remainder();
    let mut iter = rest.char_indices().peekable();
    let mut consumed = 0usize;
    while let Some((i, c)) = iter.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return;
            }
            '\n' | '\r' => {
                lex.bump(i);
                return;
            }
            '\\' => {
                if let Some(&(j, nc)) = iter.peek() {
                    iter.next();
                    consumed = j + nc.len_utf8();
                } else {
                    consumed = rest.len();
                }
            }
            _ => consumed = i + c.len_utf8(),
        }
    }
    lex.bump(consumed.min(rest.len()));
}

pub fn scan_block_comment(lex: &mut Lexer<SyntaxKind>) {
    let rest = lex.remainder();
    match rest.find("*/") {
        Some(i) => lex.bump(i + 2),
        None => lex.bump(rest.len()),
    }
}

pub fn lex(source: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut lexer = SyntaxKind::lexer(source);
    let mut garbage_start: Option<u32> = None;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let (start, end) = (span.start as u32, span.end as u32);
        match result {
            Ok(kind) => {
                if let Some(start) = garbage_start.take() {
                    out.push(Token::new(IllegalCharacter, start, span.start as u32));
                }
                out.push(Token::new(kind, start, end));
            }
            Err(()) => {
                if garbage_start.is_none() {
                    garbage_start = Some(start);
                }
            }
        }
    }
    if let Some(start) = garbage_start.take() {
        out.push(Token::new(IllegalCharacter, start, source.len() as u32));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<SyntaxKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_punctuation() {
        assert_eq!(kinds("{}[],:"), vec![BraceOpen, BraceClose, BracketOpen, BracketClose, Comma, Colon]);
    }

    #[test]
    fn lexes_keywords_and_integers() {
        assert_eq!(kinds("true false null -12"), vec![True, Whitespace, False, Whitespace, Null, Whitespace, IntegerValue]);
    }

    #[test]
    fn string_well_formed() {
        let toks = lex("\"hi\"");
        assert_eq!(toks[0].kind, StringValueRaw);
        assert_eq!(token_text("\"hi\"", &toks[0]), "\"hi\"");
    }

    #[test]
    fn string_unterminated() {
        let src = "\"hi";
        let toks = lex(src);
        assert_eq!(toks[0].kind, StringValueRaw);
        assert_eq!(token_text(src, &toks[0]), "\"hi");
    }

    #[test]
    fn block_comment_terminated_and_not() {
        assert_eq!(kinds("/* x */"), vec![BlockComment]);
        assert_eq!(kinds("/* x"), vec![BlockComment]);
    }

    #[test]
    fn bareword_is_not_a_keyword() {
        let toks = lex("nul");
        assert_eq!(toks[0].kind, BarewordRaw);
    }
}
