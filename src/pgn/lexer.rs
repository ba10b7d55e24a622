//! Tokenizer.
//!
//! Two passes, mirroring the reference parser's raw-lex-then-postprocess
//! shape: `logos` recognises context-free tokens (including two "raw" kinds,
//! `TagValueRaw` and `Percent`, whose final shape depends on context outside
//! a single regex), then [`lex`] walks the raw stream once to merge
//! `Digits`/`Hyphen`/`Slash` runs into `MoveNumber`/`GameTerminator`, fuse a
//! column-zero `Percent` with the rest of its line into `EscapeSequence`,
//! and coalesce consecutive lexer failures into a single `IllegalCharacter`.

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

/// Scans a `"` tag value, tolerating an unterminated value (closed by a raw
/// newline or EOF rather than a matching `"`). `\"` and `\\` are the only
/// recognised escapes inside the value; anything else just gets consumed as
/// ordinary content (the parser, not the lexer, reports malformed escapes
/// as `UnrecognisedEscapeInTagValue`).
pub fn scan_tag_value(lex: &mut Lexer<SyntaxKind>) {
    let rest = lex.remainder();
    let mut iter = rest.char_indices().peekable();
    let mut consumed = 0usize;
    while let Some((i, c)) = iter.next() {
        match c {
            '"' => {
                consumed = i + 1;
                lex.bump(consumed);
                return;
            }
            '\n' | '\r' => {
                consumed = i;
                lex.bump(consumed);
                return;
            }
            '\\' => {
                if let Some(&(j, _)) = iter.peek() {
                    iter.next();
                    consumed = j + 1;
                } else {
                    consumed = rest.len();
                }
            }
            _ => consumed = i + c.len_utf8(),
        }
    }
    lex.bump(consumed.max(0).min(rest.len()));
}

/// Scans a `{` multi-line comment to its matching `}` (inclusive) or to EOF.
/// Whether the result is terminated is derived later from the token's text.
pub fn scan_multiline_comment(lex: &mut Lexer<SyntaxKind>) {
    let rest = lex.remainder();
    match rest.find('}') {
        Some(i) => lex.bump(i + 1),
        None => lex.bump(rest.len()),
    }
}

/// Runs the raw `logos` pass, coalescing consecutive unmatched characters
/// into a single `IllegalCharacter` token (mirrors the reference lexer's
/// `Garbage` coalescing).
fn raw_lex(source: &str) -> Vec<Token> {
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

/// Runs the full tokenizer: raw lex, then the merge pass that resolves
/// `Digits`/`Hyphen`/`Slash` and `Percent` into their final token kinds.
pub fn lex(source: &str) -> Vec<Token> {
    let raw = raw_lex(source);
    merge(source, raw)
}

fn merge(source: &str, raw: Vec<Token>) -> Vec<Token> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    // Column-zero tracking: a Percent is at start-of-line if it is the very
    // first token, or immediately preceded (in the raw stream) by a Newline.
    let mut at_line_start = true;

    while i < raw.len() {
        let tok = raw[i];
        match tok.kind {
            Percent if at_line_start => {
                let line_end = line_end_offset(source, tok.span.end().into());
                out.push(Token::new(
                    EscapeSequence,
                    tok.span.start().into(),
                    line_end as u32,
                ));
                i += 1;
                // Skip any raw tokens fully covered by the consumed line.
                while i < raw.len() && u32::from(raw[i].span.end()) <= line_end as u32 {
                    i += 1;
                }
            }
            Percent => {
                out.push(Token::new(IllegalCharacter, tok.span.start().into(), tok.span.end().into()));
                i += 1;
            }
            Digits => {
                if let Some((merged, consumed)) = try_merge_terminator(&raw[i..]) {
                    out.push(merged);
                    i += consumed;
                } else {
                    out.push(Token::new(MoveNumber, tok.span.start().into(), tok.span.end().into()));
                    i += 1;
                }
            }
            Hyphen | Slash => {
                out.push(Token::new(IllegalCharacter, tok.span.start().into(), tok.span.end().into()));
                i += 1;
            }
            other => {
                at_line_start = other == Newline;
                out.push(tok);
                i += 1;
                continue;
            }
        }
        at_line_start = false;
    }
    out
}

/// Attempts to read a `GameTerminator` spelling (`1-0`, `0-1`, `1/2-1/2`)
/// starting at a `Digits` token. Returns the merged token and how many raw
/// tokens it consumed, or `None` if the shape doesn't match (in which case
/// the caller falls back to a lone `MoveNumber`).
fn try_merge_terminator(raw: &[Token]) -> Option<(Token, usize)> {
    let first = raw.first()?;
    let start: u32 = first.span.start().into();

    // 1-0 / 0-1
    if raw.len() >= 3 && raw[1].kind == Hyphen && raw[2].kind == Digits {
        let end: u32 = raw[2].span.end().into();
        return Some((Token::new(GameTerminator, start, end), 3));
    }
    // 1/2-1/2
    if raw.len() >= 5
        && raw[1].kind == Slash
        && raw[2].kind == Digits
        && raw[3].kind == Hyphen
        && raw[4].kind == Digits
    {
        if raw.len() >= 7 && raw[5].kind == Slash && raw[6].kind == Digits {
            let end: u32 = raw[6].span.end().into();
            return Some((Token::new(GameTerminator, start, end), 7));
        }
        let end: u32 = raw[4].span.end().into();
        return Some((Token::new(GameTerminator, start, end), 5));
    }
    None
}

fn line_end_offset(source: &str, from: usize) -> usize {
    source[from..]
        .find(['\n', '\r'])
        .map(|i| from + i)
        .unwrap_or(source.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<SyntaxKind> {
        lex(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_brackets_and_asterisk() {
        assert_eq!(kinds("[]()*"), vec![BracketOpen, BracketClose, ParenOpen, ParenClose, Asterisk]);
    }

    #[test]
    fn move_number_vs_game_terminator() {
        assert_eq!(kinds("1"), vec![MoveNumber]);
        assert_eq!(kinds("1-0"), vec![GameTerminator]);
        assert_eq!(kinds("0-1"), vec![GameTerminator]);
        assert_eq!(kinds("1/2-1/2"), vec![GameTerminator]);
    }

    #[test]
    fn periods_collapse_into_one_token() {
        let toks = lex("1...");
        assert_eq!(toks[1].kind, Periods);
        assert_eq!(token_text("1...", &toks[1]), "...");
    }

    #[test]
    fn tag_value_well_formed() {
        let toks = lex("\"Kasparov\"");
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TagValueRaw);
        assert_eq!(token_text("\"Kasparov\"", &toks[0]), "\"Kasparov\"");
    }

    #[test]
    fn tag_value_unterminated_stops_at_newline() {
        let src = "\"Kasparov\nRest";
        let toks = lex(src);
        assert_eq!(toks[0].kind, TagValueRaw);
        assert_eq!(token_text(src, &toks[0]), "\"Kasparov");
    }

    #[test]
    fn multiline_comment_terminated() {
        let src = "{hello}";
        let toks = lex(src);
        assert_eq!(toks[0].kind, MultiLineComment);
        assert_eq!(token_text(src, &toks[0]), "{hello}");
    }

    #[test]
    fn multiline_comment_unterminated_runs_to_eof() {
        let src = "{hello";
        let toks = lex(src);
        assert_eq!(toks[0].kind, MultiLineComment);
        assert_eq!(token_text(src, &toks[0]), "{hello");
    }

    #[test]
    fn percent_escape_at_line_start() {
        let src = "%this is escaped\ne4";
        let toks = lex(src);
        assert_eq!(toks[0].kind, EscapeSequence);
        assert_eq!(token_text(src, &toks[0]), "%this is escaped");
    }

    #[test]
    fn percent_not_at_line_start_is_illegal() {
        let src = "e4%foo";
        let toks = lex(src);
        assert_eq!(toks[1].kind, IllegalCharacter);
    }

    #[test]
    fn stray_hyphen_is_illegal() {
        assert_eq!(kinds("-"), vec![IllegalCharacter]);
    }

    #[test]
    fn nag_forms() {
        assert_eq!(kinds("$3"), vec![NagNumeric]);
        assert_eq!(kinds("!!"), vec![NagSymbolic]);
        assert_eq!(kinds("?!"), vec![NagSymbolic]);
    }

    #[test]
    fn castling_symbol_keeps_hyphens_fused() {
        let src = "O-O-O";
        let toks = lex(src);
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, Symbol);
        assert_eq!(token_text(src, &toks[0]), "O-O-O");
    }
}
