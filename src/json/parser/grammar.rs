//! Grammar productions for the JSON configuration dialect.
//!
//! Accepts any prefix of a well-formed document; trailing tokens after a
//! complete value become `MultipleValues` errors rather than failing the
//! parse outright.

use indexmap::IndexSet;
use rowan::TextSize;

use super::super::cst::SyntaxKind::{self, *};
use super::super::cst::token_sets::VALUE_START;
use super::super::error::JsonErrorKind::*;
use super::Parser;
use crate::common::{chars, Param};

impl Parser<'_> {
    pub fn parse_root(&mut self) {
        self.start_node(Document);

        self.peek();
        if self.eof() {
            self.missing_value(UnexpectedEof);
        } else {
            self.parse_value();
        }

        loop {
            self.peek();
            if self.eof() {
                break;
            }
            self.error_and_bump(MultipleValues, Vec::new());
        }

        self.finish_node();
    }

    fn parse_value(&mut self) {
        self.peek();
        match self.current() {
            BraceOpen => self.parse_map(),
            BracketOpen => self.parse_list(),
            IntegerValue => self.parse_integer(),
            StringValueRaw => self.parse_string(),
            True | False => self.parse_boolean(),
            Null => self.parse_null(),
            BarewordRaw => {
                let params = vec![Param::Str(self.current_text().to_string())];
                self.error_and_bump(UnexpectedSymbol, params);
            }
            _ => self.missing_value(ExpectedValue),
        }
    }

    fn parse_integer(&mut self) {
        let text = self.current_text();
        if text.trim_start_matches('-').parse::<i64>().is_err() {
            let params = vec![Param::Str(text.to_string())];
            self.error_params(InvalidIntegerOverflow, params);
        }
        self.start_node(Integer);
        self.bump();
        self.finish_node();
    }

    fn parse_string(&mut self) {
        let span = self.current_span();
        let text = self.current_text();
        let well_formed = text.len() >= 2 && text.ends_with('"');

        let inner_end = if well_formed { text.len() - 1 } else { text.len() };
        self.scan_string_body(&text[1..inner_end], span.start() + TextSize::from(1));

        self.start_node(String);
        if well_formed {
            self.bump_as(SyntaxKind::StringValue);
        } else {
            self.error_at(UnterminatedString, rowan::TextRange::at(span.start(), TextSize::from(1)), Vec::new());
            self.bump_as(UnterminatedString);
        }
        self.finish_node();
    }

    /// Scans the content between the quotes for disallowed raw characters
    /// and malformed escapes (`\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t`,
    /// `\uXXXX` are recognised; anything else is flagged but still consumed).
    fn scan_string_body(&mut self, body: &str, base: TextSize) {
        let mut iter = body.char_indices().peekable();
        while let Some((i, c)) = iter.next() {
            if c == '\\' {
                match iter.peek().copied() {
                    Some((_, next)) if matches!(next, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't') => {
                        iter.next();
                    }
                    Some((j, 'u')) => {
                        iter.next();
                        let hex_start = j + 1;
                        let hex: std::string::String = iter
                            .clone()
                            .take(4)
                            .map(|(_, c)| c)
                            .collect();
                        let valid = hex.len() == 4 && hex.chars().all(|c| c.is_ascii_hexdigit());
                        if valid {
                            for _ in 0..4 {
                                iter.next();
                            }
                        } else {
                            let start = base + TextSize::from(i as u32);
                            let end = base + TextSize::from((hex_start + hex.len()) as u32);
                            self.error_at(
                                InvalidUnicodeEscape,
                                rowan::TextRange::new(start, end),
                                vec![Param::Str(hex)],
                            );
                        }
                    }
                    Some((j, next)) => {
                        iter.next();
                        let start = base + TextSize::from(i as u32);
                        let end = base + TextSize::from(j as u32 + next.len_utf8() as u32);
                        self.error_at(UnrecognisedEscape, rowan::TextRange::new(start, end), vec![Param::Char(next)]);
                    }
                    None => {
                        let start = base + TextSize::from(i as u32);
                        self.error_at(
                            UnrecognisedEscape,
                            rowan::TextRange::at(start, TextSize::from(1)),
                            vec![Param::Char('\\')],
                        );
                    }
                }
            } else if chars::must_escape(c) && c != '"' && c != '\\' {
                let start = base + TextSize::from(i as u32);
                let range = rowan::TextRange::at(start, TextSize::from(c.len_utf8() as u32));
                if matches!(c, '\u{2028}' | '\u{2029}') {
                    self.error_at(IllegalCharacterInString, range, vec![Param::Char(c)]);
                } else {
                    self.error_at(ControlCharacterInString, range, vec![Param::Char(c)]);
                }
            }
        }
    }

    fn parse_boolean(&mut self) {
        self.start_node(Boolean);
        self.bump();
        self.finish_node();
    }

    fn parse_null(&mut self) {
        self.start_node(SyntaxKind::Null);
        self.bump();
        self.finish_node();
    }

    fn parse_map(&mut self) {
        self.start_node(Map);
        self.bump(); // '{'

        let mut seen_keys: IndexSet<std::string::String> = IndexSet::new();
        loop {
            self.peek();
            if self.eof() || self.at(BraceClose) {
                break;
            }
            self.parse_property(&mut seen_keys);
            self.peek();
            if self.at(Comma) {
                self.bump();
                self.peek();
                if self.at(BraceClose) {
                    // trailing comma: not allowed, but tree is still produced
                    self.error(ExpectedPropertyKey);
                }
            } else if !self.at(BraceClose) && !self.eof() {
                break;
            }
        }

        self.peek();
        if self.at(BraceClose) {
            self.bump();
        } else {
            self.error(UnexpectedEof);
        }
        self.finish_node();
    }

    fn parse_property(&mut self, seen_keys: &mut IndexSet<std::string::String>) {
        self.start_node(Property);

        self.peek();
        if self.at(StringValueRaw) {
            let text = self.current_text();
            let key = text.trim_matches('"').to_string();
            if !seen_keys.insert(key.clone()) {
                self.error_params(DuplicatePropertyKey, vec![Param::Str(key)]);
            }
            self.parse_string();
        } else {
            self.error(ExpectedPropertyKey);
        }

        self.peek();
        if self.at(Colon) {
            self.bump();
        } else {
            self.error(ExpectedColon);
        }

        self.peek();
        if self.at_set(VALUE_START) {
            self.parse_value();
        } else {
            self.missing_value(ExpectedValue);
        }

        self.finish_node();
    }

    fn parse_list(&mut self) {
        self.start_node(List);
        self.bump(); // '['

        loop {
            self.peek();
            if self.eof() || self.at(BracketClose) {
                break;
            }
            self.parse_value();
            self.peek();
            if self.at(Comma) {
                self.bump();
                self.peek();
                if self.at(BracketClose) {
                    self.error(ExpectedValue);
                }
            } else if !self.at(BracketClose) && !self.eof() {
                break;
            }
        }

        self.peek();
        if self.at(BracketClose) {
            self.bump();
        } else {
            self.error(UnexpectedEof);
        }
        self.finish_node();
    }
}
