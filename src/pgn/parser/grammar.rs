//! Grammar productions.
//!
//! ```text
//! GameList    := Game*
//! Game        := TagSection PlyList GameTerminator?
//! TagSection  := TagPair*
//! TagPair     := "[" TagName? (TagValue | ErrorTagValue)? "]"
//! PlyList     := PlyFloatItem* (Ply | Variation)*
//! PlyFloatItem:= MoveNumber? Periods?
//! Ply         := Move Nag* Variation* [ Move Nag* Variation* ]?
//! Variation   := "(" PlyFloatItem* (Ply | Variation)* GameTerminator? ")"
//! ```
//!
//! A `(` encountered directly in a ply list (not following a move) still
//! opens a `Variation` rather than being flagged as a misplaced token —
//! this is what lets something like `"((("` recover as three nested empty
//! variations rather than three unrelated errors.
//!
//! Every production consumes the same real token it was called on or falls
//! through to its caller; none of them ever back up over an already-bumped
//! token.

use rowan::TextSize;

use super::super::cst::SyntaxKind::{self, *};
use super::super::cst::token_sets;
use super::super::error::PgnErrorKind::*;
use super::Parser;
use crate::common::{chars, Param};

impl Parser<'_> {
    pub fn parse_game_list(&mut self) {
        self.start_node(GameList);
        while !self.eof() {
            self.parse_game();
        }
        self.finish_node();
    }

    fn parse_game(&mut self) {
        self.start_node(Game);
        self.parse_tag_section();
        self.parse_ply_list();
        self.peek();
        if self.at_set(token_sets::GAME_TERMINATOR) {
            self.bump();
        }
        self.finish_node();
    }

    fn parse_tag_section(&mut self) {
        self.start_node(TagSection);
        loop {
            self.peek();
            if !self.at(BracketOpen) {
                break;
            }
            self.parse_tag_pair();
        }
        self.finish_node();
    }

    fn parse_tag_pair(&mut self) {
        self.start_node(TagPair);
        self.bump(); // '['

        self.peek();
        if self.at(Symbol) {
            self.bump_as(TagName);
        } else {
            self.missing(MissingTagName);
        }

        self.peek();
        if self.at(TagValueRaw) {
            self.parse_tag_value();
        } else if !self.at(BracketClose) {
            self.missing(MissingTagValue);
        }

        self.peek();
        if self.at(BracketClose) {
            self.bump();
        } else {
            self.missing(MissingTagBracketClose);
        }

        self.finish_node();
    }

    fn parse_tag_value(&mut self) {
        let span = self.current_span();
        let text = self.current_text();
        let well_formed = text.len() >= 2 && text.ends_with('"');

        let inner_end = if well_formed { text.len() - 1 } else { text.len() };
        self.scan_tag_value_body(&text[1..inner_end], span.start() + TextSize::from(1));

        if well_formed {
            self.bump_as(TagValue);
        } else {
            self.error_at(UnterminatedTagValue, rowan::TextRange::at(span.start(), TextSize::from(1)), Vec::new());
            self.bump_as(ErrorTagValue);
        }
    }

    /// Scans the content between the quotes for disallowed control
    /// characters and unrecognised escapes.
    fn scan_tag_value_body(&mut self, body: &str, base: TextSize) {
        let mut chars_iter = body.char_indices().peekable();
        while let Some((i, c)) = chars_iter.next() {
            if c == '\\' {
                match chars_iter.peek().copied() {
                    Some((j, next)) if next == '"' || next == '\\' => {
                        chars_iter.next();
                        let _ = j;
                    }
                    Some((j, next)) => {
                        let start = base + TextSize::from(i as u32);
                        let range = rowan::TextRange::new(start, start + TextSize::from((j - i) as u32 + next.len_utf8() as u32));
                        self.error_at(UnrecognisedEscapeInTagValue, range, vec![Param::Char(next)]);
                    }
                    None => {
                        let start = base + TextSize::from(i as u32);
                        self.error_at(
                            UnrecognisedEscapeInTagValue,
                            rowan::TextRange::at(start, TextSize::from(1)),
                            vec![Param::Char('\\')],
                        );
                    }
                }
            } else if chars::must_escape(c) && c != '"' {
                let start = base + TextSize::from(i as u32);
                self.error_at(
                    IllegalControlCharacterInTagValue,
                    rowan::TextRange::at(start, TextSize::from(c.len_utf8() as u32)),
                    vec![Param::Char(c)],
                );
            }
        }
    }

    fn parse_ply_list(&mut self) {
        self.start_node(PlyList);
        loop {
            self.peek();
            if self.eof() || self.at_set(token_sets::GAME_TERMINATOR) || self.at(BracketOpen) {
                break;
            }

            let float_item = self.try_parse_ply_float_item();
            let ply = self.try_parse_ply();
            if !float_item && !ply {
                if self.at(ParenOpen) {
                    self.parse_variation();
                } else {
                    self.recover_unexpected_in_move_section();
                }
            }
        }
        self.finish_node();
    }

    fn recover_unexpected_in_move_section(&mut self) {
        if self.at(ParenClose) {
            self.error(OrphanParenthesisClose);
            self.bump();
        } else {
            let params = vec![Param::Str(self.current_text().to_string())];
            self.error_and_bump(MisplacedToken, params);
        }
    }

    fn try_parse_ply_float_item(&mut self) -> bool {
        self.peek();
        if !self.at(MoveNumber) && !self.at(Periods) {
            return false;
        }
        self.start_node(PlyFloatItem);
        self.eat(MoveNumber);
        self.peek();
        self.eat(Periods);
        self.finish_node();
        true
    }

    fn try_parse_ply(&mut self) -> bool {
        self.peek();
        if !self.at(Symbol) {
            return false;
        }
        self.start_node(Ply);
        self.parse_move_group();
        self.peek();
        if self.at(Symbol) {
            self.parse_move_group();
        }
        self.finish_node();
        true
    }

    fn parse_move_group(&mut self) {
        let text = self.current_text().to_string();
        let span = self.current_span();
        if !looks_like_move(&text) && self.warn_unrecognised_moves {
            self.error_at(UnrecognisedMove, span, vec![Param::Str(text)]);
        }
        self.bump_as(Move);

        loop {
            self.peek();
            if !self.at(NagNumeric) && !self.at(NagSymbolic) {
                break;
            }
            self.parse_nag();
        }

        loop {
            self.peek();
            if !self.at(ParenOpen) {
                break;
            }
            self.parse_variation();
        }
    }

    fn parse_nag(&mut self) {
        let kind = self.current();
        let text = self.current_text();
        if kind == NagNumeric {
            let digits = &text[1..];
            if digits.is_empty() {
                self.error(EmptyNag);
            } else {
                match digits.parse::<u32>() {
                    Ok(value) if value <= 255 => {}
                    Ok(value) => self.error_params(OverflowNag, vec![Param::Int(value as i64)]),
                    Err(_) => self.error_params(OverflowNag, vec![Param::Str(digits.to_string())]),
                }
            }
        }
        self.bump_as(Nag);
    }

    fn parse_variation(&mut self) {
        if !self.enter_variation() {
            self.error(MisplacedToken);
            self.bump();
            return;
        }

        let start = self.current_span();
        self.start_node(Variation);
        self.bump(); // '('

        let mut ply_count = 0u32;
        loop {
            self.peek();
            if self.eof() || self.at(ParenClose) || self.at_set(token_sets::GAME_TERMINATOR) {
                break;
            }
            let float_item = self.try_parse_ply_float_item();
            let ply = self.try_parse_ply();
            if ply {
                ply_count += 1;
            } else if !float_item {
                if self.at(ParenOpen) {
                    self.parse_variation();
                } else {
                    self.recover_unexpected_in_move_section();
                }
            }
        }

        self.peek();
        if self.at_set(token_sets::GAME_TERMINATOR) {
            self.bump();
        }

        if ply_count == 0 {
            self.error_at(EmptyVariation, start, Vec::new());
        }

        self.peek();
        if self.at(ParenClose) {
            self.bump();
        }

        self.finish_node();
        self.exit_variation();
    }
}

/// A loose structural check for SAN move text, kept deliberately permissive;
/// a mismatch is a warning, not a rejection.
fn looks_like_move(text: &str) -> bool {
    if text == "O-O" || text == "O-O-O" {
        return true;
    }
    if let Some(rest) = text.strip_suffix(['+', '#']) {
        if rest == "O-O" || rest == "O-O-O" {
            return true;
        }
        return looks_like_move_core(rest);
    }
    looks_like_move_core(text)
}

fn looks_like_move_core(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.is_empty() {
        return false;
    }
    let mut i = 0;

    if matches!(bytes[0], b'R' | b'N' | b'B' | b'Q' | b'K') {
        i += 1;
    }
    if i < bytes.len() && (b'a'..=b'h').contains(&bytes[i]) {
        i += 1;
        if i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
    }
    if i < bytes.len() && bytes[i] == b'x' {
        i += 1;
    }
    if i + 1 >= bytes.len() {
        return false;
    }
    if !(b'a'..=b'h').contains(&bytes[i]) {
        return false;
    }
    i += 1;
    if !bytes[i].is_ascii_digit() {
        return false;
    }
    i += 1;

    if i < bytes.len() && bytes[i] == b'=' {
        i += 1;
        if i >= bytes.len() || !matches!(bytes[i], b'R' | b'N' | b'B' | b'Q') {
            return false;
        }
        i += 1;
    }

    i == bytes.len()
}
