//! Parser state machine (mirrors `pgn::parser::core`).

use rowan::{GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::super::cst::{SyntaxKind, TokenSet};
use super::super::error::JsonErrorKind;
use super::super::lexer::{Token, token_text};
use crate::common::Param;
use crate::diagnostics::Diagnostics;

pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics<JsonErrorKind>,
    last_diagnostic_pos: Option<TextSize>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            last_diagnostic_pos: None,
        }
    }

    pub fn finish(mut self) -> (GreenNode, Diagnostics<JsonErrorKind>) {
        self.drain_trivia();
        (self.builder.finish(), self.diagnostics)
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.tokens
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.tokens
            .get(self.pos)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |t| t.span)
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.source.len() as u32)
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn peek(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.current()
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            let token = self.tokens[self.pos];
            if token.kind == SyntaxKind::BlockComment {
                let text = token_text(self.source, &token);
                if !text.ends_with("*/") {
                    self.error_at(JsonErrorKind::UnterminatedBlockComment, token.span, Vec::new());
                }
            }
            self.trivia_buffer.push(token);
            self.pos += 1;
        }
    }

    pub(super) fn drain_trivia(&mut self) {
        for token in self.trivia_buffer.drain(..) {
            let text = token_text(self.source, &token);
            self.builder.token(token.kind.into(), text);
        }
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.drain_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn bump_as(&mut self, kind: SyntaxKind) {
        assert!(!self.eof(), "bump_as called at EOF");
        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn current_text(&self) -> &'src str {
        token_text(self.source, &self.tokens[self.pos])
    }

    pub(super) fn error(&mut self, kind: JsonErrorKind) {
        self.error_params(kind, Vec::new());
    }

    pub(super) fn error_params(&mut self, kind: JsonErrorKind, params: Vec<Param>) {
        let range = self.current_span();
        self.error_at(kind, range, params);
    }

    pub(super) fn error_at(&mut self, kind: JsonErrorKind, range: TextRange, params: Vec<Param>) {
        let pos = range.start();
        if self.last_diagnostic_pos == Some(pos) {
            return;
        }
        self.last_diagnostic_pos = Some(pos);
        self.diagnostics.report(kind, range, params);
    }

    /// Wraps the current token in a synthetic `Error` node and consumes it.
    pub(super) fn error_and_bump(&mut self, kind: JsonErrorKind, params: Vec<Param>) {
        self.error_params(kind, params);
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Emits `kind` without consuming anything — used when a value is
    /// simply absent.
    pub(super) fn missing_value(&mut self, kind: JsonErrorKind) {
        self.error_params(kind, Vec::new());
        self.start_node(SyntaxKind::Missing);
        self.finish_node();
    }
}
