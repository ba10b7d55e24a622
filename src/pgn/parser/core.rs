//! Parser state machine and low-level operations.
//!
//! Trivia (whitespace, comments, illegal characters, escape lines) is
//! buffered and flushed as leading children whenever a node starts. This
//! gives predictable trivia attachment without backtracking, and together
//! with [`Parser::bump`] writing every consumed token's exact source slice
//! into the green tree, guarantees the lossless round-trip invariant.

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder, TextRange, TextSize};

use super::super::cst::{SyntaxKind, TokenSet};
use super::super::error::PgnErrorKind;
use super::super::lexer::{Token, token_text};
use crate::common::Param;
use crate::diagnostics::Diagnostics;

/// Default recursion depth past which variations stop nesting further: a
/// pathological `((((((...` no longer grows the tree, it just stops being
/// recognised as a variation and falls to ordinary recovery. Overridable via
/// [`Parser::with_config`]/[`crate::pgn::parse_pgn_with_config`].
pub const DEFAULT_MAX_VARIATION_DEPTH: u32 = 128;

pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) trivia_buffer: Vec<Token>,
    pub(super) builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics<PgnErrorKind>,
    pub(super) depth: u32,
    pub(super) max_variation_depth: u32,
    pub(super) warn_unrecognised_moves: bool,
    last_diagnostic_pos: Option<TextSize>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self::with_config(source, tokens, DEFAULT_MAX_VARIATION_DEPTH, true)
    }

    pub fn with_config(
        source: &'src str,
        tokens: Vec<Token>,
        max_variation_depth: u32,
        warn_unrecognised_moves: bool,
    ) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            trivia_buffer: Vec::with_capacity(4),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            max_variation_depth,
            warn_unrecognised_moves,
            last_diagnostic_pos: None,
        }
    }

    pub fn finish(mut self) -> (GreenNode, Diagnostics<PgnErrorKind>) {
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

    /// Advances past buffered trivia so `current()` reflects the next
    /// meaningful token, without yet attaching the trivia to a node.
    pub(super) fn peek(&mut self) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        self.current()
    }

    pub(super) fn peek_nth(&mut self, n: usize) -> SyntaxKind {
        self.skip_trivia_to_buffer();
        let mut count = 0;
        let mut pos = self.pos;
        while pos < self.tokens.len() {
            let kind = self.tokens[pos].kind;
            if !kind.is_trivia() {
                if count == n {
                    return kind;
                }
                count += 1;
            }
            pos += 1;
        }
        SyntaxKind::Error
    }

    pub(super) fn skip_trivia_to_buffer(&mut self) {
        while self.pos < self.tokens.len() && self.tokens[self.pos].kind.is_trivia() {
            let token = self.tokens[self.pos];
            let text = token_text(self.source, &token);
            match token.kind {
                SyntaxKind::MultiLineComment if !text.ends_with('}') => {
                    let range = TextRange::at(token.span.start(), TextSize::from(1));
                    self.error_at(PgnErrorKind::UnterminatedMultiLineComment, range, Vec::new());
                }
                SyntaxKind::IllegalCharacter => {
                    let c = text.chars().next().unwrap_or('\u{fffd}');
                    self.error_at(PgnErrorKind::IllegalCharacter, token.span, vec![Param::Char(c)]);
                }
                _ => {}
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

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.skip_trivia_to_buffer();
        self.drain_trivia();
        self.builder.checkpoint()
    }

    pub(super) fn bump(&mut self) {
        assert!(!self.eof(), "bump called at EOF");
        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(token.kind.into(), text);
        self.pos += 1;
    }

    /// Bumps the current token but writes it into the tree under `kind`
    /// rather than its lexer-assigned kind — used to resolve `Symbol` into
    /// `TagName`/`Move`, `TagValueRaw` into `TagValue`/`ErrorTagValue`, and
    /// `NagNumeric`/`NagSymbolic` into `Nag`.
    pub(super) fn bump_as(&mut self, kind: SyntaxKind) {
        assert!(!self.eof(), "bump_as called at EOF");
        let token = self.tokens[self.pos];
        let text = token_text(self.source, &token);
        self.builder.token(kind.into(), text);
        self.pos += 1;
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub(super) fn text_at(&self, pos: usize) -> &'src str {
        token_text(self.source, &self.tokens[pos])
    }

    pub(super) fn current_text(&self) -> &'src str {
        self.text_at(self.pos)
    }

    /// Emits a diagnostic with no parameters, deduplicating repeated reports
    /// at the same position.
    pub(super) fn error(&mut self, kind: PgnErrorKind) {
        self.error_params(kind, Vec::new());
    }

    pub(super) fn error_params(&mut self, kind: PgnErrorKind, params: Vec<Param>) {
        let range = self.current_span();
        self.error_at(kind, range, params);
    }

    pub(super) fn error_at(&mut self, kind: PgnErrorKind, range: TextRange, params: Vec<Param>) {
        let pos = range.start();
        if self.last_diagnostic_pos == Some(pos) {
            return;
        }
        self.last_diagnostic_pos = Some(pos);
        self.diagnostics.report(kind, range, params);
    }

    /// Reports `kind`, then wraps the current token in a synthetic `Error`
    /// node and consumes it.
    pub(super) fn error_and_bump(&mut self, kind: PgnErrorKind, params: Vec<Param>) {
        self.error_params(kind, params);
        if !self.eof() {
            self.start_node(SyntaxKind::Error);
            self.bump();
            self.finish_node();
        }
    }

    /// Reports `kind`, then inserts a zero-length `Missing` node — used when
    /// a structural token was expected but never found. Doesn't consume;
    /// the caller re-examines the same real token afterward.
    pub(super) fn missing(&mut self, kind: PgnErrorKind) {
        self.error_params(kind, Vec::new());
        self.start_node(SyntaxKind::Missing);
        self.finish_node();
    }

    pub(super) fn enter_variation(&mut self) -> bool {
        if self.depth >= self.max_variation_depth {
            return false;
        }
        self.depth += 1;
        true
    }

    pub(super) fn exit_variation(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
