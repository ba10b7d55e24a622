//! PGN parsing.

pub mod cst;
pub mod cursor;
pub mod error;
mod lexer;
pub mod parser;

pub use cst::{SyntaxKind, SyntaxNode, SyntaxToken};
pub use error::PgnErrorKind;
pub use parser::{Game, GameList, Missing, Parser, Ply, PlyFloatItem, TagPair, TagSection, Variation};

use crate::diagnostics::{Diagnostics, ErrorInfo};

/// The result of parsing one PGN document: a full game list plus every
/// deviation recorded along the way.
#[derive(Debug)]
pub struct RootPgnSyntax {
    game_list: cst::SyntaxNode,
    errors: Vec<ErrorInfo<PgnErrorKind>>,
}

impl RootPgnSyntax {
    pub fn game_list(&self) -> GameList {
        GameList::cast(self.game_list.clone()).expect("root is always a GameList")
    }

    pub fn syntax(&self) -> &cst::SyntaxNode {
        &self.game_list
    }

    pub fn errors(&self) -> &[ErrorInfo<PgnErrorKind>] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parses `text` as PGN using the default engine configuration. Pure and
/// total: never panics on malformed input, never performs I/O.
pub fn parse_pgn(text: &str) -> RootPgnSyntax {
    parse_pgn_with_config(text, &crate::config::EngineConfig::default())
}

/// Parses `text` as PGN, honoring `config`'s `max_variation_depth` and
/// `warn_unrecognised_moves`. Still pure and total.
pub fn parse_pgn_with_config(text: &str, config: &crate::config::EngineConfig) -> RootPgnSyntax {
    let span = tracing::span!(tracing::Level::DEBUG, "parse_pgn", len = text.len());
    let _guard = span.enter();

    let tokens = lexer::lex(text);
    let parser = Parser::with_config(text, tokens, config.max_variation_depth, config.warn_unrecognised_moves);
    let (green, diagnostics) = parser_finish(parser);

    let game_list = cst::SyntaxNode::new_root(green);
    tracing::debug!(errors = diagnostics.len(), "parse_pgn finished");

    RootPgnSyntax {
        game_list,
        errors: diagnostics.into_vec(),
    }
}

fn parser_finish(mut parser: Parser<'_>) -> (rowan::GreenNode, Diagnostics<PgnErrorKind>) {
    parser.parse_game_list();
    parser.finish()
}
