//! Error-resilient, lossless parsing for PGN chess notation, plus a JSON
//! configuration dialect sharing the same tokenizer/parser design.
//!
//! # Example
//!
//! ```
//! use pgn_syntax::pgn::parse_pgn;
//!
//! let root = parse_pgn("[Event \"Example\"]\n1. e4 e5 *");
//! assert!(!root.has_errors());
//! for game in root.game_list().games() {
//!     for ply in game.ply_list().into_iter().flat_map(|l| l.plies()) {
//!         for mv in ply.moves() {
//!             println!("{}", mv.text());
//!         }
//!     }
//! }
//! ```

pub mod common;
pub mod config;
pub mod diagnostics;
pub mod json;
pub mod pgn;

pub use pgn::{parse_pgn, parse_pgn_with_config};
pub use json::parse_json;

/// Errors from this crate's ambient, non-parsing operations: reading a
/// config file from disk and validating its shape. The core `parse_pgn`/
/// `parse_json` entry points never return this type — they are infallible.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    ConfigIo {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
