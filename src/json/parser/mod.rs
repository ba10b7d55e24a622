//! Parser infrastructure for the JSON configuration dialect.
//!
//! Structurally identical to `pgn::parser`: trivia buffering, a single
//! green builder, diagnostics deduplicated by position. No recursion cap is
//! needed here — `Map`/`List` nesting is bounded only by input size, and
//! this dialect is for configuration, not adversarial input.

mod ast;
mod core;
mod grammar;
#[cfg(test)]
mod grammar_tests;

pub use ast::{Boolean, Integer, List, Map, Missing, Null, Property, Str, Value};
pub use core::Parser;
