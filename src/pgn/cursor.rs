//! Offset-based convenience queries over the red tree.
//!
//! Thin wrappers around rowan's own `token_at_offset`/ancestor-walking
//! primitives; no offset bookkeeping is reimplemented here.

use rowan::TextSize;

use super::cst::SyntaxKind;
use super::parser::{Game, GameList, Ply};

/// The `Game` enclosing `offset`, if any.
pub fn game_at_offset(root: &GameList, offset: TextSize) -> Option<Game> {
    let token = root.as_cst().token_at_offset(offset).left_biased()?;
    token
        .parent_ancestors()
        .find(|n| n.kind() == SyntaxKind::Game)
        .and_then(Game::cast)
}

/// The innermost `Ply` enclosing `offset`, if any (may be nested inside one
/// or more `Variation`s).
pub fn ply_containing(root: &GameList, offset: TextSize) -> Option<Ply> {
    let token = root.as_cst().token_at_offset(offset).left_biased()?;
    token
        .parent_ancestors()
        .find(|n| n.kind() == SyntaxKind::Ply)
        .and_then(Ply::cast)
}
