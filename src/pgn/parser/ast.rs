//! Typed AST wrappers over the PGN CST.
//!
//! Each struct wraps a [`SyntaxNode`] and exposes typed, read-only
//! accessors. Casting is infallible for a matching kind; callers get `None`
//! back for a mismatch rather than a panic.

use super::super::cst::{SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $kind:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                (node.kind() == SyntaxKind::$kind).then(|| Self(node))
            }

            pub fn as_cst(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(GameList, GameList);
ast_node!(Game, Game);
ast_node!(TagSection, TagSection);
ast_node!(TagPair, TagPair);
ast_node!(PlyList, PlyList);
ast_node!(PlyFloatItem, PlyFloatItem);
ast_node!(Ply, Ply);
ast_node!(Variation, Variation);
ast_node!(Missing, Missing);

fn child_node(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.children().find(|n| n.kind() == kind)
}

fn child_nodes(node: &SyntaxNode, kind: SyntaxKind) -> impl Iterator<Item = SyntaxNode> + '_ {
    node.children().filter(move |n| n.kind() == kind)
}

fn child_token(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxToken> {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

fn child_tokens(node: &SyntaxNode, kind: SyntaxKind) -> impl Iterator<Item = SyntaxToken> + '_ {
    node.children_with_tokens()
        .filter_map(|e| e.into_token())
        .filter(move |t| t.kind() == kind)
}

impl GameList {
    pub fn games(&self) -> impl Iterator<Item = Game> + '_ {
        self.as_cst().children().filter_map(Game::cast)
    }
}

impl Game {
    pub fn tag_section(&self) -> Option<TagSection> {
        child_node(self.as_cst(), SyntaxKind::TagSection).and_then(TagSection::cast)
    }

    pub fn ply_list(&self) -> Option<PlyList> {
        child_node(self.as_cst(), SyntaxKind::PlyList).and_then(PlyList::cast)
    }

    pub fn terminator(&self) -> Option<SyntaxToken> {
        child_token(self.as_cst(), SyntaxKind::GameTerminator)
            .or_else(|| child_token(self.as_cst(), SyntaxKind::Asterisk))
    }
}

impl TagSection {
    pub fn tag_pairs(&self) -> impl Iterator<Item = TagPair> + '_ {
        self.as_cst().children().filter_map(TagPair::cast)
    }
}

impl TagPair {
    pub fn name(&self) -> Option<SyntaxToken> {
        child_token(self.as_cst(), SyntaxKind::TagName)
    }

    pub fn value(&self) -> Option<SyntaxToken> {
        child_token(self.as_cst(), SyntaxKind::TagValue)
            .or_else(|| child_token(self.as_cst(), SyntaxKind::ErrorTagValue))
    }

    /// The tag value's content with surrounding quotes stripped, or `None`
    /// if no value token is present at all.
    pub fn value_text(&self) -> Option<String> {
        let token = self.value()?;
        let text = token.text();
        let inner = text.strip_prefix('"').unwrap_or(text);
        let inner = inner.strip_suffix('"').unwrap_or(inner);
        Some(inner.to_string())
    }
}

impl PlyList {
    pub fn plies(&self) -> impl Iterator<Item = Ply> + '_ {
        self.as_cst().children().filter_map(Ply::cast)
    }

    pub fn float_items(&self) -> impl Iterator<Item = PlyFloatItem> + '_ {
        self.as_cst().children().filter_map(PlyFloatItem::cast)
    }
}

impl PlyFloatItem {
    pub fn move_number(&self) -> Option<SyntaxToken> {
        child_token(self.as_cst(), SyntaxKind::MoveNumber)
    }

    pub fn periods(&self) -> Option<SyntaxToken> {
        child_token(self.as_cst(), SyntaxKind::Periods)
    }
}

impl Ply {
    pub fn moves(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        child_tokens(self.as_cst(), SyntaxKind::Move)
    }

    pub fn nags(&self) -> impl Iterator<Item = SyntaxToken> + '_ {
        child_tokens(self.as_cst(), SyntaxKind::Nag)
    }

    pub fn variations(&self) -> impl Iterator<Item = Variation> + '_ {
        child_nodes(self.as_cst(), SyntaxKind::Variation).filter_map(Variation::cast)
    }
}

impl Variation {
    pub fn plies(&self) -> impl Iterator<Item = Ply> + '_ {
        self.as_cst().children().filter_map(Ply::cast)
    }

    pub fn float_items(&self) -> impl Iterator<Item = PlyFloatItem> + '_ {
        self.as_cst().children().filter_map(PlyFloatItem::cast)
    }
}
