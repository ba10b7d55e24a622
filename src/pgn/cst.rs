//! Syntax kinds for PGN.
//!
//! `SyntaxKind` serves dual roles: token kinds (assigned by the lexer) and
//! node kinds (assigned by the parser when it opens a composite node).
//! `logos` derives the lexer's coarse, context-free recognition; composite
//! node kinds carry no `#[token]`/`#[regex]` attribute. `PgnLang` implements
//! rowan's `Language` trait so the green tree can be wrapped by rowan's
//! cursor (red) layer.

#![allow(dead_code)]

use logos::Logos;
use rowan::Language;

/// All token and node kinds. Tokens first (logos-recognised or produced by
/// the tokenizer's merge pass), then node kinds, then the `__LAST`
/// sentinel used for bounds-checked `transmute` in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("[")]
    BracketOpen = 0,

    #[token("]")]
    BracketClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    /// `*`, lexed as a fixed single-character token distinct from the
    /// digit-shaped `GameTerminator` spellings.
    #[token("*")]
    Asterisk,

    /// Raw digit run. Resolved by the tokenizer's merge pass into
    /// either `MoveNumber` or (merged with `Hyphen`/`Slash`) `GameTerminator`
    /// — never reaches the parser as `Digits`.
    #[regex(r"[0-9]+")]
    #[doc(hidden)]
    Digits,

    /// Merge-only; never reaches the parser. Left over becomes `IllegalCharacter`.
    #[token("-")]
    #[doc(hidden)]
    Hyphen,

    /// Merge-only; never reaches the parser. Left over becomes `IllegalCharacter`.
    #[token("/")]
    #[doc(hidden)]
    Slash,

    /// One or more consecutive dots, collapsed into one token; the parser
    /// reads `token.text().len()` to recover the dot count.
    #[regex(r"\.+")]
    Periods,

    /// `$` followed by zero or more digits. Resolved into `Nag` by the
    /// parser, which also reports `EmptyNag`/`OverflowNag`.
    #[regex(r"\$[0-9]*")]
    #[doc(hidden)]
    NagNumeric,

    /// Symbolic NAGs. `!`/`?` are not in the symbol-continue class,
    /// so they never fuse onto a preceding `Move` token.
    #[token("!!")]
    #[token("??")]
    #[token("!?")]
    #[token("?!")]
    #[token("!")]
    #[token("?")]
    #[doc(hidden)]
    NagSymbolic,

    /// A final `Nag` token, built by the parser from `NagNumeric`/`NagSymbolic`.
    Nag,

    /// Quoted tag value, scanned via [`super::lexer::scan_tag_value`], which
    /// tolerates an unterminated value. Resolved by the parser into
    /// `TagValue` or `ErrorTagValue`.
    #[token("\"", super::lexer::scan_tag_value)]
    #[doc(hidden)]
    TagValueRaw,

    /// A well-formed, properly quoted and terminated tag value.
    TagValue,

    /// An unterminated tag value (closed early by EOF or a raw newline).
    ErrorTagValue,

    /// `{ ... }`, scanned via [`super::lexer::scan_multiline_comment`] to the
    /// matching `}` or to EOF. Unterminated-ness is derived by the parser
    /// from whether the token's text ends with `}`.
    #[token("{", super::lexer::scan_multiline_comment)]
    MultiLineComment,

    /// `;` to end of line.
    #[regex(r";[^\n\r]*")]
    LineComment,

    /// `%` at column zero of a line: the rest of the line becomes trivia.
    /// Resolved by the tokenizer's merge pass; a `%` not at start-of-line
    /// becomes a lone `IllegalCharacter`.
    #[token("%")]
    #[doc(hidden)]
    Percent,

    /// The escape line produced by merging a column-zero `%` with the rest
    /// of its line.
    EscapeSequence,

    /// Letter/`_`-led run, consuming while `symbol-continue`. The
    /// parser reclassifies this into `TagName`, `Move`, or — outside both a
    /// tag section and a move section — leaves it as a bare `Symbol` wrapped
    /// in an `Error` node.
    #[regex(r"[A-Za-z_][A-Za-z0-9_+#=:\-]*")]
    Symbol,

    /// A move number, resolved from a lone `Digits` run by the tokenizer.
    MoveNumber,

    /// A tag name, resolved from `Symbol` by the parser (tag-section context).
    TagName,

    /// SAN move text, resolved from `Symbol` by the parser (move-section
    /// context). Recognition quality (the `UnrecognisedMove` warning) is
    /// tracked via the error list, not via a separate kind.
    Move,

    /// `1-0`, `0-1`, or `1/2-1/2`, resolved by the tokenizer's merge pass
    /// from a `Digits`/`Hyphen`/`Slash` run shaped like one of those three
    /// spellings.
    GameTerminator,

    #[regex(r"[ \t\x0b\x0c]+")]
    Whitespace,

    #[token("\n")]
    #[token("\r\n")]
    #[token("\r")]
    Newline,

    /// Coalesced run of characters matching no PGN token.
    IllegalCharacter,

    // --- Node kinds (non-terminals) ---
    TagPair,
    TagSection,
    PlyFloatItem,
    Ply,
    Variation,
    PlyList,
    Game,
    GameList,
    /// Wraps a token the grammar could not place anywhere.
    Error,
    /// A zero-length placeholder for a structural token the grammar expected
    /// but never found (e.g. a missing closing `]`).
    Missing,

    /// Must be last — used for bounds checking in `kind_from_raw`.
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            Whitespace | Newline | LineComment | MultiLineComment | EscapeSequence | IllegalCharacter
        )
    }

    /// Whether this is a lexer-internal helper kind that must never survive
    /// into the final green tree (always resolved by the merge pass or the
    /// parser before a node is built).
    #[inline]
    pub fn is_lexer_internal(self) -> bool {
        matches!(
            self,
            Digits | Hyphen | Slash | NagNumeric | NagSymbolic | TagValueRaw | Percent
        )
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PgnLang {}

impl Language for PgnLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: bounds-checked above; SyntaxKind is repr(u16).
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<PgnLang>;
pub type SyntaxToken = rowan::SyntaxToken<PgnLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    pub const EMPTY: TokenSet = TokenSet(0);

    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }

    #[inline]
    pub const fn union(self, other: TokenSet) -> TokenSet {
        TokenSet(self.0 | other.0)
    }
}

pub mod token_sets {
    use super::*;

    pub const TAG_SECTION_START: TokenSet = TokenSet::new(&[BracketOpen]);

    pub const MOVE_SECTION_START: TokenSet =
        TokenSet::new(&[MoveNumber, Periods, Move, Symbol, GameTerminator, Asterisk]);

    pub const GAME_TERMINATOR: TokenSet = TokenSet::new(&[GameTerminator, Asterisk]);

    pub const PLY_START: TokenSet = TokenSet::new(&[Move, Symbol]);

    pub const NAG_START: TokenSet = TokenSet::new(&[Nag]);
}
