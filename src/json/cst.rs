//! Syntax kinds for the JSON configuration dialect.

#![allow(dead_code)]

use logos::Logos;
use rowan::Language;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("{")]
    BraceOpen = 0,
    #[token("}")]
    BraceClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,

    /// Optional `-`, then digits. No fractions or exponents — this JSON
    /// variant is a configuration format, not general JSON.
    #[regex(r"-?[0-9]+")]
    IntegerValue,

    /// Raw quoted scan via [`super::lexer::scan_string`], which tolerates an
    /// unterminated string. Resolved by the parser into `StringValue` or
    /// `UnterminatedString`.
    #[token("\"", super::lexer::scan_string)]
    #[doc(hidden)]
    StringValueRaw,

    StringValue,
    UnterminatedString,

    #[regex(r"//[^\n\r]*")]
    LineComment,

    /// `/* ... */`, scanned via [`super::lexer::scan_block_comment`] to the
    /// matching `*/` or to EOF; unterminated-ness is derived from the
    /// token's trailing text, same convention as PGN's `MultiLineComment`.
    #[token("/*", super::lexer::scan_block_comment)]
    BlockComment,

    /// Letter-led run not matching `true`/`false`/`null` exactly.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    #[doc(hidden)]
    BarewordRaw,

    #[regex(r"[ \t\r\n\x0c\x0b]+")]
    Whitespace,

    IllegalCharacter,

    // --- Node kinds ---
    /// Root wrapper: the single top-level value plus any trailing
    /// `MultipleValues`-flagged tokens (every green tree needs exactly one
    /// root; this plays the role `GameList` plays for PGN).
    Document,
    Map,
    List,
    Property,
    Integer,
    String,
    Boolean,
    Null,
    /// A value position where nothing was found.
    Missing,
    Error,

    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, Whitespace | LineComment | BlockComment | IllegalCharacter)
    }

    #[inline]
    pub fn is_lexer_internal(self) -> bool {
        matches!(self, StringValueRaw | BarewordRaw)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JsonLang {}

impl Language for JsonLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<JsonLang>;
pub type SyntaxToken = rowan::SyntaxToken<JsonLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

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
}

pub mod token_sets {
    use super::*;

    pub const VALUE_START: TokenSet = TokenSet::new(&[
        BraceOpen,
        BracketOpen,
        True,
        False,
        Null,
        IntegerValue,
        StringValueRaw,
        BarewordRaw,
    ]);
}
