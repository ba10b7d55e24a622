//! Typed AST wrappers over the JSON value tree.

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

ast_node!(Map, Map);
ast_node!(List, List);
ast_node!(Property, Property);
ast_node!(Integer, Integer);
ast_node!(Str, String);
ast_node!(Boolean, Boolean);
ast_node!(Null, Null);
ast_node!(Missing, Missing);

/// Any JSON value node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Map(Map),
    List(List),
    Integer(Integer),
    Str(Str),
    Boolean(Boolean),
    Null(Null),
    Missing(Missing),
}

impl Value {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        match node.kind() {
            SyntaxKind::Map => Map::cast(node).map(Value::Map),
            SyntaxKind::List => List::cast(node).map(Value::List),
            SyntaxKind::Integer => Integer::cast(node).map(Value::Integer),
            SyntaxKind::String => Str::cast(node).map(Value::Str),
            SyntaxKind::Boolean => Boolean::cast(node).map(Value::Boolean),
            SyntaxKind::Null => Null::cast(node).map(Value::Null),
            SyntaxKind::Missing => Missing::cast(node).map(Value::Missing),
            _ => None,
        }
    }

    pub fn as_cst(&self) -> &SyntaxNode {
        match self {
            Value::Map(n) => n.as_cst(),
            Value::List(n) => n.as_cst(),
            Value::Integer(n) => n.as_cst(),
            Value::Str(n) => n.as_cst(),
            Value::Boolean(n) => n.as_cst(),
            Value::Null(n) => n.as_cst(),
            Value::Missing(n) => n.as_cst(),
        }
    }
}

impl Map {
    pub fn properties(&self) -> impl Iterator<Item = Property> + '_ {
        self.as_cst().children().filter_map(Property::cast)
    }

    /// The value of the first property whose key matches `key` (first-wins
    /// duplicate-key semantics).
    pub fn get(&self, key: &str) -> Option<Value> {
        self.properties().find(|p| p.key_text().as_deref() == Some(key)).and_then(|p| p.value())
    }
}

impl Property {
    pub fn key_token(&self) -> Option<SyntaxToken> {
        self.as_cst()
            .children()
            .find_map(|n| Str::cast(n))
            .and_then(|s| s.as_cst().children_with_tokens().filter_map(|e| e.into_token()).next())
    }

    pub fn key_text(&self) -> Option<std::string::String> {
        let token = self.key_token()?;
        let text = token.text();
        Some(text.trim_matches('"').to_string())
    }

    pub fn value(&self) -> Option<Value> {
        let mut children = self.as_cst().children();
        let first = children.next()?;
        if first.kind() == SyntaxKind::String {
            // The key itself is a String node; the value (if any) follows it.
            children.find_map(Value::cast)
        } else {
            Value::cast(first).or_else(|| children.find_map(Value::cast))
        }
    }
}

impl List {
    pub fn items(&self) -> impl Iterator<Item = Value> + '_ {
        self.as_cst().children().filter_map(Value::cast)
    }
}

impl Integer {
    pub fn text(&self) -> std::string::String {
        self.as_cst()
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::IntegerValue)
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    pub fn value(&self) -> Option<i64> {
        self.text().parse().ok()
    }
}

impl Boolean {
    pub fn value(&self) -> bool {
        self.as_cst()
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .next()
            .is_some_and(|t| t.kind() == SyntaxKind::True)
    }
}

impl Str {
    pub fn text(&self) -> std::string::String {
        let raw = self
            .as_cst()
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| matches!(t.kind(), SyntaxKind::StringValue | SyntaxKind::UnterminatedString))
            .map(|t| t.text().to_string())
            .unwrap_or_default();
        raw.trim_matches('"').to_string()
    }
}
