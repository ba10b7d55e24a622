//! Offset-based convenience queries over the red tree.
//!
//! Thin wrappers around rowan's own `token_at_offset`/ancestor-walking
//! primitives; no offset bookkeeping is reimplemented here. Mirrors
//! `pgn::cursor`'s shape.

use rowan::TextSize;

use super::cst::SyntaxKind;
use super::parser::{Property, Value};

/// The innermost [`Value`] enclosing `offset`, if any.
pub fn value_at_offset(root: &super::cst::SyntaxNode, offset: TextSize) -> Option<Value> {
    let token = root.token_at_offset(offset).left_biased()?;
    token
        .parent_ancestors()
        .find_map(Value::cast)
}

/// The [`Property`] enclosing `offset`, if any (the key or the value may be
/// what `offset` actually falls in).
pub fn property_containing(root: &super::cst::SyntaxNode, offset: TextSize) -> Option<Property> {
    let token = root.token_at_offset(offset).left_biased()?;
    token
        .parent_ancestors()
        .find(|n| n.kind() == SyntaxKind::Property)
        .and_then(Property::cast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::parse_json;

    #[test]
    fn value_at_offset_finds_innermost_value() {
        let source = r#"{"a": [1, 2]}"#;
        let root = parse_json(source);
        let offset = TextSize::from(8); // inside the `1`
        let value = value_at_offset(root.syntax(), offset).unwrap();
        assert!(matches!(value, Value::Integer(_)));
    }

    #[test]
    fn property_containing_finds_enclosing_property() {
        let source = r#"{"name": "x"}"#;
        let root = parse_json(source);
        let offset = TextSize::from(10); // inside the value
        let property = property_containing(root.syntax(), offset).unwrap();
        assert_eq!(property.key_text().as_deref(), Some("name"));
    }

    #[test]
    fn out_of_range_offset_returns_none() {
        let source = "1";
        let root = parse_json(source);
        let offset = TextSize::from(999);
        assert!(value_at_offset(root.syntax(), offset).is_none());
    }
}
