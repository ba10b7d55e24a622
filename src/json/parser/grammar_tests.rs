use crate::json::{parse_json, JsonErrorKind, Value};

fn error_kinds(source: &str) -> Vec<JsonErrorKind> {
    parse_json(source).errors().iter().map(|e| e.kind).collect()
}

#[test]
fn flat_object_round_trips_losslessly() {
    let source = r#"{"a": 1, "b": true, "c": null}"#;
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.has_errors(), "{:?}", root.errors());

    let Value::Map(map) = root.value().unwrap() else { panic!("expected a map") };
    let Value::Integer(a) = map.get("a").unwrap() else { panic!("expected integer") };
    assert_eq!(a.value(), Some(1));
    let Value::Boolean(b) = map.get("b").unwrap() else { panic!("expected boolean") };
    assert!(b.value());
    assert!(matches!(map.get("c"), Some(Value::Null(_))));
}

#[test]
fn nested_maps_and_lists_are_reachable() {
    let source = r#"{"outer": {"inner": [1, 2, 3]}}"#;
    let root = parse_json(source);
    assert!(!root.has_errors(), "{:?}", root.errors());

    let Value::Map(map) = root.value().unwrap() else { panic!("expected a map") };
    let Value::Map(inner) = map.get("outer").unwrap() else { panic!("expected a map") };
    let Value::List(list) = inner.get("inner").unwrap() else { panic!("expected a list") };
    let items: Vec<i64> = list
        .items()
        .map(|v| match v {
            Value::Integer(i) => i.value().unwrap(),
            other => panic!("unexpected item {other:?}"),
        })
        .collect();
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn duplicate_key_keeps_both_pairs_but_first_wins_lookup() {
    // Both pairs survive in the tree so a caller can inspect the whole
    // document; `Map::get` resolves to whichever was declared first.
    let source = r#"{"a":1,"a":2}"#;
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert_eq!(error_kinds(source), vec![JsonErrorKind::DuplicatePropertyKey]);

    let Value::Map(map) = root.value().unwrap() else { panic!("expected a map") };
    assert_eq!(map.properties().count(), 2);
    let Value::Integer(a) = map.get("a").unwrap() else { panic!("expected integer") };
    assert_eq!(a.value(), Some(1));
}

#[test]
fn trailing_comma_in_object_is_flagged() {
    let source = r#"{"a": 1,}"#;
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(error_kinds(source).contains(&JsonErrorKind::ExpectedPropertyKey));
}

#[test]
fn trailing_comma_in_list_is_flagged() {
    let source = "[1, 2,]";
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(error_kinds(source).contains(&JsonErrorKind::ExpectedValue));
}

#[test]
fn integer_overflow_is_flagged_but_digits_are_kept() {
    let source = "99999999999999999999999999";
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert_eq!(error_kinds(source), vec![JsonErrorKind::InvalidIntegerOverflow]);

    let Value::Integer(n) = root.value().unwrap() else { panic!("expected integer") };
    assert_eq!(n.text(), source);
}

#[test]
fn unterminated_string_is_kept_whole_with_one_error() {
    let source = r#""unterminated"#;
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert_eq!(error_kinds(source), vec![JsonErrorKind::UnterminatedString]);
}

#[test]
fn valid_unicode_escape_is_not_an_error() {
    let source = "\"\\u0041\"";
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.has_errors(), "{:?}", root.errors());
}

#[test]
fn malformed_unicode_escape_is_flagged() {
    let source = r#""\u00ZZ""#;
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(error_kinds(source).contains(&JsonErrorKind::InvalidUnicodeEscape));
}

#[test]
fn unrecognised_escape_is_flagged_but_consumed() {
    let source = r#""\q""#;
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert_eq!(error_kinds(source), vec![JsonErrorKind::UnrecognisedEscape]);

    let Value::Str(s) = root.value().unwrap() else { panic!("expected a string") };
    assert_eq!(s.text(), r#"\q"#);
}

#[test]
fn raw_control_character_in_string_is_flagged() {
    let source = "\"a\u{1}b\"";
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert_eq!(error_kinds(source), vec![JsonErrorKind::ControlCharacterInString]);
}

#[test]
fn raw_tab_in_string_is_tolerated() {
    // TAB is exempt from the must-escape set; a literal one inside a
    // quoted value round-trips without a diagnostic.
    let source = "\"a\tb\"";
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.has_errors(), "{:?}", root.errors());
}

#[test]
fn line_comments_are_trivia_not_errors() {
    let source = "// leading comment\n{\"a\": 1} // trailing\n";
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.has_errors(), "{:?}", root.errors());
}

#[test]
fn well_formed_block_comment_is_trivia_not_an_error() {
    let source = "/* a block comment */ {\"a\": 1}";
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.has_errors(), "{:?}", root.errors());
}

#[test]
fn unterminated_block_comment_is_flagged() {
    let source = "/* never closed {\"a\": 1}";
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(error_kinds(source).contains(&JsonErrorKind::UnterminatedBlockComment));
}

#[test]
fn second_top_level_value_is_flagged_as_multiple_values() {
    let source = "1 2";
    let root = parse_json(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(error_kinds(source).contains(&JsonErrorKind::MultipleValues));
}

#[test]
fn empty_document_is_missing_value_not_a_panic() {
    let source = "";
    let root = parse_json(source);
    assert_eq!(error_kinds(source), vec![JsonErrorKind::UnexpectedEof]);
    assert!(root.value().is_none());
}
