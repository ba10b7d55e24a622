use indoc::indoc;

use crate::config::EngineConfig;
use crate::pgn::{parse_pgn, parse_pgn_with_config, PgnErrorKind, SyntaxKind};

fn error_kinds(source: &str) -> Vec<PgnErrorKind> {
    parse_pgn(source).errors().iter().map(|e| e.kind).collect()
}

#[test]
fn simple_game_round_trips_losslessly() {
    let source = indoc! {"
        [Event \"X\"]
        1. e4 e5 *"};
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.has_errors(), "{:?}", root.errors());

    let game = root.game_list().games().next().unwrap();
    let tag = game.tag_section().unwrap().tag_pairs().next().unwrap();
    assert_eq!(tag.name().unwrap().text(), "Event");
    assert_eq!(tag.value_text().as_deref(), Some("X"));

    // A single move-number pairs White's and Black's replies into one `Ply`.
    let plies: Vec<_> = game.ply_list().unwrap().plies().collect();
    assert_eq!(plies.len(), 1);
    let moves: Vec<_> = plies[0].moves().collect();
    assert_eq!(moves.len(), 2);
    assert_eq!(moves[0].text(), "e4");
    assert_eq!(moves[1].text(), "e5");
    assert_eq!(game.terminator().unwrap().text(), "*");
}

#[test]
fn unterminated_comment_is_kept_whole_with_one_error() {
    let source = "{unterminated";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert_eq!(error_kinds(source), vec![PgnErrorKind::UnterminatedMultiLineComment]);

    let err = &root.errors()[0];
    assert_eq!(err.start(), 0);
    assert_eq!(err.len(), 1);
}

#[test]
fn variation_round_trips_and_nests() {
    let source = "1. e4 (1... e5) 1-0";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.has_errors(), "{:?}", root.errors());

    let game = root.game_list().games().next().unwrap();
    let ply = game.ply_list().unwrap().plies().next().unwrap();
    let variation = ply.variations().next().unwrap();
    let inner_ply = variation.plies().next().unwrap();
    assert_eq!(inner_ply.moves().next().unwrap().text(), "e5");
    assert_eq!(game.terminator().unwrap().text(), "1-0");
}

#[test]
fn tag_pair_without_space_before_value_is_not_an_error() {
    let source = "[A\"v\"]";
    let root = parse_pgn(source);
    assert!(!root.has_errors(), "{:?}", root.errors());

    let game = root.game_list().games().next().unwrap();
    let tag = game.tag_section().unwrap().tag_pairs().next().unwrap();
    assert_eq!(tag.name().unwrap().text(), "A");
    assert_eq!(tag.value_text().as_deref(), Some("v"));
}

#[test]
fn deeply_nested_empty_parens_each_report_once() {
    let source = "(((";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert_eq!(error_kinds(source), vec![
        PgnErrorKind::EmptyVariation,
        PgnErrorKind::EmptyVariation,
        PgnErrorKind::EmptyVariation,
    ]);
}

#[test]
fn orphan_close_paren_is_retained_not_discarded() {
    let source = "1. e4 ) e5";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(error_kinds(source).contains(&PgnErrorKind::OrphanParenthesisClose));

    let game = root.game_list().games().next().unwrap();
    let plies: Vec<_> = game.ply_list().unwrap().plies().collect();
    assert_eq!(plies.len(), 2);
}

#[test]
fn unrecognised_move_is_kept_and_flagged_as_warning() {
    let source = "1. zz9 e5 *";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    let errors = root.errors();
    assert!(errors.iter().any(|e| e.kind == PgnErrorKind::UnrecognisedMove));

    let game = root.game_list().games().next().unwrap();
    let first_move = game.ply_list().unwrap().plies().next().unwrap().moves().next().unwrap();
    assert_eq!(first_move.text(), "zz9");
}

#[test]
fn illegal_character_is_reported_and_kept_verbatim() {
    let source = "1. e4 ^ e5 *";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(error_kinds(source).contains(&PgnErrorKind::IllegalCharacter));
}

#[test]
fn empty_nag_and_overflow_nag_are_both_reported() {
    let source = "1. e4 $ e5 $999 *";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    let kinds = error_kinds(source);
    assert!(kinds.contains(&PgnErrorKind::EmptyNag));
    assert!(kinds.contains(&PgnErrorKind::OverflowNag));
}

#[test]
fn tag_pair_with_no_value_is_not_an_error() {
    // TagValue is optional in the grammar; omitting it cleanly is not itself
    // a fault.
    let source = "[Event]";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.has_errors(), "{:?}", root.errors());
}

#[test]
fn tag_with_non_value_garbage_is_flagged() {
    let source = "[Event 123]";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    let kinds = error_kinds(source);
    assert!(kinds.contains(&PgnErrorKind::MissingTagValue));
    assert!(kinds.contains(&PgnErrorKind::MissingTagBracketClose));
}

#[test]
fn missing_bracket_close_synthesises_zero_length_missing_node() {
    let source = "[Event \"X\"";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(error_kinds(source).contains(&PgnErrorKind::MissingTagBracketClose));

    let game = root.game_list().games().next().unwrap();
    let tag = game.tag_section().unwrap().tag_pairs().next().unwrap();
    let missing = tag.as_cst().children().find(|n| n.kind() == SyntaxKind::Missing).unwrap();
    assert!(missing.text().is_empty());
}

#[test]
fn percent_escape_line_is_trivia_not_an_error() {
    let source = "%this whole line is a comment\n1. e4 e5 *";
    let root = parse_pgn(source);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.has_errors(), "{:?}", root.errors());
}

#[test]
fn multiple_games_in_one_document() {
    let source = "1. e4 e5 1-0 1. d4 d5 0-1";
    let root = parse_pgn(source);
    assert_eq!(root.game_list().games().count(), 2);
    assert!(!root.has_errors(), "{:?}", root.errors());
}

#[test]
fn empty_input_is_an_empty_game_list() {
    let root = parse_pgn("");
    assert_eq!(root.game_list().games().count(), 0);
    assert!(!root.has_errors());
}

#[test]
fn configured_max_variation_depth_caps_nesting_below_the_default() {
    let source = "(((";
    let config = EngineConfig { max_variation_depth: 2, ..EngineConfig::default() };
    let root = parse_pgn_with_config(source, &config);
    assert_eq!(root.syntax().text().to_string(), source);
    // The third `(` exceeds the configured depth and falls to
    // `MisplacedToken` recovery instead of opening a third `Variation`.
    let kinds: Vec<_> = root.errors().iter().map(|e| e.kind).collect();
    assert!(kinds.contains(&PgnErrorKind::MisplacedToken));
}

#[test]
fn warn_unrecognised_moves_false_suppresses_the_warning() {
    let source = "1. zz9 e5 *";
    let config = EngineConfig { warn_unrecognised_moves: false, ..EngineConfig::default() };
    let root = parse_pgn_with_config(source, &config);
    assert_eq!(root.syntax().text().to_string(), source);
    assert!(!root.errors().iter().any(|e| e.kind == PgnErrorKind::UnrecognisedMove));
}
