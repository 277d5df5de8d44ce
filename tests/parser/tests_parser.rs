//! Integration tests for the lexer and parser.

use rstest::rstest;
use scrycards::parser::{SyntaxKind, parse, tokenize};

use crate::helpers::fixtures::{MALFORMED_CORPUS, ROUND_TRIP_CORPUS};

fn top_level_kinds(source: &str) -> Vec<SyntaxKind> {
    parse(source).syntax().children().map(|n| n.kind()).collect()
}

// =============================================================================
// LOSSLESSNESS
// =============================================================================

#[test]
fn test_tree_text_matches_source_for_every_fixture() {
    for source in ROUND_TRIP_CORPUS.iter().chain(MALFORMED_CORPUS) {
        let parse = parse(source);
        assert_eq!(
            parse.syntax().text().to_string(),
            *source,
            "tree lost text for {source:?}"
        );
    }
}

#[test]
fn test_tokens_cover_the_source() {
    for source in ROUND_TRIP_CORPUS.iter().chain(MALFORMED_CORPUS) {
        let joined: String = tokenize(source).iter().map(|t| t.text).collect();
        assert_eq!(joined, *source);
    }
}

#[test]
fn test_well_formed_fixtures_have_no_errors() {
    for source in ROUND_TRIP_CORPUS {
        let parse = parse(source);
        assert!(parse.ok(), "{source:?} produced {:?}", parse.errors);
    }
}

// =============================================================================
// DOCUMENT STRUCTURE
// =============================================================================

#[rstest]
#[case("t:elf", vec![SyntaxKind::TAG])]
#[case("elves: t:elf", vec![SyntaxKind::QUERY])]
#[case("c:g\nelves: t:elf", vec![SyntaxKind::DOMAIN, SyntaxKind::QUERY])]
#[case(
    "elves: t:elf\ngoblins: t:goblin",
    vec![SyntaxKind::QUERY, SyntaxKind::QUERY]
)]
fn test_query_headers(#[case] source: &str, #[case] expected: Vec<SyntaxKind>) {
    assert_eq!(top_level_kinds(source), expected);
}

#[rstest]
#[case("t: c:g")]
#[case("o: flying")]
#[case("set: dom")]
fn test_argument_aliases_are_not_query_names(#[case] source: &str) {
    assert!(!top_level_kinds(source).contains(&SyntaxKind::QUERY));
}

#[test]
fn test_query_name_text() {
    let root = parse("c:g\nelves: t:elf").syntax();
    let name = root
        .descendants()
        .find(|n| n.kind() == SyntaxKind::QUERY_NAME)
        .map(|n| n.text().to_string());
    assert_eq!(name.as_deref(), Some("elves"));
}

// =============================================================================
// ERROR RECOVERY
// =============================================================================

#[rstest]
#[case("(t:elf")]
#[case("t:elf )")]
#[case("t: c:g")]
#[case(">=")]
#[case("-(t:elf)")]
fn test_malformed_input_reports_errors(#[case] source: &str) {
    let parse = parse(source);
    assert!(!parse.ok(), "expected errors for {source:?}");
    let end = parse.syntax().text_range().end();
    for error in &parse.errors {
        assert!(error.range.end() <= end, "{error:?} is out of bounds");
        assert!(!error.message.is_empty());
    }
}

#[test]
fn test_recovery_keeps_later_tags() {
    let root = parse("t:elf ) c:g").syntax();
    let tags = root
        .descendants()
        .filter(|n| n.kind() == SyntaxKind::TAG)
        .count();
    assert_eq!(tags, 2);
}
