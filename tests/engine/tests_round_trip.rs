//! Generic AST serialization round trips.

use rstest::rstest;
use scrycards::engine::{Expr, QueryTag, ast_from_tree, ast_to_string, document_ast, document_to_string};
use scrycards::parser::parse;

use crate::helpers::fixtures::ROUND_TRIP_CORPUS;

#[test]
fn test_document_round_trip_preserves_structure() {
    for source in ROUND_TRIP_CORPUS {
        let original = document_ast(&parse(source).syntax());
        let printed = document_to_string(&original);
        let reparsed = document_ast(&parse(&printed).syntax());
        assert_eq!(
            reparsed.normalized(),
            original.normalized(),
            "{source:?} printed as {printed:?}"
        );
    }
}

#[test]
fn test_printing_is_stable() {
    for source in ROUND_TRIP_CORPUS {
        let once = document_to_string(&document_ast(&parse(source).syntax()));
        let twice = document_to_string(&document_ast(&parse(&once).syntax()));
        assert_eq!(once, twice, "{source:?}");
    }
}

#[rstest]
#[case("t:creature   c:g", "t:creature c:g")]
#[case("t:elf and c:g", "t:elf c:g")]
#[case("goblin", "name:goblin")]
#[case("a b or c", "(name:a name:b) or name:c")]
#[case("-t:human", "-t:human")]
#[case("(t:elf or t:goblin) c:g", "(t:elf or t:goblin) c:g")]
fn test_printed_form(#[case] source: &str, #[case] expected: &str) {
    let expr = ast_from_tree(&parse(source).syntax()).expect("lowerable");
    assert_eq!(ast_to_string(&expr), expected);
}

#[test]
fn test_named_documents_print_one_query_per_line() {
    let source = "c:g\nelves:   t:elf\ngoblins: t:goblin";
    let printed = document_to_string(&document_ast(&parse(source).syntax()));
    assert_eq!(printed, "c:g\nelves: t:elf\ngoblins: t:goblin");
}

#[test]
fn test_built_expressions_print_with_parentheses() {
    let expr = Expr::or(
        Expr::and(
            Expr::tag(QueryTag::new("t", ":", "elf")),
            Expr::tag(QueryTag::new("c", ":", "g")),
        ),
        Expr::tag(QueryTag::new("cmc", ">=", "3").negated()),
    );
    let printed = ast_to_string(&expr);
    assert_eq!(printed, "(t:elf c:g) or -cmc>=3");

    let reparsed = ast_from_tree(&parse(&printed).syntax()).expect("lowerable");
    assert_eq!(reparsed.normalized(), expr.normalized());
}

#[test]
fn test_tags_in_order() {
    let expr = ast_from_tree(&parse("t:elf (c:g or -r:rare)").syntax()).expect("lowerable");
    let tags: Vec<_> = expr.tags().iter().map(|t| t.to_string()).collect();
    assert_eq!(tags, vec!["t:elf", "c:g", "-r:rare"]);
}

#[test]
fn test_json_shape() {
    let expr = ast_from_tree(&parse("t:elf or c:g").syntax()).expect("lowerable");
    let json = serde_json::to_value(&expr).expect("serialize");
    assert_eq!(json["type"], "binary");
    assert_eq!(json["op"], "or");
    let back: Expr = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, expr);
}
