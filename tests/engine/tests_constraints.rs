//! Constraint context and candidate filtering.

use rstest::rstest;
use scrycards::engine::{QueryTag, constraint_context, valid_tags_for_position};
use scrycards::parser::parse;
use scrycards::TextSize;

fn strings(tags: &[QueryTag]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_required_and_forbidden_tags_are_filtered() {
    let source = "t:creature -t:human ";
    let root = parse(source).syntax();
    let candidates = vec![
        QueryTag::new("t", ":", "creature"),
        QueryTag::new("t", ":", "elf"),
    ];
    let valid = valid_tags_for_position(&root, TextSize::of(source), &candidates);
    assert_eq!(strings(&valid), vec!["t:elf"]);
}

#[rstest]
#[case(QueryTag::new("t", ":", "human"), true)]
#[case(QueryTag::new("t", ":", "human").negated(), true)]
#[case(QueryTag::new("t", ":", "creature").negated(), true)]
#[case(QueryTag::new("t", "!=", "human"), false)]
#[case(QueryTag::new("type", ":", "human"), false)]
fn test_negation_pairs_are_constrained_together(#[case] candidate: QueryTag, #[case] expected: bool) {
    let source = "t:creature -t:human ";
    let ctx = constraint_context(&parse(source).syntax(), TextSize::of(source));
    assert_eq!(ctx.is_constrained(&candidate), expected);
}

#[test]
fn test_or_branches_do_not_constrain() {
    let source = "t:elf or t:goblin";
    let root = parse(source).syntax();
    let candidates = vec![QueryTag::new("t", ":", "goblin")];
    let valid = valid_tags_for_position(&root, TextSize::new(2), &candidates);
    assert_eq!(valid, candidates);

    let ctx = constraint_context(&root, TextSize::new(2));
    assert_eq!(ctx.alternatives.len(), 1);
    assert_eq!(strings(&ctx.alternatives[0]), vec!["t:goblin"]);
}

#[test]
fn test_domain_applies_to_every_query() {
    let source = "-r:common\nelves: t:elf\ngoblins: ";
    let ctx = constraint_context(&parse(source).syntax(), TextSize::of(source));
    assert!(ctx.required.is_empty());
    assert_eq!(strings(&ctx.forbidden), vec!["r:common"]);
}

#[test]
fn test_nested_clause_sees_enclosing_and_chain() {
    let source = "c:g (t:elf (r:rare or r:mythic) )";
    let offset = TextSize::new(source.find("r:rare").unwrap_or_default() as u32 + 2);
    let ctx = constraint_context(&parse(source).syntax(), offset);
    assert_eq!(strings(&ctx.required), vec!["t:elf", "c:g"]);
    assert_eq!(strings(&ctx.alternatives[0]), vec!["r:mythic"]);
}

#[test]
fn test_current_node_is_the_term_under_cursor() {
    let source = "t:elf c:g";
    let ctx = constraint_context(&parse(source).syntax(), TextSize::new(7));
    let current = ctx.current_node.map(|n| n.text().to_string());
    assert_eq!(current.as_deref(), Some("c:g"));
    assert_eq!(strings(&ctx.required), vec!["t:elf"]);
}
