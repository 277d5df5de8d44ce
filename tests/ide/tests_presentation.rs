//! Tooltips, highlighting, folding, indentation and diagnostics.

use rstest::rstest;
use scrycards::ide::{FoldingKind, FoldingRange, HighlightTag, Severity};
use scrycards::{LineCol, TextSize};

use crate::helpers::host_with;

// =============================================================================
// TOOLTIP
// =============================================================================

#[rstest]
#[case("t:elf", 0, "t - Type line\n")]
#[case("c:g -type:elf", 7, "type - Type line\n")]
#[case("order:name", 8, "order - ")]
fn test_tooltip_on_tags(#[case] text: &str, #[case] offset: u32, #[case] starts: &str) {
    let host = host_with(text);
    let tooltip = host.analysis().tooltip(TextSize::new(offset)).expect("tooltip");
    assert!(tooltip.text.starts_with(starts), "{:?}", tooltip.text);
}

#[test]
fn test_tooltip_anchor_on_later_line() {
    let host = host_with("c:g\nelves: -t:elf");
    let tooltip = host.analysis().tooltip(TextSize::new(13)).expect("tooltip");
    assert_eq!(tooltip.anchor, 12);
    assert_eq!(tooltip.line_col, LineCol { line: 1, col: 8 });
}

// =============================================================================
// HIGHLIGHTING
// =============================================================================

#[test]
fn test_highlight_sequence() {
    let host = host_with("elves: -t:elf or o:\"draw\"");
    let tags: Vec<_> = host.analysis().highlights().iter().map(|s| s.tag).collect();
    assert_eq!(
        tags,
        vec![
            HighlightTag::QueryName,
            HighlightTag::QueryName,
            HighlightTag::Prefix,
            HighlightTag::Argument,
            HighlightTag::Operator,
            HighlightTag::Value,
            HighlightTag::Keyword,
            HighlightTag::Argument,
            HighlightTag::Operator,
            HighlightTag::String,
        ]
    );
}

#[test]
fn test_highlight_spans_are_ordered_and_disjoint() {
    let host = host_with("(t:elf or zz:top) -\"bolt\" name:/^a/ )");
    let spans = host.analysis().highlights();
    for pair in spans.windows(2) {
        assert!(pair[0].range.end() <= pair[1].range.start());
    }
    assert!(spans.iter().any(|s| s.tag == HighlightTag::InvalidArgument));
    assert!(spans.iter().any(|s| s.tag == HighlightTag::Regex));
}

#[test]
fn test_lsp_indices_are_distinct() {
    let all = [
        HighlightTag::Prefix,
        HighlightTag::Argument,
        HighlightTag::InvalidArgument,
        HighlightTag::Operator,
        HighlightTag::Value,
        HighlightTag::String,
        HighlightTag::Regex,
        HighlightTag::Keyword,
        HighlightTag::Paren,
        HighlightTag::QueryName,
        HighlightTag::Invalid,
    ];
    let mut indices: Vec<_> = all.iter().map(|t| t.to_lsp_index()).collect();
    indices.dedup();
    assert_eq!(indices.len(), all.len());
}

// =============================================================================
// FOLDING AND INDENTATION
// =============================================================================

#[test]
fn test_folding_queries_and_clauses() {
    let host = host_with("elves: (t:elf\n  or t:druid)\ngoblins: t:goblin");
    assert_eq!(
        host.analysis().folding_ranges(),
        vec![
            FoldingRange {
                start_line: 0,
                end_line: 1,
                kind: FoldingKind::Query
            },
            FoldingRange {
                start_line: 0,
                end_line: 1,
                kind: FoldingKind::Clause
            },
        ]
    );
}

#[rstest]
#[case("(t:elf\n", 7, 1)]
#[case("((t:elf\n", 8, 2)]
#[case("(t:elf)\n", 8, 0)]
#[case("(t:elf\n)", 7, 0)]
fn test_indent_level(#[case] text: &str, #[case] offset: u32, #[case] expected: usize) {
    let host = host_with(text);
    assert_eq!(host.analysis().indent_level(TextSize::new(offset)), expected);
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

#[test]
fn test_diagnostics_are_sorted_by_position() {
    let host = host_with("t:elf\nzz:top o>3 (");
    let found: Vec<_> = host
        .analysis()
        .diagnostics()
        .into_iter()
        .map(|d| (d.severity, d.message))
        .collect();
    assert_eq!(found.len(), 3);
    assert_eq!(found[0], (Severity::Warning, "unknown argument 'zz'".to_string()));
    assert_eq!(
        found[1],
        (
            Severity::Error,
            "operator '>' is not valid for 'o' (expected one of : =)".to_string()
        )
    );
    assert_eq!(found[2].0, Severity::Error);
}

#[rstest]
#[case("t!=elf", "operator '!=' is not valid for 't' (expected one of : =)")]
#[case("f!=modern", "operator '!=' is not valid for 'f' (expected one of : =)")]
fn test_inequality_on_membership_arguments(#[case] text: &str, #[case] message: &str) {
    let found = host_with(text).analysis().diagnostics();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].severity, Severity::Error);
    assert_eq!(found[0].message, message);
}

#[rstest]
#[case("cmc>=3 pow<tou date>2020")]
#[case("c!=r r>=rare")]
#[case("order=name dir:asc")]
fn test_valid_operators_produce_no_diagnostics(#[case] text: &str) {
    assert!(host_with(text).analysis().diagnostics().is_empty());
}
