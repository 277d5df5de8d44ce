//! Every walk must accept whatever the parser produces.

use scrycards::engine::{
    ast_from_tree, constraint_context, document_ast, document_to_string, queries_from_tree,
    tag_from_tree,
};
use scrycards::parser::parse;
use scrycards::TextSize;

use crate::helpers::fixtures::{MALFORMED_CORPUS, ROUND_TRIP_CORPUS};
use crate::helpers::{char_offsets, host_with};

#[test]
fn test_engine_walks_accept_malformed_input() {
    for source in MALFORMED_CORPUS {
        let root = parse(source).syntax();
        let doc = queries_from_tree(&root);
        for query in &doc.queries {
            assert!(query.body.to as usize <= source.len(), "{source:?}");
        }
        let _ = ast_from_tree(&root);
        let _ = document_to_string(&document_ast(&root));

        for offset in char_offsets(source) {
            let offset = TextSize::new(offset);
            if let Some(tag) = tag_from_tree(&root, offset) {
                assert!(tag.range.contains_inclusive(offset), "{source:?} at {offset:?}");
            }
            let _ = constraint_context(&root, offset);
        }
    }
}

#[test]
fn test_ide_features_accept_malformed_input() {
    for source in MALFORMED_CORPUS.iter().chain(ROUND_TRIP_CORPUS) {
        let host = host_with(source);
        let analysis = host.analysis();
        let end = TextSize::of(*source);

        for span in analysis.highlights() {
            assert!(span.range.end() <= end, "{source:?}");
        }
        for diagnostic in analysis.diagnostics() {
            assert!(diagnostic.range.end() <= end, "{source:?}");
        }
        let _ = analysis.folding_ranges();
        let _ = analysis.queries().search_requests();

        for offset in char_offsets(source) {
            let offset = TextSize::new(offset);
            if let Some(result) = analysis.completions(offset) {
                assert!(result.from <= u32::from(offset), "{source:?} at {offset:?}");
            }
            if let Some(tooltip) = analysis.tooltip(offset) {
                assert!(!tooltip.text.is_empty());
            }
            let _ = analysis.indent_level(offset);
        }
    }
}

#[test]
fn test_offsets_past_the_end_are_ignored() {
    let host = host_with("t:elf");
    let analysis = host.analysis();
    let past = TextSize::new(40);
    assert!(analysis.completions(past).is_none());
    assert!(analysis.tooltip(past).is_none());
    assert!(analysis.tag_at(past).is_none());
}
