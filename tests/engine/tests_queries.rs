//! Query extraction, settings and search requests.

use rstest::rstest;
use scrycards::parser::parse;
use scrycards::{QueryDocument, SearchRequest, queries_from_tree};

use crate::helpers::fixtures::MULTI_QUERY_DOCUMENT;

fn extract(source: &str) -> QueryDocument {
    queries_from_tree(&parse(source).syntax())
}

#[test]
fn test_all_three_settings_are_lifted() {
    let doc = extract("order:name dir:asc unique:cards t:creature");
    let body = &doc.queries[0].body;
    assert_eq!(body.settings.order.as_deref(), Some("name"));
    assert_eq!(body.settings.dir.as_deref(), Some("asc"));
    assert_eq!(body.settings.unique.as_deref(), Some("cards"));
    assert_eq!(body.merged_text_no_setting, "t:creature");
    assert_eq!(body.text, "order:name dir:asc unique:cards t:creature");
}

#[test]
fn test_last_setting_wins() {
    let doc = extract("order:name order:set");
    let body = &doc.queries[0].body;
    assert_eq!(body.settings.order.as_deref(), Some("set"));
    assert_eq!(body.merged_text_no_setting, "");
}

#[rstest]
#[case("order=cmc t:elf", Some("cmc"))]
#[case("order:\"name\" t:elf", Some("name"))]
#[case("order!=name t:elf", None)]
#[case("-order:name t:elf", None)]
#[case("order: t:elf", None)]
fn test_setting_recognition(#[case] source: &str, #[case] expected: Option<&str>) {
    let doc = extract(source);
    assert_eq!(doc.queries[0].body.settings.order.as_deref(), expected);
}

#[rstest]
#[case("order:name t:elf or t:goblin", "t:elf or t:goblin")]
#[case("t:elf or t:goblin order:name", "t:elf or t:goblin")]
#[case("t:elf or order:name", "t:elf")]
#[case("c:g (t:elf order:name)", "c:g (t:elf)")]
#[case("(t:elf or t:goblin) and order:name", "(t:elf or t:goblin)")]
fn test_settings_anywhere_in_body(#[case] source: &str, #[case] residual: &str) {
    let body = extract(source).queries.remove(0).body;
    assert_eq!(body.settings.order.as_deref(), Some("name"));
    assert_eq!(body.merged_text_no_setting, residual);
    assert!(parse(residual).ok(), "residual does not parse: {residual}");
}

#[test]
fn test_domain_settings_are_inherited() {
    let doc = extract(MULTI_QUERY_DOCUMENT);
    let domain = doc.domain.as_ref().expect("domain");
    assert_eq!(domain.settings.order.as_deref(), Some("name"));
    assert_eq!(domain.merged_text_no_setting, "");

    let names: Vec<_> = doc
        .queries
        .iter()
        .filter_map(|q| q.name.as_ref().map(|n| n.text.as_str()))
        .collect();
    assert_eq!(names, vec!["q1", "q2"]);

    let requests = doc.search_requests();
    assert_eq!(
        requests,
        vec![
            SearchRequest {
                q: "t:creature".to_string(),
                order: Some("name".to_string()),
                dir: None,
                unique: None,
            },
            SearchRequest {
                q: "t:instant".to_string(),
                order: Some("set".to_string()),
                dir: None,
                unique: None,
            },
        ]
    );
}

#[test]
fn test_domain_filters_are_combined_with_query_filters() {
    let doc = extract("c:g unique:art\nelves: t:elf dir:desc\nall:");
    let requests = doc.search_requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].q, "(c:g) (t:elf)");
    assert_eq!(requests[0].unique.as_deref(), Some("art"));
    assert_eq!(requests[0].dir.as_deref(), Some("desc"));
    assert_eq!(requests[1].q, "c:g");
    assert_eq!(
        requests[0].to_query_pairs(),
        vec![
            ("q", "(c:g) (t:elf)".to_string()),
            ("dir", "desc".to_string()),
            ("unique", "art".to_string()),
        ]
    );
}

#[test]
fn test_segment_offsets_point_into_source() {
    let source = MULTI_QUERY_DOCUMENT;
    let doc = extract(source);
    for query in &doc.queries {
        let body = &query.body;
        assert_eq!(&source[body.from as usize..body.to as usize], body.text);
        if let Some(name) = &query.name {
            assert_eq!(&source[name.from as usize..name.to as usize], name.text);
        }
    }
}

#[test]
fn test_segments_serialize_in_camel_case() {
    let doc = extract("order:name t:elf");
    let json = serde_json::to_value(&doc.queries[0].body).expect("serialize");
    assert_eq!(json["mergedTextNoSetting"], "t:elf");
    assert_eq!(json["settings"]["order"], "name");
}
