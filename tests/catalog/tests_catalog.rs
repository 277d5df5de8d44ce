//! Loading catalogs from disk and from search API responses.

use std::sync::Arc;

use scrycards::catalog::{Catalog, CatalogField};
use scrycards::ide::AnalysisHost;
use scrycards::{EditorSettings, Error, TextSize};

#[test]
fn test_catalog_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");

    let catalog = Catalog::default()
        .with_field(CatalogField::CardNames, vec!["Llanowar Elves".into()])
        .with_otags(vec!["mana-dork".into()]);
    std::fs::write(&path, serde_json::to_string(&catalog).expect("serialize")).expect("write");

    let loaded = Catalog::load(&path).expect("load");
    assert_eq!(loaded, catalog);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Catalog::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    let err = EditorSettings::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_malformed_file_is_a_json_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{ not json").expect("write");
    assert!(matches!(Catalog::load(&path), Err(Error::Json(_))));
}

#[test]
fn test_every_field_parses_from_its_endpoint() {
    for field in CatalogField::ALL {
        let parsed: CatalogField = field.endpoint().parse().expect("known endpoint");
        assert_eq!(parsed, field);
    }
}

#[test]
fn test_catalog_response_feeds_completion() {
    let body = r#"{"object":"catalog","uri":"https://api.example/catalog/keyword-abilities",
        "total_values":2,"data":["Flying","Flash"]}"#;
    let catalog = Catalog::default()
        .with_scryfall_catalog(CatalogField::KeywordAbilities, body)
        .expect("catalog");
    assert_eq!(catalog.field(CatalogField::KeywordAbilities), ["Flying", "Flash"]);

    let mut host = AnalysisHost::with_catalog(Arc::new(catalog));
    host.set_text("kw:fl");
    let result = host.analysis().completions(TextSize::new(5)).expect("values");
    let labels: Vec<_> = result.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Flying", "Flash"]);
    assert_eq!(result.items[0].section, Some("keyword abilities"));
}

#[test]
fn test_sets_complete_with_name_and_release() {
    let body = r#"{"object":"list","data":[
        {"object":"set","code":"dom","name":"Dominaria","released_at":"2018-04-27"}
    ]}"#;
    let catalog = Catalog::default().with_scryfall_sets(body).expect("sets");

    let mut host = AnalysisHost::with_catalog(Arc::new(catalog));
    host.set_text("e:do");
    let result = host.analysis().completions(TextSize::new(4)).expect("values");
    assert_eq!(result.items.len(), 1);
    let item = &result.items[0];
    assert_eq!(item.label, "dom");
    assert_eq!(item.detail.as_deref(), Some("Dominaria"));
    assert_eq!(item.info.as_deref(), Some("Released 2018-04-27"));
}
