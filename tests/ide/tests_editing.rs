//! Host state: edits, editor settings and catalog swaps.

use std::sync::Arc;

use scrycards::catalog::{Catalog, CatalogField};
use scrycards::ide::AnalysisHost;
use scrycards::{EditorSettings, TextRange, TextSize};

use crate::helpers::host_with;

#[test]
fn test_set_text_returns_parse_errors() {
    let mut host = AnalysisHost::new();
    assert!(host.set_text("t:elf").is_empty());
    assert_eq!(host.set_text("(t:elf").len(), 1);
    assert!(host.set_text("").is_empty());
}

#[test]
fn test_edits_replace_ranges() {
    let mut host = host_with("t:elf c:g");
    let range = TextRange::new(TextSize::new(2), TextSize::new(5));
    assert!(host.apply_edit(range, "goblin"));
    assert_eq!(host.text(), "t:goblin c:g");

    let doc = host.analysis().queries();
    assert_eq!(doc.queries[0].body.text, "t:goblin c:g");
}

#[test]
fn test_edits_past_the_end_are_clamped() {
    let mut host = host_with("t:");
    let range = TextRange::new(TextSize::new(10), TextSize::new(20));
    assert!(host.apply_edit(range, "elf"));
    assert_eq!(host.text(), "t:elf");
}

#[test]
fn test_edits_inside_a_character_are_rejected() {
    let mut host = host_with("a:é");
    let range = TextRange::empty(TextSize::new(3));
    assert!(!host.apply_edit(range, "x"));
    assert_eq!(host.text(), "a:é");
}

#[test]
fn test_snapshot_reflects_latest_text() {
    let mut host = host_with("t:elf");
    assert!(host.analysis().diagnostics().is_empty());
    host.apply_edit(TextRange::empty(TextSize::new(5)), " (");
    let analysis = host.analysis();
    assert_eq!(analysis.text(), "t:elf (");
    assert!(!analysis.syntax_errors().is_empty());
    assert_eq!(analysis.line_index().line_count(), 1);
}

#[test]
fn test_settings_loaded_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"autoDetail": false}"#).expect("write");

    let settings = EditorSettings::load(&path).expect("load");
    assert!(!settings.auto_detail);
    assert!(settings.auto_info);

    let mut host = host_with("pow");
    host.set_settings(settings);
    let result = host.analysis().completions(TextSize::new(3)).expect("arguments");
    assert!(result.items.iter().all(|i| i.detail.is_none()));
    assert!(result.items.iter().all(|i| i.info.is_some()));
}

#[test]
fn test_catalog_swap_changes_values() {
    let mut host = host_with("t:mer");
    let before = host.analysis().completions(TextSize::new(5)).expect("values");
    assert!(before.items.is_empty());

    let catalog = Catalog::default()
        .with_field(CatalogField::CreatureTypes, vec!["Merfolk".into()]);
    host.set_catalog(Arc::new(catalog));
    let after = host.analysis().completions(TextSize::new(5)).expect("values");
    let labels: Vec<_> = after.items.iter().map(|i| i.label.as_str()).collect();
    assert_eq!(labels, vec!["Merfolk"]);
}
