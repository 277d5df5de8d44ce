//! Shared fixtures and helpers for integration tests.

#![allow(dead_code)]

pub mod fixtures;

use std::sync::Arc;

use scrycards::catalog::{Catalog, CatalogField};
use scrycards::ide::AnalysisHost;

/// A host over `text` with a small, predictable catalog.
pub fn host_with(text: &str) -> AnalysisHost {
    let catalog = Catalog::default()
        .with_field(
            CatalogField::CardTypes,
            vec!["creature".into(), "instant".into(), "land".into()],
        )
        .with_field(
            CatalogField::CreatureTypes,
            vec!["elf".into(), "goblin".into(), "human".into()],
        )
        .with_field(CatalogField::Supertypes, vec![]);
    let mut host = AnalysisHost::with_catalog(Arc::new(catalog));
    host.set_text(text);
    host
}

/// Every char boundary of `text`, end included.
pub fn char_offsets(text: &str) -> Vec<u32> {
    text.char_indices()
        .map(|(i, _)| i as u32)
        .chain(std::iter::once(text.len() as u32))
        .collect()
}
