//! Catalog-backed value candidates for an argument kind.

use serde::Serialize;

use super::ArgKind;
use crate::catalog::Catalog;
use crate::config::EditorSettings;

/// A candidate value for a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CompletionInfo {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_label: Option<String>,
    /// Provenance group for grouped display (e.g. "creature types").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<&'static str>,
}

impl CompletionInfo {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: None,
            info: None,
            display_label: None,
            section: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn with_display_label(mut self, display_label: impl Into<String>) -> Self {
        self.display_label = Some(display_label.into());
        self
    }

    pub fn with_section(mut self, section: &'static str) -> Self {
        self.section = Some(section);
        self
    }
}

/// Which optional texts candidates carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOptions {
    pub detail: bool,
    pub info: bool,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            detail: true,
            info: true,
        }
    }
}

impl From<EditorSettings> for CompletionOptions {
    fn from(settings: EditorSettings) -> Self {
        Self {
            detail: settings.auto_detail,
            info: settings.auto_info,
        }
    }
}

/// Section names of the `type` aggregation, in display order.
pub const TYPE_SECTIONS: [&str; 9] = [
    "card types",
    "creature types",
    "artifact types",
    "enchantment types",
    "land types",
    "planeswalker types",
    "battle types",
    "spell types",
    "supertypes",
];

/// Candidate values for `kind`, or `None` when the kind takes free text,
/// numbers, mana symbols, dates or ids.
pub fn completion_info_from_arg(
    kind: ArgKind,
    catalog: &Catalog,
    options: CompletionOptions,
) -> Option<Vec<CompletionInfo>> {
    let items = match kind {
        ArgKind::Oracle
        | ArgKind::Flavor
        | ArgKind::Number
        | ArgKind::Date
        | ArgKind::Uuid
        | ArgKind::Mana
        | ArgKind::Cmc
        | ArgKind::PowTou => return None,
        ArgKind::Type => {
            let fields = [
                &catalog.card_types,
                &catalog.creature_types,
                &catalog.artifact_types,
                &catalog.enchantment_types,
                &catalog.land_types,
                &catalog.planeswalker_types,
                &catalog.battle_types,
                &catalog.spell_types,
                &catalog.supertypes,
            ];
            fields
                .into_iter()
                .zip(TYPE_SECTIONS)
                .flat_map(|(values, section)| sectioned(values, section, options))
                .collect()
        }
        ArgKind::Keyword => [
            (&catalog.keyword_abilities, "keyword abilities"),
            (&catalog.keyword_actions, "keyword actions"),
            (&catalog.ability_words, "ability words"),
        ]
        .into_iter()
        .flat_map(|(values, section)| sectioned(values, section, options))
        .collect(),
        ArgKind::Set => catalog
            .sets
            .iter()
            .map(|set| {
                let mut item = CompletionInfo::new(&set.code);
                if options.detail {
                    item = item.with_detail(&set.name);
                }
                if options.info {
                    if let Some(released) = &set.released {
                        item = item.with_info(format!("Released {released}"));
                    }
                }
                item
            })
            .collect(),
        ArgKind::Product => plain(&catalog.products),
        ArgKind::Is => plain(&catalog.is_values),
        ArgKind::Power => plain(&catalog.powers),
        ArgKind::Toughness => plain(&catalog.toughnesses),
        ArgKind::Loyalty => plain(&catalog.loyalties),
        ArgKind::Name => plain(&catalog.card_names),
        ArgKind::Color => plain(&catalog.colors),
        ArgKind::Rarity => plain(&catalog.rarities),
        ArgKind::Cube => plain(&catalog.cubes),
        ArgKind::Format => plain(&catalog.formats),
        ArgKind::Artist => plain(&catalog.artist_names),
        ArgKind::Watermark => plain(&catalog.watermarks),
        ArgKind::Border => plain(&catalog.borders),
        ArgKind::Frame => plain(&catalog.frames),
        ArgKind::Stamp => plain(&catalog.stamps),
        ArgKind::Atag => plain(&catalog.atags),
        ArgKind::Otag => plain(&catalog.otags),
        ArgKind::Game => plain(&catalog.games),
        ArgKind::Unique => plain(&catalog.uniques),
        ArgKind::Order => plain(&catalog.orders),
        ArgKind::Dir => plain(&catalog.directions),
    };
    Some(items)
}

fn plain(values: &[String]) -> Vec<CompletionInfo> {
    values.iter().map(CompletionInfo::new).collect()
}

fn sectioned<'a>(
    values: &'a [String],
    section: &'static str,
    options: CompletionOptions,
) -> impl Iterator<Item = CompletionInfo> + 'a {
    values.iter().map(move |value| {
        let item = CompletionInfo::new(value).with_section(section);
        if options.detail {
            item.with_detail(section)
        } else {
            item
        }
    })
}
